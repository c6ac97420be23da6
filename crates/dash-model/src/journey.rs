//! Journey legs: the ordered steps of a configured commute.

use serde::{Deserialize, Serialize};

/// Travel mode of a journey leg.
///
/// Every paint site matches on this exhaustively, so adding a variant forces
/// each drawing routine to handle it at compile time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegKind {
    /// On foot between stops or to the destination.
    Walk,
    /// The optional coffee stop.
    Coffee,
    /// Metropolitan or regional rail.
    Train,
    /// Light rail.
    Tram,
    /// Bus, including rail-replacement services.
    Bus,
    /// Dwell time at an interchange.
    Wait,
}

/// Live status of a single leg.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegState {
    /// Running as scheduled.
    Normal,
    /// Running late; `delay_minutes` carries the figure.
    Delayed,
    /// Dropped from today's journey (e.g. no time for coffee). A skipped leg
    /// keeps its row slot but contributes no ordinal and no minutes.
    Skip,
    /// Service suspended; the leg cannot be taken.
    Suspended,
    /// Service diverted from its usual route.
    Diverted,
}

/// One step of the configured journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyLeg {
    /// Dense 1-based position among non-skipped legs; `None` for skipped
    /// legs. Assigned by [`assign_ordinals`], not by the upstream feed.
    pub ordinal: Option<u8>,
    /// Travel mode.
    pub kind: LegKind,
    /// Primary line, e.g. the line or stop name.
    pub title: String,
    /// Secondary line, e.g. platform or direction.
    pub subtitle: String,
    /// Scheduled duration of this leg.
    pub minutes: u32,
    /// Live status.
    pub state: LegState,
    /// Late-running figure, present when `state` is [`LegState::Delayed`].
    pub delay_minutes: Option<u32>,
    /// Minutes until the next departures of this service, soonest first.
    pub next_departures: Vec<u32>,
    /// Pre-formatted departure clock time, when the feed provides one.
    pub depart_time: Option<String>,
}

impl JourneyLeg {
    /// Create a leg in [`LegState::Normal`] with empty optional fields.
    pub fn new(kind: LegKind, title: impl Into<String>, minutes: u32) -> Self {
        Self {
            ordinal: None,
            kind,
            title: title.into(),
            subtitle: String::new(),
            minutes,
            state: LegState::Normal,
            delay_minutes: None,
            next_departures: Vec::new(),
            depart_time: None,
        }
    }

    /// Whether this leg counts toward ordinals and elapsed time.
    pub fn is_counted(&self) -> bool {
        self.state != LegState::Skip
    }
}

/// Assign dense 1-based ordinals to every non-skipped leg, clearing the
/// ordinal of skipped legs.
///
/// A skipped leg retains its position in the sequence but does not consume a
/// number, so the remaining legs read 1, 2, 3… with no gap.
pub fn assign_ordinals(legs: &mut [JourneyLeg]) {
    let mut next: u8 = 1;
    for leg in legs.iter_mut() {
        if leg.is_counted() {
            leg.ordinal = Some(next);
            next = next.saturating_add(1);
        } else {
            leg.ordinal = None;
        }
    }
}

/// Total journey duration, excluding skipped legs.
pub fn journey_minutes(legs: &[JourneyLeg]) -> u32 {
    legs.iter()
        .filter(|l| l.is_counted())
        .map(|l| l.minutes)
        .sum()
}
