//! The dashboard snapshot: one moment's display state.

use serde::{Deserialize, Serialize};

use crate::journey::{assign_ordinals, journey_minutes, JourneyLeg};

/// Weather block shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Pre-formatted temperature, or a dash when the feed is unavailable.
    pub temperature: String,
    /// Short condition label, e.g. "PARTLY CLOUDY".
    pub condition: String,
    /// Whether rain is expected along the journey window.
    pub needs_umbrella: bool,
}

/// Overall service status, already priority-resolved upstream.
///
/// The summary bar renders strictly from this one field and never re-derives
/// it from the legs. When several conditions hold at once the upstream
/// resolver applies the priority encoded by [`StatusKind::worst_of`]:
/// Disruption over Delay over Diversion over Normal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusKind {
    /// Everything running to schedule.
    #[default]
    Normal,
    /// At least one leg is running late.
    Delay,
    /// A service on the journey is suspended or severely disrupted.
    Disruption,
    /// A service is running off its usual route.
    Diversion,
}

impl StatusKind {
    /// Severity rank; higher wins when statuses are combined.
    fn severity(self) -> u8 {
        match self {
            StatusKind::Normal => 0,
            StatusKind::Diversion => 1,
            StatusKind::Delay => 2,
            StatusKind::Disruption => 3,
        }
    }

    /// Resolve simultaneous conditions to the one the summary bar shows.
    ///
    /// ```
    /// use dash_model::StatusKind;
    ///
    /// let worst = StatusKind::worst_of([StatusKind::Delay, StatusKind::Disruption]);
    /// assert_eq!(worst, StatusKind::Disruption);
    /// ```
    pub fn worst_of(statuses: impl IntoIterator<Item = StatusKind>) -> StatusKind {
        statuses
            .into_iter()
            .max_by_key(|s| s.severity())
            .unwrap_or(StatusKind::Normal)
    }
}

/// Verdict from the coffee-stop decision logic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoffeeVerdict {
    /// There is time for coffee on today's journey.
    pub can_get: bool,
    /// There is time, but only just.
    pub urgent: bool,
    /// The cafe is closed regardless of timing.
    pub cafe_closed: bool,
    /// Pre-phrased one-liner from the decision logic.
    pub subtext: String,
}

/// The immutable display state for one evaluation.
///
/// Rebuilt fresh on every poll; the rendering pipeline never mutates it.
/// Clock and date fields are pre-formatted display strings; no timezone
/// logic happens downstream of the snapshot builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Short origin display name.
    pub location: String,
    /// Short destination display name.
    pub destination: String,
    /// Clock time, e.g. "8:42".
    pub current_time: String,
    /// "AM" or "PM".
    pub am_pm: String,
    /// Day name, e.g. "WEDNESDAY".
    pub day: String,
    /// Date line, e.g. "6 AUG".
    pub date: String,
    /// Header weather block.
    pub weather: WeatherSummary,
    /// Priority-resolved service status.
    pub status: StatusKind,
    /// Target arrival clock time, e.g. "9:02".
    pub arrive_by: String,
    /// Journey duration over all counted legs. Kept consistent with `legs`
    /// by [`DashboardSnapshot::normalize_journey`].
    pub total_minutes: u32,
    /// Minutes until the user should leave, when known. Negative means they
    /// are already late.
    pub leave_in_minutes: Option<i32>,
    /// Ordered journey legs. Never empty once a journey is configured.
    pub legs: Vec<JourneyLeg>,
    /// Coffee-stop verdict.
    pub coffee: CoffeeVerdict,
}

impl DashboardSnapshot {
    /// Re-establish the journey invariants after the leg list changes:
    /// dense ordinals over non-skipped legs and `total_minutes` equal to
    /// their summed duration.
    pub fn normalize_journey(&mut self) {
        assign_ordinals(&mut self.legs);
        self.total_minutes = journey_minutes(&self.legs);
    }
}
