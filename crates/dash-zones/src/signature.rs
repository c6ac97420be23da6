//! Canonical zone signatures.
//!
//! A signature is the canonical byte encoding of a zone's declared fields,
//! not a hash of them, so "the signature changed" and "a covered field
//! changed" are exactly the same statement. Strings are length-prefixed,
//! integers fixed-width little-endian, enums a single discriminant byte,
//! lists count-prefixed: no two distinct field values share an encoding and
//! no field's encoding can run into its neighbour's.

use dash_model::{DashboardSnapshot, JourneyLeg, LegKind, LegState, StatusKind};

use crate::fields::{zone_fields, SnapshotField};
use crate::registry::ZoneId;

/// Deterministic fingerprint of one zone's inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// The canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes, for log lines and size assertions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature is empty (it never is for a registry zone).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute the signature of `zone` over `snapshot`.
///
/// Pure and deterministic: equal inputs yield byte-identical output, and
/// fields outside the zone's declared list cannot influence the result
/// because the writer only visits the declared list.
pub fn signature(zone: ZoneId, snapshot: &DashboardSnapshot) -> Signature {
    let leg = match zone {
        ZoneId::LegRow(slot) => snapshot.legs.get(usize::from(slot)),
        _ => None,
    };

    let mut w = SigWriter::default();
    for field in zone_fields(zone) {
        w.field(*field, snapshot, leg);
    }
    Signature(w.bytes)
}

#[derive(Default)]
struct SigWriter {
    bytes: Vec<u8>,
}

impl SigWriter {
    fn field(&mut self, field: SnapshotField, snap: &DashboardSnapshot, leg: Option<&JourneyLeg>) {
        match field {
            SnapshotField::Location => self.string(&snap.location),
            SnapshotField::Destination => self.string(&snap.destination),
            SnapshotField::CurrentTime => self.string(&snap.current_time),
            SnapshotField::AmPm => self.string(&snap.am_pm),
            SnapshotField::Day => self.string(&snap.day),
            SnapshotField::Date => self.string(&snap.date),
            SnapshotField::WeatherTemperature => self.string(&snap.weather.temperature),
            SnapshotField::WeatherCondition => self.string(&snap.weather.condition),
            SnapshotField::WeatherUmbrella => self.flag(snap.weather.needs_umbrella),
            SnapshotField::Status => self.byte(status_tag(snap.status)),
            SnapshotField::ArriveBy => self.string(&snap.arrive_by),
            SnapshotField::TotalMinutes => self.u32(snap.total_minutes),
            SnapshotField::LeaveInMinutes => self.opt_i32(snap.leave_in_minutes),
            SnapshotField::CoffeeCanGet => self.flag(snap.coffee.can_get),
            SnapshotField::CoffeeUrgent => self.flag(snap.coffee.urgent),
            SnapshotField::CoffeeCafeClosed => self.flag(snap.coffee.cafe_closed),
            SnapshotField::CoffeeSubtext => self.string(&snap.coffee.subtext),
            SnapshotField::LegSlotOccupied => self.flag(leg.is_some()),
            SnapshotField::LegOrdinal => self.opt_u8(leg.and_then(|l| l.ordinal)),
            SnapshotField::LegKind => match leg {
                Some(l) => self.byte(kind_tag(l.kind)),
                None => self.absent(),
            },
            SnapshotField::LegTitle => self.opt_string(leg.map(|l| l.title.as_str())),
            SnapshotField::LegSubtitle => self.opt_string(leg.map(|l| l.subtitle.as_str())),
            SnapshotField::LegMinutes => match leg {
                Some(l) => self.u32(l.minutes),
                None => self.absent(),
            },
            SnapshotField::LegState => match leg {
                Some(l) => self.byte(state_tag(l.state)),
                None => self.absent(),
            },
            SnapshotField::LegDelayMinutes => self.opt_u32(leg.and_then(|l| l.delay_minutes)),
            SnapshotField::LegNextDepartures => match leg {
                Some(l) => self.u32_list(&l.next_departures),
                None => self.absent(),
            },
            SnapshotField::LegDepartTime => {
                self.opt_string(leg.and_then(|l| l.depart_time.as_deref()));
            }
        }
    }

    fn byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    fn flag(&mut self, v: bool) {
        self.bytes.push(u8::from(v));
    }

    /// Marker for "this slot/field has no value", distinct from every
    /// present-value encoding because present values start with 0x01.
    fn absent(&mut self) {
        self.bytes.push(0);
    }

    fn present(&mut self) {
        self.bytes.push(1);
    }

    fn u32(&mut self, v: u32) {
        self.bytes.extend_from_slice(&v.to_le_bytes());
    }

    fn string(&mut self, s: &str) {
        let len = u32::try_from(s.len()).unwrap_or(u32::MAX);
        self.u32(len);
        self.bytes.extend_from_slice(s.as_bytes());
    }

    fn opt_string(&mut self, s: Option<&str>) {
        match s {
            Some(s) => {
                self.present();
                self.string(s);
            }
            None => self.absent(),
        }
    }

    fn opt_u8(&mut self, v: Option<u8>) {
        match v {
            Some(v) => {
                self.present();
                self.byte(v);
            }
            None => self.absent(),
        }
    }

    fn opt_u32(&mut self, v: Option<u32>) {
        match v {
            Some(v) => {
                self.present();
                self.u32(v);
            }
            None => self.absent(),
        }
    }

    fn opt_i32(&mut self, v: Option<i32>) {
        match v {
            Some(v) => {
                self.present();
                self.bytes.extend_from_slice(&v.to_le_bytes());
            }
            None => self.absent(),
        }
    }

    fn u32_list(&mut self, vs: &[u32]) {
        let len = u32::try_from(vs.len()).unwrap_or(u32::MAX);
        self.u32(len);
        for v in vs.iter().take(len as usize) {
            self.u32(*v);
        }
    }
}

fn status_tag(s: StatusKind) -> u8 {
    match s {
        StatusKind::Normal => 0,
        StatusKind::Delay => 1,
        StatusKind::Disruption => 2,
        StatusKind::Diversion => 3,
    }
}

fn kind_tag(k: LegKind) -> u8 {
    match k {
        LegKind::Walk => 0,
        LegKind::Coffee => 1,
        LegKind::Train => 2,
        LegKind::Tram => 3,
        LegKind::Bus => 4,
        LegKind::Wait => 5,
    }
}

fn state_tag(s: LegState) -> u8 {
    match s {
        LegState::Normal => 0,
        LegState::Delayed => 1,
        LegState::Skip => 2,
        LegState::Suspended => 3,
        LegState::Diverted => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_model::{JourneyLeg, LegKind, LegState};

    fn sample_snapshot() -> DashboardSnapshot {
        let mut snap = DashboardSnapshot {
            location: "FLEMINGTON".into(),
            destination: "PARLIAMENT".into(),
            current_time: "8:42".into(),
            am_pm: "AM".into(),
            day: "WEDNESDAY".into(),
            date: "6 AUG".into(),
            arrive_by: "9:02".into(),
            leave_in_minutes: Some(7),
            legs: vec![
                JourneyLeg::new(LegKind::Walk, "WALK TO STOP", 5),
                JourneyLeg::new(LegKind::Tram, "ROUTE 57", 12),
                JourneyLeg::new(LegKind::Train, "CRAIGIEBURN LINE", 15),
            ],
            ..DashboardSnapshot::default()
        };
        snap.weather.temperature = "14C".into();
        snap.weather.condition = "SHOWERS".into();
        snap.legs[1].next_departures = vec![3, 10, 17];
        snap.normalize_journey();
        snap
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let snap = sample_snapshot();
        for zone in crate::all_zone_ids() {
            assert_eq!(signature(zone, &snap), signature(zone, &snap));
        }
    }

    #[test]
    fn clone_produces_identical_signatures() {
        let snap = sample_snapshot();
        let copy = snap.clone();
        for zone in crate::all_zone_ids() {
            assert_eq!(signature(zone, &snap), signature(zone, &copy));
        }
    }

    #[test]
    fn header_ignores_leg_changes() {
        let snap = sample_snapshot();
        let mut changed = snap.clone();
        changed.legs[1].minutes = 99;
        changed.legs[1].title = "SOMETHING ELSE".into();
        assert_eq!(
            signature(ZoneId::Header, &snap),
            signature(ZoneId::Header, &changed)
        );
    }

    #[test]
    fn leg_row_tracks_only_its_slot() {
        let snap = sample_snapshot();
        let mut changed = snap.clone();
        changed.legs[1].minutes = 99;

        assert_ne!(
            signature(ZoneId::LegRow(1), &snap),
            signature(ZoneId::LegRow(1), &changed)
        );
        assert_eq!(
            signature(ZoneId::LegRow(0), &snap),
            signature(ZoneId::LegRow(0), &changed)
        );
        assert_eq!(
            signature(ZoneId::LegRow(2), &snap),
            signature(ZoneId::LegRow(2), &changed)
        );
    }

    #[test]
    fn empty_slot_differs_from_occupied_slot() {
        let snap = sample_snapshot();
        assert_ne!(
            signature(ZoneId::LegRow(2), &snap),
            signature(ZoneId::LegRow(5), &snap)
        );
    }

    #[test]
    fn departure_list_order_matters() {
        let snap = sample_snapshot();
        let mut reordered = snap.clone();
        reordered.legs[1].next_departures = vec![10, 3, 17];
        assert_ne!(
            signature(ZoneId::LegRow(1), &snap),
            signature(ZoneId::LegRow(1), &reordered)
        );
    }

    #[test]
    fn empty_and_missing_subtitle_differ_from_each_other() {
        // Absent (no leg) and present-but-empty must not collide.
        let mut a = sample_snapshot();
        a.legs[0].subtitle = String::new();
        let sig_empty = signature(ZoneId::LegRow(0), &a);

        a.legs[0].subtitle = "X".into();
        let sig_x = signature(ZoneId::LegRow(0), &a);
        assert_ne!(sig_empty, sig_x);
    }

    #[test]
    fn adjacent_strings_cannot_alias() {
        // "AB" + "C" must not fingerprint like "A" + "BC".
        let a = DashboardSnapshot {
            location: "AB".into(),
            destination: "C".into(),
            ..DashboardSnapshot::default()
        };
        let b = DashboardSnapshot {
            location: "A".into(),
            destination: "BC".into(),
            ..DashboardSnapshot::default()
        };

        assert_ne!(
            signature(ZoneId::Footer, &a),
            signature(ZoneId::Footer, &b)
        );
    }

    #[test]
    fn status_kinds_fingerprint_distinctly() {
        let mut snap = sample_snapshot();
        let mut seen = Vec::new();
        for status in [
            StatusKind::Normal,
            StatusKind::Delay,
            StatusKind::Disruption,
            StatusKind::Diversion,
        ] {
            snap.status = status;
            let sig = signature(ZoneId::Summary, &snap);
            assert!(!seen.contains(&sig));
            seen.push(sig);
        }
    }

    #[test]
    fn signatures_are_compact() {
        let snap = sample_snapshot();
        for zone in crate::all_zone_ids() {
            let sig = signature(zone, &snap);
            assert!(!sig.is_empty());
            assert!(sig.len() < 256, "{zone} signature unexpectedly large");
        }
    }
}
