//! Declared per-zone field lists.
//!
//! Each zone reads a fixed subset of the snapshot; its signature covers
//! exactly that subset. Paint routines are held to the same lists by the
//! pipeline's isolation tests: mutating a field outside a zone's list must
//! leave both its signature and its painted pixels unchanged.

use crate::registry::ZoneId;

/// One snapshot field a zone may depend on.
///
/// Leg-scoped variants refer to the leg occupying the zone's row slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotField {
    /// `snapshot.location`
    Location,
    /// `snapshot.destination`
    Destination,
    /// `snapshot.current_time`
    CurrentTime,
    /// `snapshot.am_pm`
    AmPm,
    /// `snapshot.day`
    Day,
    /// `snapshot.date`
    Date,
    /// `snapshot.weather.temperature`
    WeatherTemperature,
    /// `snapshot.weather.condition`
    WeatherCondition,
    /// `snapshot.weather.needs_umbrella`
    WeatherUmbrella,
    /// `snapshot.status`
    Status,
    /// `snapshot.arrive_by`
    ArriveBy,
    /// `snapshot.total_minutes`
    TotalMinutes,
    /// `snapshot.leave_in_minutes`
    LeaveInMinutes,
    /// `snapshot.coffee.can_get`
    CoffeeCanGet,
    /// `snapshot.coffee.urgent`
    CoffeeUrgent,
    /// `snapshot.coffee.cafe_closed`
    CoffeeCafeClosed,
    /// `snapshot.coffee.subtext`
    CoffeeSubtext,
    /// Whether the slot's leg exists at all.
    LegSlotOccupied,
    /// `leg.ordinal`
    LegOrdinal,
    /// `leg.kind`
    LegKind,
    /// `leg.title`
    LegTitle,
    /// `leg.subtitle`
    LegSubtitle,
    /// `leg.minutes`
    LegMinutes,
    /// `leg.state`
    LegState,
    /// `leg.delay_minutes`
    LegDelayMinutes,
    /// `leg.next_departures`
    LegNextDepartures,
    /// `leg.depart_time`
    LegDepartTime,
}

const HEADER_FIELDS: &[SnapshotField] = &[
    SnapshotField::CurrentTime,
    SnapshotField::AmPm,
    SnapshotField::Day,
    SnapshotField::Date,
    SnapshotField::WeatherTemperature,
    SnapshotField::WeatherCondition,
    SnapshotField::WeatherUmbrella,
];

const SUMMARY_FIELDS: &[SnapshotField] = &[
    SnapshotField::Status,
    SnapshotField::ArriveBy,
    SnapshotField::TotalMinutes,
    SnapshotField::LeaveInMinutes,
    SnapshotField::CoffeeCanGet,
    SnapshotField::CoffeeUrgent,
    SnapshotField::CoffeeCafeClosed,
    SnapshotField::CoffeeSubtext,
];

const LEG_ROW_FIELDS: &[SnapshotField] = &[
    SnapshotField::LegSlotOccupied,
    SnapshotField::LegOrdinal,
    SnapshotField::LegKind,
    SnapshotField::LegTitle,
    SnapshotField::LegSubtitle,
    SnapshotField::LegMinutes,
    SnapshotField::LegState,
    SnapshotField::LegDelayMinutes,
    SnapshotField::LegNextDepartures,
    SnapshotField::LegDepartTime,
];

const FOOTER_FIELDS: &[SnapshotField] = &[
    SnapshotField::Location,
    SnapshotField::Destination,
    SnapshotField::ArriveBy,
];

/// The declared field list of a zone.
pub fn zone_fields(id: ZoneId) -> &'static [SnapshotField] {
    match id {
        ZoneId::Header => HEADER_FIELDS,
        ZoneId::Summary => SUMMARY_FIELDS,
        ZoneId::LegRow(_) => LEG_ROW_FIELDS,
        ZoneId::Footer => FOOTER_FIELDS,
    }
}
