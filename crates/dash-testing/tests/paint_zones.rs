//! Zone-paint behavior checked through the probe API.
//!
//! These tests pin the visual contract of the paint routines: what each leg
//! state looks like, that the summary bar phrasing follows the resolved
//! status, and that pixels only move when a zone's declared fields move.

use dash_model::{
    CoffeeVerdict, DashboardSnapshot, JourneyLeg, LegKind, LegState, StatusKind, WeatherSummary,
};
use dash_render::{paint_zone, Surface};
use dash_specs::TRMNL_OG;
use dash_testing::{assert_surfaces_equal, diff_count, SurfaceProbe};
use dash_zones::{all_zone_ids, ZoneId};

fn commute_snapshot() -> DashboardSnapshot {
    let mut snap = DashboardSnapshot {
        location: "FLEMINGTON".into(),
        destination: "PARLIAMENT".into(),
        current_time: "8:42".into(),
        am_pm: "AM".into(),
        day: "WEDNESDAY".into(),
        date: "6 AUG".into(),
        weather: WeatherSummary {
            temperature: "14C".into(),
            condition: "SHOWERS".into(),
            needs_umbrella: true,
        },
        status: StatusKind::Normal,
        arrive_by: "9:02".into(),
        leave_in_minutes: Some(7),
        coffee: CoffeeVerdict {
            can_get: true,
            urgent: false,
            cafe_closed: false,
            subtext: String::new(),
        },
        legs: vec![
            JourneyLeg::new(LegKind::Walk, "WALK TO STOP", 5),
            {
                let mut coffee = JourneyLeg::new(LegKind::Coffee, "COFFEE AT MARKET", 5);
                coffee.state = LegState::Skip;
                coffee
            },
            {
                let mut tram = JourneyLeg::new(LegKind::Tram, "ROUTE 57", 12);
                tram.next_departures = vec![3, 10, 17];
                tram
            },
            JourneyLeg::new(LegKind::Train, "CRAIGIEBURN LINE", 15),
        ],
        ..DashboardSnapshot::default()
    };
    snap.normalize_journey();
    snap
}

fn paint(zone: ZoneId, snap: &DashboardSnapshot) -> Surface {
    paint_zone(zone, snap, &TRMNL_OG).expect("paint failed")
}

#[test]
fn summary_renders_disruption_over_delay_phrasing() {
    // Upstream resolves simultaneous delay + disruption to Disruption; the
    // painted bar must then differ from the pure-delay rendering.
    let mut delayed = commute_snapshot();
    delayed.status = StatusKind::Delay;
    let mut disrupted = commute_snapshot();
    disrupted.status =
        StatusKind::worst_of([StatusKind::Delay, StatusKind::Disruption]);
    assert_eq!(disrupted.status, StatusKind::Disruption);

    let delay_bar = paint(ZoneId::Summary, &delayed);
    let disruption_bar = paint(ZoneId::Summary, &disrupted);
    assert!(
        diff_count(&delay_bar, &disruption_bar) > 0,
        "disruption snapshot painted identical pixels to delay snapshot"
    );
}

#[test]
fn summary_bar_is_predominantly_ink() {
    let bar = paint(ZoneId::Summary, &commute_snapshot());
    let probe = SurfaceProbe::new(&bar);
    assert!(probe.ink_ratio() > 0.5);
    assert!(probe.ink_ratio() < 1.0);
}

#[test]
fn skipped_coffee_row_is_hatched_not_texted() {
    let snap = commute_snapshot();
    let skipped_row = paint(ZoneId::LegRow(1), &snap);
    let probe = SurfaceProbe::new(&skipped_row);

    // Hatch ink is spread across the row, including regions a text layout
    // would leave blank.
    probe.assert_region_has_ink(700, 10, 60, 30).unwrap();
    probe.assert_region_has_ink(350, 10, 60, 30).unwrap();

    // Hatch plus border is sparse compared to a solid fill.
    assert!(probe.ink_ratio() < 0.5);
}

#[test]
fn occupied_and_empty_rows_differ() {
    let snap = commute_snapshot();
    let occupied = paint(ZoneId::LegRow(0), &snap);
    let empty = paint(ZoneId::LegRow(5), &snap);

    assert!(SurfaceProbe::new(&occupied).ink_ratio() > 0.0);
    assert_eq!(SurfaceProbe::new(&empty).ink_ratio(), 0.0);
}

#[test]
fn delayed_leg_gains_a_badge() {
    let snap = commute_snapshot();
    let normal_row = paint(ZoneId::LegRow(3), &snap);

    let mut late = snap.clone();
    late.legs[3].state = LegState::Delayed;
    late.legs[3].delay_minutes = Some(6);
    let delayed_row = paint(ZoneId::LegRow(3), &late);

    assert!(diff_count(&normal_row, &delayed_row) > 0);
}

#[test]
fn header_pixels_ignore_undeclared_fields() {
    let snap = commute_snapshot();
    let before = paint(ZoneId::Header, &snap);

    // Mutate everything the header does NOT declare.
    let mut other = snap.clone();
    other.location = "ELSEWHERE".into();
    other.destination = "NOWHERE".into();
    other.status = StatusKind::Disruption;
    other.arrive_by = "11:59".into();
    other.total_minutes = 99;
    other.leave_in_minutes = Some(-5);
    other.coffee.can_get = false;
    other.coffee.subtext = "NO COFFEE".into();
    other.legs[0].minutes = 42;
    let after = paint(ZoneId::Header, &other);

    assert_surfaces_equal(&before, &after).unwrap();
}

#[test]
fn footer_pixels_ignore_clock_and_legs() {
    let snap = commute_snapshot();
    let before = paint(ZoneId::Footer, &snap);

    let mut other = snap.clone();
    other.current_time = "11:11".into();
    other.day = "FRIDAY".into();
    other.weather.temperature = "31C".into();
    other.legs[2].title = "REPLACEMENT BUS".into();
    let after = paint(ZoneId::Footer, &other);

    assert_surfaces_equal(&before, &after).unwrap();
}

#[test]
fn leg_row_pixels_ignore_sibling_legs() {
    let snap = commute_snapshot();
    let before = paint(ZoneId::LegRow(2), &snap);

    let mut other = snap.clone();
    other.legs[0].minutes = 55;
    other.legs[3].state = LegState::Delayed;
    other.legs[3].delay_minutes = Some(12);
    let after = paint(ZoneId::LegRow(2), &other);

    assert_surfaces_equal(&before, &after).unwrap();
}

#[test]
fn umbrella_flag_changes_header_pixels() {
    let snap = commute_snapshot();
    let with_umbrella = paint(ZoneId::Header, &snap);

    let mut dry = snap.clone();
    dry.weather.needs_umbrella = false;
    let without = paint(ZoneId::Header, &dry);

    assert!(diff_count(&with_umbrella, &without) > 0);
}

#[test]
fn all_zones_paint_without_failures_on_a_full_snapshot() {
    let snap = commute_snapshot();
    for zone in all_zone_ids() {
        let surface = paint(zone, &snap);
        assert_eq!(surface.width() % 32, 0, "{zone} width breaks packing");
    }
}
