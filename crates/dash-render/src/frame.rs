//! Full-frame assembly: every zone composed onto one device-sized surface.

use dash_model::DashboardSnapshot;
use dash_specs::DeviceProfile;
use dash_zones::{all_zone_ids, zone_rect_for};

use crate::{paint_zone, PaintError, Surface};

/// Paint the complete dashboard for a profile as a single surface.
///
/// The frame is the mosaic of the per-zone surfaces at their scaled
/// rectangles, identical pixels to what the cached zone path produces,
/// used when a client wants one image or a zone has outgrown its buffer.
pub fn paint_frame(
    snap: &DashboardSnapshot,
    profile: &DeviceProfile,
) -> Result<Surface, PaintError> {
    let (width, height) = profile.layout_size();
    let mut frame = Surface::new(width, height);

    for zone in all_zone_ids() {
        let rect = zone_rect_for(zone, profile);
        let painted = paint_zone(zone, snap, profile)?;
        frame.blit(&painted, rect.x, rect.y);
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_model::{JourneyLeg, LegKind};
    use dash_specs::{KINDLE_PW, TRMNL_OG};
    use dash_zones::ZoneId;

    fn snapshot() -> DashboardSnapshot {
        let mut snap = DashboardSnapshot {
            location: "FLEMINGTON".into(),
            destination: "PARLIAMENT".into(),
            current_time: "8:42".into(),
            am_pm: "AM".into(),
            day: "WEDNESDAY".into(),
            date: "6 AUG".into(),
            arrive_by: "9:02".into(),
            legs: vec![
                JourneyLeg::new(LegKind::Walk, "WALK TO STOP", 5),
                JourneyLeg::new(LegKind::Train, "CRAIGIEBURN LINE", 15),
            ],
            ..DashboardSnapshot::default()
        };
        snap.normalize_journey();
        snap
    }

    #[test]
    fn frame_matches_profile_dimensions() {
        let frame = paint_frame(&snapshot(), &TRMNL_OG).unwrap();
        assert_eq!((frame.width(), frame.height()), (800, 480));

        let kindle = paint_frame(&snapshot(), &KINDLE_PW).unwrap();
        assert_eq!((kindle.width(), kindle.height()), (1024, 758));
    }

    #[test]
    fn frame_equals_zone_mosaic() {
        let snap = snapshot();
        let frame = paint_frame(&snap, &TRMNL_OG).unwrap();

        for zone in [ZoneId::Header, ZoneId::Summary, ZoneId::LegRow(0), ZoneId::Footer] {
            let rect = zone_rect_for(zone, &TRMNL_OG);
            let painted = paint_zone(zone, &snap, &TRMNL_OG).unwrap();
            for y in 0..rect.h {
                for x in 0..rect.w {
                    assert_eq!(
                        frame.pixel(rect.x + x, rect.y + y),
                        painted.pixel(x, y),
                        "frame diverges from {zone} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn paint_failure_propagates() {
        let mut snap = snapshot();
        snap.legs[0].title.clear();
        assert!(paint_frame(&snap, &TRMNL_OG).is_err());
    }
}
