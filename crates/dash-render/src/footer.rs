//! Footer zone: the static location/destination bar.

use dash_model::DashboardSnapshot;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::{Line, PrimitiveStyle}};

use crate::text::{draw_text, draw_text_right, TextSize};
use crate::{into_ok, Surface};

const MARGIN: i32 = 12;

/// Paint the footer: route summary left, arrival target right, separated
/// from the leg rows by a top rule.
pub fn draw(surface: &mut Surface, snap: &DashboardSnapshot) {
    let width = surface.width();
    let height = surface.height();

    into_ok(
        Line::new(
            Point::zero(),
            Point::new(i32::try_from(width).unwrap_or(0) - 1, 0),
        )
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(surface),
    );

    let text_top =
        i32::try_from(height.saturating_sub(TextSize::Body.line_height()) / 2).unwrap_or(0) + 1;

    let route = if snap.location.is_empty() && snap.destination.is_empty() {
        String::new()
    } else {
        format!("{} TO {}", snap.location, snap.destination)
    };
    if !route.is_empty() {
        into_ok(draw_text(
            surface,
            &route,
            Point::new(MARGIN, text_top),
            TextSize::Body,
            BinaryColor::On,
        ));
    }

    if !snap.arrive_by.is_empty() {
        into_ok(draw_text_right(
            surface,
            &format!("ARRIVE BY {}", snap.arrive_by),
            i32::try_from(width).unwrap_or(0) - MARGIN,
            text_top,
            TextSize::Body,
            BinaryColor::On,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_shows_route_and_arrival() {
        let snap = DashboardSnapshot {
            location: "FLEMINGTON".into(),
            destination: "PARLIAMENT".into(),
            arrive_by: "9:02".into(),
            ..DashboardSnapshot::default()
        };
        let mut s = Surface::new(800, 32);
        draw(&mut s, &snap);

        // Top rule spans the width.
        for x in 0..800 {
            assert!(s.is_ink(x, 0));
        }
        // Text on both ends.
        let left_ink = (0..300)
            .flat_map(|x| (1..32).map(move |y| (x, y)))
            .filter(|(x, y)| s.is_ink(*x, *y))
            .count();
        let right_ink = (500..800)
            .flat_map(|x| (1..32).map(move |y| (x, y)))
            .filter(|(x, y)| s.is_ink(*x, *y))
            .count();
        assert!(left_ink > 0);
        assert!(right_ink > 0);
    }

    #[test]
    fn empty_fields_leave_only_the_rule() {
        let snap = DashboardSnapshot::default();
        let mut s = Surface::new(800, 32);
        draw(&mut s, &snap);
        assert_eq!(s.ink_count(), 800);
    }
}
