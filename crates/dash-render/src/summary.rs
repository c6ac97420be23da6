//! Summary zone: the black status bar under the header.

use dash_model::{DashboardSnapshot, StatusKind};
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
};

use crate::style::fill_rect;
use crate::text::{draw_text, draw_text_centered, draw_text_right, TextSize};
use crate::{into_ok, Surface};

const MARGIN: i32 = 12;

/// Status phrasing for the left end of the bar.
///
/// The snapshot's `status` is already priority-resolved upstream, so a plain
/// exhaustive match renders the right wording; disruption phrasing can
/// never lose to delay phrasing because both never reach this function.
fn status_phrase(snap: &DashboardSnapshot) -> String {
    match snap.status {
        StatusKind::Normal => {
            if snap.arrive_by.is_empty() {
                "ON TIME".to_string()
            } else {
                format!("ON TIME - ARRIVE {}", snap.arrive_by)
            }
        }
        StatusKind::Delay => format!("DELAYS - ARRIVE {}", snap.arrive_by),
        StatusKind::Disruption => "SERVICE DISRUPTION - CHECK LEGS".to_string(),
        StatusKind::Diversion => "ROUTE DIVERSION IN PLACE".to_string(),
    }
}

/// Coffee phrasing for the middle of the bar. The decision logic's own
/// subtext wins when it provides one.
fn coffee_phrase(snap: &DashboardSnapshot) -> String {
    if !snap.coffee.subtext.is_empty() {
        return snap.coffee.subtext.clone();
    }
    if snap.coffee.cafe_closed {
        "CAFE CLOSED".to_string()
    } else if !snap.coffee.can_get {
        "NO TIME FOR COFFEE".to_string()
    } else if snap.coffee.urgent {
        "COFFEE - BE QUICK".to_string()
    } else {
        "COFFEE OK".to_string()
    }
}

/// Leave-countdown phrasing for the right end of the bar.
fn leave_phrase(snap: &DashboardSnapshot) -> Option<String> {
    snap.leave_in_minutes.map(|mins| {
        if mins <= 0 {
            "LEAVE NOW".to_string()
        } else {
            format!("LEAVE IN {mins} MIN")
        }
    })
}

/// Paint the summary bar: inverted text on a full-width black band.
pub fn draw(surface: &mut Surface, snap: &DashboardSnapshot) {
    let width = surface.width();
    let height = surface.height();
    into_ok(fill_rect(
        surface,
        Rectangle::new(Point::zero(), Size::new(width, height)),
        BinaryColor::On,
    ));

    let text_top =
        i32::try_from(height.saturating_sub(TextSize::Body.line_height()) / 2).unwrap_or(0);

    into_ok(draw_text(
        surface,
        &status_phrase(snap),
        Point::new(MARGIN, text_top),
        TextSize::Body,
        BinaryColor::Off,
    ));

    let centre = format!("{} MIN DOOR TO DOOR - {}", snap.total_minutes, coffee_phrase(snap));
    into_ok(draw_text_centered(
        surface,
        &centre,
        width,
        text_top,
        TextSize::Body,
        BinaryColor::Off,
    ));

    if let Some(leave) = leave_phrase(snap) {
        into_ok(draw_text_right(
            surface,
            &leave,
            i32::try_from(width).unwrap_or(0) - MARGIN,
            text_top,
            TextSize::Body,
            BinaryColor::Off,
        ));
    }
}
