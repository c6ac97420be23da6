//! Header zone: clock, day/date, weather block.

use dash_model::DashboardSnapshot;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::glyph::draw_umbrella;
use crate::text::{
    draw_text, draw_text_right, draw_text_scaled, scaled_text_width, text_width, TextSize,
};
use crate::{into_ok, Surface};

const MARGIN: i32 = 16;
const CLOCK_SCALE: u32 = 3;

/// Paint the header.
///
/// Reads only the zone's declared fields: the four clock/date strings and
/// the weather block.
pub fn draw(surface: &mut Surface, snap: &DashboardSnapshot) {
    let width = surface.width();

    // Clock, magnified from the largest mono font, with AM/PM tucked
    // against its baseline.
    let clock_top = 12;
    into_ok(draw_text_scaled(
        surface,
        &snap.current_time,
        Point::new(MARGIN, clock_top),
        TextSize::Clock,
        CLOCK_SCALE,
        BinaryColor::On,
    ));
    let clock_w = scaled_text_width(&snap.current_time, TextSize::Clock, CLOCK_SCALE);
    let clock_h = TextSize::Clock.line_height() * CLOCK_SCALE;
    let am_pm_x = MARGIN + i32::try_from(clock_w).unwrap_or(0) + 8;
    let am_pm_y = clock_top + i32::try_from(clock_h - TextSize::Title.line_height()).unwrap_or(0);
    into_ok(draw_text(
        surface,
        &snap.am_pm,
        Point::new(am_pm_x, am_pm_y),
        TextSize::Title,
        BinaryColor::On,
    ));

    // Day and date, stacked in the middle of the band.
    let mid_x = i32::try_from(width / 2).unwrap_or(0) - 40;
    into_ok(draw_text(
        surface,
        &snap.day,
        Point::new(mid_x, 20),
        TextSize::Title,
        BinaryColor::On,
    ));
    into_ok(draw_text(
        surface,
        &snap.date,
        Point::new(mid_x, 46),
        TextSize::Body,
        BinaryColor::On,
    ));

    // Weather block against the right edge.
    let right = i32::try_from(width).unwrap_or(0) - MARGIN;
    into_ok(draw_text_right(
        surface,
        &snap.weather.temperature,
        right,
        16,
        TextSize::Title,
        BinaryColor::On,
    ));
    into_ok(draw_text_right(
        surface,
        &snap.weather.condition,
        right,
        44,
        TextSize::Small,
        BinaryColor::On,
    ));
    if snap.weather.needs_umbrella {
        let temp_w = i32::try_from(text_width(&snap.weather.temperature, TextSize::Title))
            .unwrap_or(0);
        let glyph_x = right - temp_w - 28;
        into_ok(draw_umbrella(surface, Point::new(glyph_x, 12), 20));
    }
}
