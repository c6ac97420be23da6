//! Journey-leg row zones.
//!
//! One routine paints every occupied slot; the visual treatment branches on
//! the leg's live state:
//!
//! - `Normal`: solid border, full content
//! - `Delayed`: dashed border, content, "+N MIN" badge
//! - `Skip` / `Suspended`: diagonal hatch instead of content
//! - `Diverted`: dashed border, content, detour arrow

use dash_model::{DashboardSnapshot, JourneyLeg, LegState};
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
};

use crate::glyph::{draw_diversion_arrow, ModeGlyph};
use crate::style::{dashed_rect, fill_rect, hatch_fill, stroke_rect};
use crate::text::{draw_text, draw_text_right, text_width, TextSize};
use crate::{into_ok, PaintError, Surface};

const MARGIN: i32 = 8;
const BADGE_DIAMETER: u32 = 32;
const GLYPH_SIZE: u32 = 26;

/// Paint one leg-row slot. Empty slots stay paper white.
pub fn draw(surface: &mut Surface, snap: &DashboardSnapshot, slot: u8) -> Result<(), PaintError> {
    let Some(leg) = snap.legs.get(usize::from(slot)) else {
        return Ok(());
    };
    validate(leg, slot)?;

    let width = surface.width();
    let height = surface.height();
    let bounds = Rectangle::new(Point::zero(), Size::new(width, height));

    match leg.state {
        LegState::Skip | LegState::Suspended => {
            // Hatched-out row: the leg holds its slot but shows no content.
            into_ok(stroke_rect(surface, bounds, 1, BinaryColor::On));
            into_ok(hatch_fill(surface, bounds, 8, BinaryColor::On));
            return Ok(());
        }
        LegState::Normal => {
            into_ok(stroke_rect(surface, bounds, 1, BinaryColor::On));
        }
        LegState::Delayed | LegState::Diverted => {
            into_ok(dashed_rect(surface, bounds, 6, 4, BinaryColor::On));
        }
    }

    draw_content(surface, leg);

    match leg.state {
        LegState::Delayed => {
            // Validated above: a delayed leg always carries its figure.
            let delay = leg.delay_minutes.unwrap_or_default();
            draw_delay_badge(surface, leg, delay);
        }
        LegState::Diverted => {
            let x = i32::try_from(width).unwrap_or(0) - 44;
            into_ok(draw_diversion_arrow(surface, Point::new(x, 28), 16));
        }
        LegState::Normal | LegState::Skip | LegState::Suspended => {}
    }

    Ok(())
}

fn validate(leg: &JourneyLeg, slot: u8) -> Result<(), PaintError> {
    match leg.state {
        LegState::Skip | LegState::Suspended => Ok(()),
        LegState::Delayed if leg.delay_minutes.is_none() => {
            Err(PaintError::MissingDelay { slot })
        }
        _ if leg.title.is_empty() => Err(PaintError::EmptyTitle { slot }),
        _ => Ok(()),
    }
}

fn draw_content(surface: &mut Surface, leg: &JourneyLeg) {
    let width = surface.width();

    // Ordinal badge: outlined circle with the step number.
    if let Some(ordinal) = leg.ordinal {
        let badge_origin = Point::new(MARGIN, 9);
        into_ok(
            Circle::new(badge_origin, BADGE_DIAMETER)
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
                .draw(surface),
        );
        let num = ordinal.to_string();
        let num_w = i32::try_from(text_width(&num, TextSize::Title)).unwrap_or(0);
        let num_x = badge_origin.x + i32::try_from(BADGE_DIAMETER).unwrap_or(0) / 2 - num_w / 2;
        into_ok(draw_text(
            surface,
            &num,
            Point::new(num_x, 17),
            TextSize::Title,
            BinaryColor::On,
        ));
    }

    // Mode pictogram.
    into_ok(ModeGlyph::new(leg.kind, GLYPH_SIZE).render(surface, Point::new(52, 12)));

    // Title and subtitle.
    into_ok(draw_text(
        surface,
        &leg.title,
        Point::new(92, 7),
        TextSize::Title,
        BinaryColor::On,
    ));
    if !leg.subtitle.is_empty() {
        into_ok(draw_text(
            surface,
            &leg.subtitle,
            Point::new(92, 30),
            TextSize::Small,
            BinaryColor::On,
        ));
    }

    // Right-hand column: duration on top, departures or clock time below.
    let right = i32::try_from(width).unwrap_or(0) - MARGIN - 4;
    into_ok(draw_text_right(
        surface,
        &format!("{} MIN", leg.minutes),
        right,
        7,
        TextSize::Title,
        BinaryColor::On,
    ));

    if !leg.next_departures.is_empty() {
        let times: Vec<String> = leg
            .next_departures
            .iter()
            .take(3)
            .map(u32::to_string)
            .collect();
        let line = format!("NEXT {} MIN", times.join("/"));
        into_ok(draw_text_right(
            surface,
            &line,
            right,
            32,
            TextSize::Small,
            BinaryColor::On,
        ));
    } else if let Some(depart) = &leg.depart_time {
        into_ok(draw_text_right(
            surface,
            &format!("DEP {depart}"),
            right,
            32,
            TextSize::Small,
            BinaryColor::On,
        ));
    }
}

fn draw_delay_badge(surface: &mut Surface, leg: &JourneyLeg, delay: u32) {
    let width = surface.width();
    let label = format!("+{delay} MIN");
    let label_w = text_width(&label, TextSize::Small);

    let minutes_w = text_width(&format!("{} MIN", leg.minutes), TextSize::Title);
    let badge_w = label_w + 10;
    let badge_x = i32::try_from(width).unwrap_or(0)
        - MARGIN
        - 4
        - i32::try_from(minutes_w).unwrap_or(0)
        - i32::try_from(badge_w).unwrap_or(0)
        - 10;

    into_ok(fill_rect(
        surface,
        Rectangle::new(Point::new(badge_x, 6), Size::new(badge_w, 16)),
        BinaryColor::On,
    ));
    into_ok(draw_text(
        surface,
        &label,
        Point::new(badge_x + 5, 9),
        TextSize::Small,
        BinaryColor::Off,
    ));
}
