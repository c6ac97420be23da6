//! Text drawing helpers over the workspace's mono fonts.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_7X13, FONT_9X15_BOLD},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::{into_ok, Surface};

/// Text size roles used across the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// 6x10: captions, departure lists.
    Small,
    /// 7x13: body copy, bar text.
    Body,
    /// 9x15 bold: leg titles, figures.
    Title,
    /// 10x20: the clock base glyphs (scaled up when drawn).
    Clock,
}

impl TextSize {
    /// The backing mono font.
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Body => &FONT_7X13,
            TextSize::Title => &FONT_9X15_BOLD,
            TextSize::Clock => &FONT_10X20,
        }
    }

    /// Horizontal advance per character.
    pub fn char_advance(&self) -> u32 {
        let font = self.font();
        font.character_size.width + font.character_spacing
    }

    /// Height of one text line.
    pub fn line_height(&self) -> u32 {
        self.font().character_size.height
    }
}

/// Width in pixels of `text` rendered at `size`.
pub fn text_width(text: &str, size: TextSize) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    chars.saturating_mul(size.char_advance())
}

/// Draw `text` with its top-left corner at `origin`.
pub fn draw_text<D>(
    target: &mut D,
    text: &str,
    origin: Point,
    size: TextSize,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = MonoTextStyle::new(size.font(), color);
    Text::with_baseline(text, origin, style, Baseline::Top).draw(target)?;
    Ok(())
}

/// Draw `text` double-struck one pixel apart for a bold weight the mono
/// fonts cannot provide on their own.
pub fn draw_text_bold<D>(
    target: &mut D,
    text: &str,
    origin: Point,
    size: TextSize,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    draw_text(target, text, origin, size, color)?;
    draw_text(target, text, origin + Point::new(1, 0), size, color)?;
    Ok(())
}

/// Draw `text` with its top-RIGHT corner at `(right, top)`.
pub fn draw_text_right<D>(
    target: &mut D,
    text: &str,
    right: i32,
    top: i32,
    size: TextSize,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let w = i32::try_from(text_width(text, size)).unwrap_or(i32::MAX);
    draw_text(target, text, Point::new(right - w, top), size, color)
}

/// Draw `text` horizontally centered in a band `width` wide.
pub fn draw_text_centered<D>(
    target: &mut D,
    text: &str,
    width: u32,
    top: i32,
    size: TextSize,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let w = text_width(text, size).min(width);
    let x = i32::try_from((width - w) / 2).unwrap_or(0);
    draw_text(target, text, Point::new(x, top), size, color)
}

/// Draw `text` magnified by an integer factor.
///
/// The glyphs are rendered once at native size into a scratch surface, then
/// each ink pixel becomes a `scale`x`scale` block. Mono fonts top out at
/// 10x20, and the header clock needs to be readable from across a room.
pub fn draw_text_scaled<D>(
    target: &mut D,
    text: &str,
    origin: Point,
    size: TextSize,
    scale: u32,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let scale = scale.max(1);
    let w = text_width(text, size).max(1);
    let h = size.line_height().max(1);

    let mut scratch = Surface::new(w, h);
    into_ok(draw_text(
        &mut scratch,
        text,
        Point::zero(),
        size,
        BinaryColor::On,
    ));

    let block = PrimitiveStyle::with_fill(color);
    for y in 0..h {
        for x in 0..w {
            if scratch.is_ink(x, y) {
                let offset = Point::new(
                    i32::try_from(x * scale).unwrap_or(i32::MAX),
                    i32::try_from(y * scale).unwrap_or(i32::MAX),
                );
                Rectangle::new(origin + offset, Size::new(scale, scale))
                    .into_styled(block)
                    .draw(target)?;
            }
        }
    }
    Ok(())
}

/// Width in pixels of `text` drawn at `size` magnified by `scale`.
pub fn scaled_text_width(text: &str, size: TextSize, scale: u32) -> u32 {
    text_width(text, size).saturating_mul(scale.max(1))
}
