//! Border and fill styles shared by the zone paint routines.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};

/// Fill `rect` solid.
pub fn fill_rect<D>(target: &mut D, rect: Rectangle, color: BinaryColor) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color)).draw(target)?;
    Ok(())
}

/// Stroke `rect` with an inside-aligned solid border.
pub fn stroke_rect<D>(
    target: &mut D,
    rect: Rectangle,
    width: u32,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(width)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    rect.into_styled(style).draw(target)?;
    Ok(())
}

/// Stroke `rect` with a dashed single-pixel border.
///
/// Dash phase restarts at each corner so all four corners carry ink.
pub fn dashed_rect<D>(
    target: &mut D,
    rect: Rectangle,
    dash: u32,
    gap: u32,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if rect.size.width == 0 || rect.size.height == 0 {
        return Ok(());
    }
    let left = rect.top_left.x;
    let top = rect.top_left.y;
    let right = left + i32::try_from(rect.size.width).unwrap_or(i32::MAX) - 1;
    let bottom = top + i32::try_from(rect.size.height).unwrap_or(i32::MAX) - 1;

    dashed_line(target, Point::new(left, top), Point::new(right, top), dash, gap, color)?;
    dashed_line(
        target,
        Point::new(left, bottom),
        Point::new(right, bottom),
        dash,
        gap,
        color,
    )?;
    dashed_line(target, Point::new(left, top), Point::new(left, bottom), dash, gap, color)?;
    dashed_line(
        target,
        Point::new(right, top),
        Point::new(right, bottom),
        dash,
        gap,
        color,
    )?;
    Ok(())
}

/// Draw a horizontal or vertical dashed line from `a` to `b` inclusive.
pub fn dashed_line<D>(
    target: &mut D,
    a: Point,
    b: Point,
    dash: u32,
    gap: u32,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let dash = i32::try_from(dash.max(1)).unwrap_or(1);
    let gap = i32::try_from(gap.max(1)).unwrap_or(1);
    let style = PrimitiveStyle::with_stroke(color, 1);

    if a.y == b.y {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let mut x = x0;
        while x <= x1 {
            let end = (x + dash - 1).min(x1);
            Line::new(Point::new(x, a.y), Point::new(end, a.y))
                .into_styled(style)
                .draw(target)?;
            x = end + 1 + gap;
        }
    } else {
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        let mut y = y0;
        while y <= y1 {
            let end = (y + dash - 1).min(y1);
            Line::new(Point::new(a.x, y), Point::new(a.x, end))
                .into_styled(style)
                .draw(target)?;
            y = end + 1 + gap;
        }
    }
    Ok(())
}

/// Fill `rect` with 45° diagonal hatching at the given line spacing.
pub fn hatch_fill<D>(
    target: &mut D,
    rect: Rectangle,
    spacing: u32,
    color: BinaryColor,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if rect.size.width == 0 || rect.size.height == 0 {
        return Ok(());
    }
    let spacing = i32::try_from(spacing.max(2)).unwrap_or(8);
    let w = i32::try_from(rect.size.width).unwrap_or(i32::MAX);
    let h = i32::try_from(rect.size.height).unwrap_or(i32::MAX);
    let style = PrimitiveStyle::with_stroke(color, 1);

    let mut clipped = target.clipped(&rect);
    let mut offset = -h;
    while offset < w {
        let start = Point::new(rect.top_left.x + offset, rect.top_left.y);
        let end = Point::new(rect.top_left.x + offset + h, rect.top_left.y + h - 1);
        Line::new(start, end).into_styled(style).draw(&mut clipped)?;
        offset += spacing;
    }
    Ok(())
}
