//! Small pictogram glyphs built from primitives.
//!
//! Mode glyphs identify each journey leg at a glance; the umbrella and
//! diversion arrow annotate the header and diverted legs. All are drawn from
//! `embedded-graphics` primitives so they scale with the box size they are
//! given and need no bitmap assets.

use dash_model::LegKind;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle},
};

/// Pictogram for a journey-leg travel mode.
pub struct ModeGlyph {
    kind: LegKind,
    size: u32,
}

impl ModeGlyph {
    /// Create a glyph for `kind` fitting a `size`×`size` box.
    pub fn new(kind: LegKind, size: u32) -> Self {
        Self {
            kind,
            size: size.max(8),
        }
    }

    /// Bounding box of the glyph.
    pub fn dimensions(&self) -> Size {
        Size::new(self.size, self.size)
    }

    /// Render the glyph with its top-left corner at `position`.
    pub fn render<D>(&self, target: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self.kind {
            LegKind::Walk => self.render_walk(target, position),
            LegKind::Coffee => self.render_coffee(target, position),
            LegKind::Train => self.render_train(target, position),
            LegKind::Tram => self.render_tram(target, position),
            LegKind::Bus => self.render_bus(target, position),
            LegKind::Wait => self.render_wait(target, position),
        }
    }

    fn s(&self, num: u32, den: u32) -> i32 {
        i32::try_from(self.size * num / den).unwrap_or(0)
    }

    fn render_walk<D>(&self, target: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        // Head
        let head = self.size / 4;
        Circle::new(p + Point::new(self.s(3, 8), 0), head)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)?;
        // Torso
        let hip = p + Point::new(self.s(1, 2), self.s(5, 8));
        Line::new(p + Point::new(self.s(1, 2), self.s(1, 4)), hip)
            .into_styled(stroke)
            .draw(target)?;
        // Legs mid-stride
        Line::new(hip, p + Point::new(self.s(1, 4), self.s(1, 1)))
            .into_styled(stroke)
            .draw(target)?;
        Line::new(hip, p + Point::new(self.s(3, 4), self.s(1, 1)))
            .into_styled(stroke)
            .draw(target)?;
        Ok(())
    }

    fn render_coffee<D>(&self, target: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        // Cup body
        let cup = Rectangle::new(
            p + Point::new(self.s(1, 8), self.s(3, 8)),
            Size::new(self.size / 2, self.size / 2),
        );
        cup.into_styled(stroke).draw(target)?;
        // Handle
        Circle::new(p + Point::new(self.s(5, 8), self.s(1, 2)), self.size / 4)
            .into_styled(stroke)
            .draw(target)?;
        // Steam
        Line::new(
            p + Point::new(self.s(1, 4), self.s(1, 8)),
            p + Point::new(self.s(1, 4), self.s(1, 4)),
        )
        .into_styled(stroke)
        .draw(target)?;
        Line::new(
            p + Point::new(self.s(1, 2), self.s(1, 8)),
            p + Point::new(self.s(1, 2), self.s(1, 4)),
        )
        .into_styled(stroke)
        .draw(target)?;
        Ok(())
    }

    fn render_train<D>(&self, target: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        // Carriage with a window, on two wheels
        Rectangle::new(
            p + Point::new(self.s(1, 8), self.s(1, 8)),
            Size::new(self.size * 3 / 4, self.size / 2),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)?;
        Rectangle::new(
            p + Point::new(self.s(1, 4), self.s(1, 4)),
            Size::new(self.size / 5, self.size / 5),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(target)?;
        self.wheels(target, p)
    }

    fn render_tram<D>(&self, target: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        // Pantograph
        Line::new(
            p + Point::new(self.s(1, 2), 0),
            p + Point::new(self.s(1, 2), self.s(1, 4)),
        )
        .into_styled(stroke)
        .draw(target)?;
        // Body outline with a centre door line
        let body = Rectangle::new(
            p + Point::new(self.s(1, 8), self.s(1, 4)),
            Size::new(self.size * 3 / 4, self.size * 3 / 8),
        );
        body.into_styled(stroke).draw(target)?;
        Line::new(
            p + Point::new(self.s(1, 2), self.s(1, 4)),
            p + Point::new(self.s(1, 2), self.s(5, 8)),
        )
        .into_styled(stroke)
        .draw(target)?;
        self.wheels(target, p)
    }

    fn render_bus<D>(&self, target: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        // Solid body with two windscreen gaps
        Rectangle::new(
            p + Point::new(self.s(1, 8), self.s(3, 16)),
            Size::new(self.size * 3 / 4, self.size * 7 / 16),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)?;
        for dx in [self.s(1, 4), self.s(9, 16)] {
            Rectangle::new(
                p + Point::new(dx, self.s(5, 16)),
                Size::new(self.size / 8, self.size / 8),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(target)?;
        }
        self.wheels(target, p)
    }

    fn render_wait<D>(&self, target: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        // Clock face with hands at ten past
        Circle::new(p, self.size).into_styled(stroke).draw(target)?;
        let centre = p + Point::new(self.s(1, 2), self.s(1, 2));
        Line::new(centre, p + Point::new(self.s(1, 2), self.s(1, 4)))
            .into_styled(stroke)
            .draw(target)?;
        Line::new(centre, p + Point::new(self.s(3, 4), self.s(1, 2)))
            .into_styled(stroke)
            .draw(target)?;
        Ok(())
    }

    fn wheels<D>(&self, target: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let d = (self.size / 4).max(2);
        for dx in [self.s(1, 8), self.s(5, 8)] {
            Circle::new(p + Point::new(dx, self.s(5, 8)), d)
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target)?;
        }
        Ok(())
    }
}

/// Umbrella marker shown in the header when rain is expected.
pub fn draw_umbrella<D>(target: &mut D, position: Point, size: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = size.max(8);
    let s = |num: u32, den: u32| i32::try_from(size * num / den).unwrap_or(0);
    // Canopy
    Triangle::new(
        position + Point::new(s(1, 2), 0),
        position + Point::new(0, s(1, 2)),
        position + Point::new(s(1, 1), s(1, 2)),
    )
    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
    .draw(target)?;
    // Shaft with a hooked tip
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    Line::new(
        position + Point::new(s(1, 2), s(1, 2)),
        position + Point::new(s(1, 2), s(1, 1)),
    )
    .into_styled(stroke)
    .draw(target)?;
    Line::new(
        position + Point::new(s(1, 2), s(1, 1)),
        position + Point::new(s(3, 8), s(1, 1)),
    )
    .into_styled(stroke)
    .draw(target)?;
    Ok(())
}

/// Right-pointing detour arrow drawn on diverted legs.
pub fn draw_diversion_arrow<D>(target: &mut D, position: Point, size: u32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let size = size.max(8);
    let s = |num: u32, den: u32| i32::try_from(size * num / den).unwrap_or(0);
    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    // Shaft kinks upward before the head
    Line::new(
        position + Point::new(0, s(3, 4)),
        position + Point::new(s(1, 2), s(3, 4)),
    )
    .into_styled(stroke)
    .draw(target)?;
    Line::new(
        position + Point::new(s(1, 2), s(3, 4)),
        position + Point::new(s(1, 2), s(1, 4)),
    )
    .into_styled(stroke)
    .draw(target)?;
    Triangle::new(
        position + Point::new(s(1, 2), s(1, 4)),
        position + Point::new(s(3, 8), s(1, 2)),
        position + Point::new(s(5, 8), s(1, 2)),
    )
    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
    .draw(target)?;
    Ok(())
}
