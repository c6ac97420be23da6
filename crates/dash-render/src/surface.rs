//! In-memory monochrome pixel surface.
//!
//! The drawing target every paint routine renders into and every encoder
//! reads from. `On` is ink (black on the panel), `Off` is paper white.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Owned monochrome framebuffer sized to one zone or one full frame.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<BinaryColor>,
}

impl Surface {
    /// Create a surface filled with paper white.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![BinaryColor::Off; size],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set one pixel. Out-of-bounds coordinates are ignored, matching how
    /// clipped primitives behave at frame edges.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            if let Some(px) = self.pixels.get_mut(idx) {
                *px = color;
            }
        }
    }

    /// Read one pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + (x as usize);
            self.pixels.get(idx).copied()
        } else {
            None
        }
    }

    /// Whether the pixel at `(x, y)` is ink. Out of bounds reads as white.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) == Some(BinaryColor::On)
    }

    /// Fill the whole surface with one color.
    pub fn fill(&mut self, color: BinaryColor) {
        self.pixels.fill(color);
    }

    /// Reset to paper white.
    pub fn clear(&mut self) {
        self.fill(BinaryColor::Off);
    }

    /// Number of ink pixels on the surface.
    pub fn ink_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| **p == BinaryColor::On)
            .count()
    }

    /// Copy `src` onto this surface with its top-left corner at `(x, y)`.
    /// Source pixels falling outside this surface are dropped.
    pub fn blit(&mut self, src: &Surface, x: u32, y: u32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                if let Some(color) = src.pixel(sx, sy) {
                    self.set_pixel(x + sx, y + sy, color);
                }
            }
        }
    }
}

impl DrawTarget for Surface {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                #[allow(clippy::cast_sign_loss)] // non-negative checked above
                self.set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Surface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
