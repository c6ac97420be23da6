//! Dashboard Rendering Test Utilities
//!
//! Headless assertion helpers over painted [`Surface`]s, in the style of a
//! browser-testing API: point probes, region assertions, ink accounting, and
//! packed-row checks for encoder tests.
//!
//! # Quick start
//!
//! ```
//! use dash_render::Surface;
//! use dash_testing::SurfaceProbe;
//! use embedded_graphics::pixelcolor::BinaryColor;
//!
//! let mut surface = Surface::new(40, 20);
//! surface.set_pixel(5, 5, BinaryColor::On);
//!
//! let probe = SurfaceProbe::new(&surface);
//! probe.assert_ink(5, 5).unwrap();
//! probe.assert_paper(0, 0).unwrap();
//! assert_eq!(probe.ink_in_region(0, 0, 10, 10), 1);
//! ```

use dash_codec::bmp1_stride;
use dash_render::Surface;

/// Read-only assertion probe over a painted surface.
///
/// All assertions return `Err` with a descriptive message rather than
/// panicking, so property tests can fold them into their own reporting.
pub struct SurfaceProbe<'a> {
    surface: &'a Surface,
}

impl<'a> SurfaceProbe<'a> {
    /// Wrap a surface for probing.
    pub fn new(surface: &'a Surface) -> Self {
        Self { surface }
    }

    /// Assert the pixel at `(x, y)` is ink.
    pub fn assert_ink(&self, x: u32, y: u32) -> Result<(), String> {
        match self.surface.pixel(x, y) {
            None => Err(format!("pixel ({x}, {y}) is out of bounds")),
            Some(p) if p == embedded_graphics::pixelcolor::BinaryColor::On => Ok(()),
            Some(_) => Err(format!("expected ink at ({x}, {y}), found paper")),
        }
    }

    /// Assert the pixel at `(x, y)` is paper white.
    pub fn assert_paper(&self, x: u32, y: u32) -> Result<(), String> {
        match self.surface.pixel(x, y) {
            None => Err(format!("pixel ({x}, {y}) is out of bounds")),
            Some(p) if p == embedded_graphics::pixelcolor::BinaryColor::Off => Ok(()),
            Some(_) => Err(format!("expected paper at ({x}, {y}), found ink")),
        }
    }

    /// Count ink pixels inside the `w`×`h` region at `(x, y)`.
    pub fn ink_in_region(&self, x: u32, y: u32, w: u32, h: u32) -> usize {
        let mut count = 0;
        for dy in 0..h {
            for dx in 0..w {
                if self.surface.is_ink(x + dx, y + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Assert a region contains at least one ink pixel.
    pub fn assert_region_has_ink(&self, x: u32, y: u32, w: u32, h: u32) -> Result<(), String> {
        if self.ink_in_region(x, y, w, h) > 0 {
            Ok(())
        } else {
            Err(format!("no ink in region {w}x{h} at ({x}, {y})"))
        }
    }

    /// Assert a region is entirely paper white.
    pub fn assert_region_blank(&self, x: u32, y: u32, w: u32, h: u32) -> Result<(), String> {
        let ink = self.ink_in_region(x, y, w, h);
        if ink == 0 {
            Ok(())
        } else {
            Err(format!(
                "expected blank region {w}x{h} at ({x}, {y}), found {ink} ink pixels"
            ))
        }
    }

    /// Fraction of the whole surface that is ink, `0.0..=1.0`.
    pub fn ink_ratio(&self) -> f64 {
        let total = (self.surface.width() as usize) * (self.surface.height() as usize);
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)] // surfaces are far below 2^52 pixels
        {
            self.surface.ink_count() as f64 / total as f64
        }
    }
}

/// Assert two surfaces are pixel-identical.
pub fn assert_surfaces_equal(a: &Surface, b: &Surface) -> Result<(), String> {
    if (a.width(), a.height()) != (b.width(), b.height()) {
        return Err(format!(
            "dimension mismatch: {}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        ));
    }
    let mut differing = 0usize;
    for y in 0..a.height() {
        for x in 0..a.width() {
            if a.pixel(x, y) != b.pixel(x, y) {
                differing += 1;
            }
        }
    }
    if differing == 0 {
        Ok(())
    } else {
        Err(format!("{differing} pixels differ"))
    }
}

/// Count pixels differing between two same-sized surfaces.
pub fn diff_count(a: &Surface, b: &Surface) -> usize {
    let mut differing = 0usize;
    for y in 0..a.height().min(b.height()) {
        for x in 0..a.width().min(b.width()) {
            if a.pixel(x, y) != b.pixel(x, y) {
                differing += 1;
            }
        }
    }
    differing
}

/// Check the packed-row invariant on an encoded 1-bit BMP: the pixel data
/// length equals `ceil(width/32) * 4 * height`, and for rows whose tail is
/// padding, every pad bit is zero.
pub fn assert_bmp1_row_padding(bmp: &[u8], width: u32, height: u32) -> Result<(), String> {
    let offset = bmp
        .get(10..14)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as usize)
        .ok_or_else(|| "bmp too short for a file header".to_string())?;
    let stride = bmp1_stride(width);
    let expected = stride * (height as usize);

    let pixels = bmp
        .get(offset..)
        .ok_or_else(|| "pixel offset beyond buffer".to_string())?;
    if pixels.len() != expected {
        return Err(format!(
            "pixel data is {} bytes, expected stride {stride} x {height} = {expected}",
            pixels.len()
        ));
    }

    let used_bits = width as usize;
    let total_bits = stride * 8;
    for (row_idx, row) in pixels.chunks(stride).enumerate() {
        for bit in used_bits..total_bits {
            let byte = row
                .get(bit / 8)
                .ok_or_else(|| format!("row {row_idx} shorter than stride"))?;
            if byte & (0x80 >> (bit % 8)) != 0 {
                return Err(format!("pad bit {bit} set in row {row_idx}"));
            }
        }
    }
    Ok(())
}
