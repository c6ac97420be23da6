//! Full-depth preview encoding.

use std::io::Cursor;

use dash_render::Surface;
use image::{ImageFormat, Rgb, RgbImage};

use crate::{check_nonzero, EncodeError};

const INK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const PAPER: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// Encode a surface as an RGB PNG for browser previews.
///
/// Consumes the same surface the panel encoder does, so preview and panel
/// output agree pixel-for-pixel modulo color depth.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    check_nonzero(surface)?;

    let mut img = RgbImage::new(surface.width(), surface.height());
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let color = if surface.is_ink(x, y) { INK } else { PAPER };
            img.put_pixel(x, y, color);
        }
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::BinaryColor;

    #[test]
    fn png_magic_and_dimensions() {
        let s = Surface::new(40, 20);
        let png = encode_png(&s).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 40);
        assert_eq!(decoded.height(), 20);
    }

    #[test]
    fn preview_pixels_match_the_surface() {
        let mut s = Surface::new(16, 16);
        s.set_pixel(2, 3, BinaryColor::On);
        s.set_pixel(10, 12, BinaryColor::On);

        let png = encode_png(&s).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();

        for y in 0..16 {
            for x in 0..16 {
                let expected = if s.is_ink(x, y) { INK } else { PAPER };
                assert_eq!(decoded.get_pixel(x, y), &expected, "mismatch at ({x}, {y})");
            }
        }
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let s = Surface::new(10, 0);
        assert!(matches!(encode_png(&s), Err(EncodeError::ZeroSized)));
    }

    #[test]
    fn encoding_is_pure() {
        let mut s = Surface::new(20, 20);
        s.set_pixel(5, 5, BinaryColor::On);
        assert_eq!(encode_png(&s).unwrap(), encode_png(&s).unwrap());
    }
}
