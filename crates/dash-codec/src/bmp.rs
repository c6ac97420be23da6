//! Packed 1-bit Windows BMP encoding.
//!
//! Container layout: 14-byte file header, 40-byte BITMAPINFOHEADER declaring
//! 1 bpp and no compression, a two-entry palette, then bottom-up rows packed
//! 8 pixels per byte MSB-first and zero-padded to 4-byte boundaries.
//!
//! Palette entry 0 is white and entry 1 is black, so a set bit is ink. The
//! part that matters on real panels: the zero pad bits at the end of a
//! non-32-aligned row decode as background white. Controllers that blit pad
//! bits instead of ignoring them show paper, not a black stripe.

use dash_render::Surface;

use crate::{check_nonzero, EncodeError};

/// Byte budget for a single zone bitmap, matching the buffer the panel
/// firmware allocates per zone.
pub const MAX_ZONE_BYTES: usize = 20_000;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: usize = 40;
const PALETTE_LEN: usize = 8;
const PIXEL_OFFSET: usize = FILE_HEADER_LEN + INFO_HEADER_LEN + PALETTE_LEN;

/// Bytes per packed row: 1-bit rows pad to the next 32-bit boundary.
pub fn bmp1_stride(width: u32) -> usize {
    (width as usize).div_ceil(32) * 4
}

fn encoded_len(surface: &Surface) -> usize {
    PIXEL_OFFSET + bmp1_stride(surface.width()) * (surface.height() as usize)
}

/// Encode a surface as a 1-bit BMP with no size ceiling (full frames).
pub fn encode_bmp1(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    check_nonzero(surface)?;

    let width = surface.width();
    let height = surface.height();
    let stride = bmp1_stride(width);
    let pixel_bytes = stride * (height as usize);
    let file_len = encoded_len(surface);

    let mut out = Vec::with_capacity(file_len);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&u32::try_from(file_len).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // reserved
    out.extend_from_slice(&u32::try_from(PIXEL_OFFSET).unwrap_or(u32::MAX).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&u32::try_from(INFO_HEADER_LEN).unwrap_or(40).to_le_bytes());
    out.extend_from_slice(&i32::try_from(width).unwrap_or(i32::MAX).to_le_bytes());
    // Positive height: rows are stored bottom-up.
    out.extend_from_slice(&i32::try_from(height).unwrap_or(i32::MAX).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&1u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB, no compression
    out.extend_from_slice(&u32::try_from(pixel_bytes).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // 72 dpi horizontal
    out.extend_from_slice(&2835u32.to_le_bytes()); // 72 dpi vertical
    out.extend_from_slice(&2u32.to_le_bytes()); // colors used
    out.extend_from_slice(&2u32.to_le_bytes()); // colors important

    // Palette: index 0 white, index 1 black (BGRA, reserved 0).
    out.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0x00]);
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    // Rows, bottom-up. Bytes start zeroed, so pad bits are always zero,
    // never whatever the scratch buffer last held.
    for y in (0..height).rev() {
        let mut row = vec![0u8; stride];
        for x in 0..width {
            if surface.is_ink(x, y) {
                let byte = (x / 8) as usize;
                let bit = 7 - (x % 8);
                if let Some(b) = row.get_mut(byte) {
                    *b |= 1 << bit;
                }
            }
        }
        out.extend_from_slice(&row);
    }

    Ok(out)
}

/// Encode a zone surface, enforcing the per-zone byte ceiling.
///
/// The size check runs before any packing so an oversized zone costs
/// nothing; the caller falls back to [`encode_bmp1`] on a full frame.
pub fn encode_zone_bmp1(surface: &Surface) -> Result<Vec<u8>, EncodeError> {
    check_nonzero(surface)?;
    let needed = encoded_len(surface);
    if needed > MAX_ZONE_BYTES {
        return Err(EncodeError::Overflow {
            needed,
            max: MAX_ZONE_BYTES,
        });
    }
    encode_bmp1(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::BinaryColor;

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    fn read_u16(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([bytes[at], bytes[at + 1]])
    }

    #[test]
    fn stride_pads_to_32_bit_boundaries() {
        assert_eq!(bmp1_stride(800), 100);
        assert_eq!(bmp1_stride(32), 4);
        assert_eq!(bmp1_stride(33), 8);
        assert_eq!(bmp1_stride(1), 4);
        assert_eq!(bmp1_stride(31), 4);
        // The row-padding rule in one line: ceil(width / 32) * 4.
        for width in 1..=256u32 {
            assert_eq!(bmp1_stride(width), ((width as usize) + 31) / 32 * 4);
        }
    }

    #[test]
    fn header_fields_are_correct() {
        let s = Surface::new(800, 94);
        let bmp = encode_bmp1(&s).unwrap();

        assert_eq!(&bmp[0..2], b"BM");
        assert_eq!(read_u32(&bmp, 2) as usize, bmp.len());
        assert_eq!(read_u32(&bmp, 10) as usize, PIXEL_OFFSET);
        assert_eq!(read_u32(&bmp, 14), 40); // info header size
        assert_eq!(read_u32(&bmp, 18), 800); // width
        assert_eq!(read_u32(&bmp, 22), 94); // height, positive = bottom-up
        assert_eq!(read_u16(&bmp, 26), 1); // planes
        assert_eq!(read_u16(&bmp, 28), 1); // bpp
        assert_eq!(read_u32(&bmp, 30), 0); // BI_RGB
        assert_eq!(read_u32(&bmp, 34) as usize, 100 * 94);
        assert_eq!(read_u32(&bmp, 46), 2); // colors used
    }

    #[test]
    fn palette_is_white_then_black() {
        let s = Surface::new(32, 1);
        let bmp = encode_bmp1(&s).unwrap();
        assert_eq!(&bmp[54..58], &[0xFF, 0xFF, 0xFF, 0x00]);
        assert_eq!(&bmp[58..62], &[0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn white_surface_packs_to_zero_bits() {
        let s = Surface::new(64, 4);
        let bmp = encode_bmp1(&s).unwrap();
        assert!(bmp[PIXEL_OFFSET..].iter().all(|b| *b == 0));
    }

    #[test]
    fn ink_sets_msb_first_bits() {
        let mut s = Surface::new(32, 1);
        s.set_pixel(0, 0, BinaryColor::On);
        s.set_pixel(9, 0, BinaryColor::On);
        let bmp = encode_bmp1(&s).unwrap();

        let row = &bmp[PIXEL_OFFSET..];
        assert_eq!(row[0], 0b1000_0000); // x=0 is the MSB of byte 0
        assert_eq!(row[1], 0b0100_0000); // x=9 is bit 6 of byte 1
        assert_eq!(row[2], 0);
        assert_eq!(row[3], 0);
    }

    #[test]
    fn rows_are_stored_bottom_up() {
        let mut s = Surface::new(32, 2);
        // Ink only on the top row of the surface.
        s.set_pixel(0, 0, BinaryColor::On);
        let bmp = encode_bmp1(&s).unwrap();

        let first_stored_row = &bmp[PIXEL_OFFSET..PIXEL_OFFSET + 4];
        let second_stored_row = &bmp[PIXEL_OFFSET + 4..PIXEL_OFFSET + 8];
        // Bottom-up: the surface's bottom (white) row is stored first.
        assert!(first_stored_row.iter().all(|b| *b == 0));
        assert_eq!(second_stored_row[0], 0b1000_0000);
    }

    #[test]
    fn pad_bits_stay_zero_even_when_row_edge_is_ink() {
        // 33 px wide: 31 pad bits per row. Fill the surface completely.
        let mut s = Surface::new(33, 3);
        s.fill(BinaryColor::On);
        let bmp = encode_bmp1(&s).unwrap();

        let stride = bmp1_stride(33);
        assert_eq!(stride, 8);
        for row in bmp[PIXEL_OFFSET..].chunks(stride) {
            assert_eq!(row[0], 0xFF);
            // x=32 occupies only the MSB of byte 4; the other 7 bits pad.
            assert_eq!(row[4], 0b1000_0000);
            assert_eq!(&row[5..], &[0, 0, 0], "pad bytes must stay zero");
        }
    }

    #[test]
    fn multiple_of_32_width_has_no_pad_bits() {
        let mut s = Surface::new(64, 2);
        s.fill(BinaryColor::On);
        let bmp = encode_bmp1(&s).unwrap();
        // Every stored bit is a real pixel; all bytes are fully set.
        assert!(bmp[PIXEL_OFFSET..].iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn zone_ceiling_is_enforced_before_packing() {
        // A full 800×480 frame is far over the 20 kB zone budget.
        let frame = Surface::new(800, 480);
        let err = encode_zone_bmp1(&frame).unwrap_err();
        match err {
            EncodeError::Overflow { needed, max } => {
                assert_eq!(max, MAX_ZONE_BYTES);
                assert_eq!(needed, PIXEL_OFFSET + 100 * 480);
            }
            other => panic!("expected Overflow, got {other}"),
        }

        // The same frame still encodes through the unbounded path.
        assert!(encode_bmp1(&frame).is_ok());
    }

    #[test]
    fn every_zone_band_fits_the_ceiling() {
        // Canonical zone heights: header 94, summary 28, leg row 50,
        // footer 32 at 800 wide. All must fit the panel's zone buffer.
        for height in [94, 28, 50, 32] {
            let s = Surface::new(800, height);
            assert!(encode_zone_bmp1(&s).is_ok(), "800x{height} overflowed");
        }
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let s = Surface::new(0, 10);
        assert!(matches!(encode_bmp1(&s), Err(EncodeError::ZeroSized)));
    }

    #[test]
    fn encoding_is_pure() {
        let mut s = Surface::new(40, 10);
        s.set_pixel(3, 3, BinaryColor::On);
        let a = encode_bmp1(&s).unwrap();
        let b = encode_bmp1(&s).unwrap();
        assert_eq!(a, b);
    }
}
