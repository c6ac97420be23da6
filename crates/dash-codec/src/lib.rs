//! Bitmap Encoders
//!
//! Two independent, pure serializers over the same painted [`Surface`]:
//!
//! - [`encode_bmp1`], the panel wire format: a Windows BMP container with a
//!   1-bit DIB, two-entry palette, and rows packed MSB-first and padded to
//!   32-bit boundaries.
//! - [`encode_png`], the preview format: a full-color PNG of the identical
//!   pixels, so the browser preview and the panel agree modulo depth.
//!
//! Neither encoder holds shared mutable state; both may run concurrently on
//! the same surface.

mod bmp;
mod preview;

pub use bmp::{bmp1_stride, encode_bmp1, encode_zone_bmp1, MAX_ZONE_BYTES};
pub use preview::encode_png;

use dash_render::Surface;

/// An encoder rejected the surface.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The encoded byte count would exceed the zone buffer the panels
    /// allocate. Callers fall back to a full-frame render instead of
    /// truncating image data.
    #[error("encoded size {needed} exceeds the {max}-byte zone buffer")]
    Overflow {
        /// Bytes the encoding would need.
        needed: usize,
        /// The enforced ceiling.
        max: usize,
    },
    /// Zero-area surfaces cannot be encoded.
    #[error("surface has zero width or height")]
    ZeroSized,
    /// The PNG writer failed.
    #[error("png encoding failed")]
    Png(#[from] image::ImageError),
}

fn check_nonzero(surface: &Surface) -> Result<(), EncodeError> {
    if surface.width() == 0 || surface.height() == 0 {
        Err(EncodeError::ZeroSized)
    } else {
        Ok(())
    }
}
