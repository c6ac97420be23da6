//! Raster Drawer
//!
//! Turns one zone of a [`DashboardSnapshot`](dash_model::DashboardSnapshot)
//! into a freshly painted monochrome [`Surface`], sized to the zone's
//! rectangle on the requested device profile.
//!
//! Each zone kind has a dedicated paint routine, and each routine reads only
//! the snapshot fields declared for its zone in `dash-zones`; that
//! discipline is what makes the signature cache sound. Painting has no side
//! effects beyond the returned surface: the snapshot is never mutated and no
//! state is shared between calls, so zones may be painted concurrently.
//!
//! # Example
//!
//! ```
//! use dash_model::DashboardSnapshot;
//! use dash_render::paint_zone;
//! use dash_specs::TRMNL_OG;
//! use dash_zones::ZoneId;
//!
//! let snap = DashboardSnapshot {
//!     current_time: "8:42".into(),
//!     am_pm: "AM".into(),
//!     ..DashboardSnapshot::default()
//! };
//! let surface = paint_zone(ZoneId::Header, &snap, &TRMNL_OG).unwrap();
//! assert_eq!((surface.width(), surface.height()), (800, 94));
//! ```

mod footer;
mod frame;
mod glyph;
mod header;
mod legs;
mod style;
mod summary;
mod surface;
mod text;

pub use frame::paint_frame;
pub use glyph::{draw_diversion_arrow, draw_umbrella, ModeGlyph};
pub use style::{dashed_line, dashed_rect, fill_rect, hatch_fill, stroke_rect};
pub use surface::Surface;
pub use text::{
    draw_text, draw_text_bold, draw_text_centered, draw_text_right, draw_text_scaled,
    scaled_text_width, text_width, TextSize,
};

use dash_model::DashboardSnapshot;
use dash_specs::DeviceProfile;
use dash_zones::{zone_rect_for, ZoneId};

/// A zone paint routine rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaintError {
    /// A delayed leg arrived without its delay figure.
    #[error("leg slot {slot} is delayed but carries no delay figure")]
    MissingDelay {
        /// Row slot of the offending leg.
        slot: u8,
    },
    /// A content-bearing leg arrived with an empty title.
    #[error("leg slot {slot} has an empty title")]
    EmptyTitle {
        /// Row slot of the offending leg.
        slot: u8,
    },
}

/// Paint one zone of the snapshot for a device profile.
///
/// Returns a fresh surface sized to the zone's scaled rectangle. Fails only
/// for malformed leg data; the caller scopes such failures to the single
/// zone and keeps rendering siblings.
pub fn paint_zone(
    zone: ZoneId,
    snap: &DashboardSnapshot,
    profile: &DeviceProfile,
) -> Result<Surface, PaintError> {
    let rect = zone_rect_for(zone, profile);
    let mut surface = Surface::new(rect.w, rect.h);
    match zone {
        ZoneId::Header => header::draw(&mut surface, snap),
        ZoneId::Summary => summary::draw(&mut surface, snap),
        ZoneId::LegRow(slot) => legs::draw(&mut surface, snap, slot)?,
        ZoneId::Footer => footer::draw(&mut surface, snap),
    }
    Ok(surface)
}

/// Collapse an infallible drawing result.
///
/// [`Surface`]'s `DrawTarget` error is `Infallible`, but stable Rust still
/// treats `Ok(..)` as a refutable pattern, so the empty match lives here
/// once instead of at every draw call.
pub(crate) fn into_ok<T>(result: Result<T, core::convert::Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
