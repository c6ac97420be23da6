//! Device Profiles
//!
//! Geometry and depth characteristics of every panel and preview target the
//! pipeline can render for, plus the rectangle math for scaling the
//! canonical 800×480 layout onto a profile's frame.
//!
//! Profiles are static constants: the supported device set is fixed at build
//! time, and an id that is not in the catalogue is a caller error the
//! pipeline rejects before any rendering work begins; silently substituting
//! a default geometry would hand the requesting panel an image it cannot
//! display.
//!
//! # Example
//!
//! ```
//! use dash_specs::{profile, BitDepth};
//!
//! let trmnl = profile("trmnl-og").unwrap();
//! assert_eq!((trmnl.width, trmnl.height), (800, 480));
//! assert_eq!(trmnl.bit_depth, BitDepth::Mono);
//! assert!(profile("unknown-panel").is_none());
//! ```

mod catalogue;
mod profile;

pub use catalogue::{all_profiles, profile, KINDLE_PW, TRMNL_OG, WEB_PREVIEW};
pub use profile::{scale_rect, BitDepth, DeviceProfile, Orientation, Rect};
