//! Zone Registry & Signature Engine
//!
//! The fixed catalogue of dashboard zones (rectangle, refresh tier, and the
//! declared list of snapshot fields each zone reads) plus the deterministic
//! signature derived from those fields.
//!
//! The per-zone field list is the central contract of the pipeline: a zone's
//! signature covers exactly the fields its paint routine reads, so a cached
//! bitmap can be reused precisely when none of them changed. The list lives
//! here as data ([`zone_fields`]) rather than as logic duplicated inside each
//! paint function, so the two sides cannot drift apart silently.
//!
//! # Example
//!
//! ```
//! use dash_model::DashboardSnapshot;
//! use dash_zones::{signature, zones_for_tier, ZoneId};
//!
//! let snap = DashboardSnapshot::default();
//! assert_eq!(zones_for_tier(1), vec![ZoneId::Header, ZoneId::Summary]);
//!
//! // Equal inputs always fingerprint identically.
//! assert_eq!(signature(ZoneId::Header, &snap), signature(ZoneId::Header, &snap));
//! ```

mod fields;
mod registry;
mod signature;

pub use fields::{zone_fields, SnapshotField};
pub use registry::{
    all_zone_ids, zone_rect, zone_rect_for, zone_tier, zones_for_tier, ZoneId, CANONICAL_FRAME,
    MAX_LEG_ROWS,
};
pub use signature::{signature, Signature};
