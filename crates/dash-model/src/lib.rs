//! Dashboard Snapshot Model
//!
//! The normalized, immutable value object describing one moment's display
//! state, plus the journey-leg types it contains. A snapshot is rebuilt fresh
//! on every evaluation by the (out-of-scope) snapshot builder and handed to
//! the rendering pipeline read-only; nothing in this crate mutates a snapshot
//! after construction.
//!
//! All display strings arrive pre-formatted: the clock fields are already in
//! the user's timezone, the temperature already carries its unit or a dash.
//! This crate performs no clock or feed logic of its own.
//!
//! # Example
//!
//! ```
//! use dash_model::{DashboardSnapshot, JourneyLeg, LegKind, LegState};
//!
//! let mut snapshot = DashboardSnapshot {
//!     legs: vec![
//!         JourneyLeg::new(LegKind::Walk, "WALK TO STOP", 5),
//!         JourneyLeg::new(LegKind::Train, "CRAIGIEBURN LINE", 15),
//!     ],
//!     ..DashboardSnapshot::default()
//! };
//! snapshot.normalize_journey();
//!
//! assert_eq!(snapshot.total_minutes, 20);
//! assert_eq!(snapshot.legs[0].ordinal, Some(1));
//! ```

mod journey;
mod snapshot;

pub use journey::{assign_ordinals, journey_minutes, JourneyLeg, LegKind, LegState};
pub use snapshot::{CoffeeVerdict, DashboardSnapshot, StatusKind, WeatherSummary};
