//! Tiered Zone-Rendering Pipeline
//!
//! The integration surface HTTP handlers call. A [`Pipeline`] owns the zone
//! cache and the tier scheduler; each render call takes an immutable
//! [`DashboardSnapshot`], a device id, and returns encoded zone bitmaps for
//! everything that visually changed, plus [`ZoneUpdate::Unchanged`] markers
//! for zones whose fingerprints still match, so the panel skips their slow,
//! ghosting-prone refreshes.
//!
//! Invocations are independent and may run concurrently for different
//! devices; the cache and scheduler are the only shared state and are
//! internally locked. There is no blocking I/O anywhere in a render call;
//! snapshot construction is strictly the caller's business.
//!
//! # Example
//!
//! ```
//! use dash_model::DashboardSnapshot;
//! use dash_pipeline::{Pipeline, ZoneUpdate};
//!
//! let pipeline = Pipeline::new();
//! let snapshot = DashboardSnapshot::default();
//!
//! // First contact renders everything.
//! let first = pipeline.render_all(&snapshot, "trmnl-og", false).unwrap();
//! assert!(first.zones.values().all(|z| matches!(z, ZoneUpdate::Rendered(_))));
//!
//! // An unchanged snapshot reuses every cached zone.
//! let second = pipeline.render_all(&snapshot, "trmnl-og", false).unwrap();
//! assert!(second.zones.values().all(|z| matches!(z, ZoneUpdate::Unchanged)));
//! ```

mod cache;
mod error;
mod scheduler;

pub use cache::{CacheEntry, ZoneCache};
pub use error::RenderError;
pub use scheduler::{TierConfig, TierScheduler};

use std::collections::BTreeMap;
use std::time::Instant;

use dash_codec::{encode_bmp1, encode_png, encode_zone_bmp1};
use dash_model::DashboardSnapshot;
use dash_render::{paint_frame, paint_zone};
use dash_specs::{profile, BitDepth, DeviceProfile};
use dash_zones::{all_zone_ids, signature, zones_for_tier, Signature, ZoneId, MAX_LEG_ROWS};
use tracing::{debug, info, warn};

use crate::error::paint_error_zone;

/// Wire format of an encoded zone or frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedFormat {
    /// Packed 1-bit Windows BMP (panel targets).
    Bmp1,
    /// RGB PNG (preview targets).
    Png,
}

impl EncodedFormat {
    /// MIME type for HTTP layers to pass through.
    pub fn content_type(self) -> &'static str {
        match self {
            EncodedFormat::Bmp1 => "image/bmp",
            EncodedFormat::Png => "image/png",
        }
    }
}

/// One freshly rendered, encoded zone.
#[derive(Debug, Clone)]
pub struct EncodedZone {
    /// Which zone this is.
    pub zone: ZoneId,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// Pixel width of the zone surface.
    pub width: u32,
    /// Pixel height of the zone surface.
    pub height: u32,
    /// Fingerprint of the inputs the bitmap was painted from.
    pub signature: Signature,
    /// Container format of `bytes`.
    pub format: EncodedFormat,
}

/// The full dashboard rendered as one image.
#[derive(Debug, Clone)]
pub struct EncodedFrame {
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Container format of `bytes`.
    pub format: EncodedFormat,
}

/// Per-zone outcome of a tiered render.
#[derive(Debug, Clone)]
pub enum ZoneUpdate {
    /// The zone changed (or was forced) and was repainted.
    Rendered(EncodedZone),
    /// The zone's signature still matches the cache; reuse the previous
    /// bitmap.
    Unchanged,
}

/// A zone that failed to paint or encode. Siblings still render.
#[derive(Debug)]
pub struct ZoneFailure {
    /// The failing zone.
    pub zone: ZoneId,
    /// What went wrong.
    pub error: RenderError,
}

/// Result of a tiered render call.
#[derive(Debug, Default)]
pub struct TierResponse {
    /// Outcome per evaluated zone. Zones outside the requested tier (or not
    /// yet due) are absent.
    pub zones: BTreeMap<ZoneId, ZoneUpdate>,
    /// Zones that failed, reported beside the successes.
    pub failed: Vec<ZoneFailure>,
}

impl TierResponse {
    /// Ids of zones that were actually repainted.
    pub fn rendered_ids(&self) -> Vec<ZoneId> {
        self.zones
            .iter()
            .filter_map(|(id, z)| matches!(z, ZoneUpdate::Rendered(_)).then_some(*id))
            .collect()
    }

    /// Whether every evaluated zone came back unchanged.
    pub fn is_all_unchanged(&self) -> bool {
        !self.zones.is_empty()
            && self.failed.is_empty()
            && self
                .zones
                .values()
                .all(|z| matches!(z, ZoneUpdate::Unchanged))
    }
}

/// The rendering pipeline: profile lookup, tier scheduling, change
/// detection, painting, and encoding behind one synchronous API.
#[derive(Debug)]
pub struct Pipeline {
    cache: ZoneCache,
    scheduler: TierScheduler,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Pipeline with the reference refresh cadence.
    pub fn new() -> Self {
        Self::with_config(TierConfig::default())
    }

    /// Pipeline with a custom refresh cadence.
    pub fn with_config(config: TierConfig) -> Self {
        Self {
            cache: ZoneCache::new(),
            scheduler: TierScheduler::new(config),
        }
    }

    /// The cache, exposed for inspection and tests.
    pub fn cache(&self) -> &ZoneCache {
        &self.cache
    }

    /// The scheduler, exposed for inspection and tests.
    pub fn scheduler(&self) -> &TierScheduler {
        &self.scheduler
    }

    /// Render every zone for `device_id`, reusing cached bitmaps where
    /// signatures match. `force` (or an elapsed full-refresh interval, or a
    /// ghosting-counter overflow) bypasses the cache entirely.
    pub fn render_all(
        &self,
        snapshot: &DashboardSnapshot,
        device_id: &str,
        force: bool,
    ) -> Result<TierResponse, RenderError> {
        self.render_all_at(snapshot, device_id, force, Instant::now())
    }

    /// [`Pipeline::render_all`] with an explicit clock, for deterministic
    /// tests.
    pub fn render_all_at(
        &self,
        snapshot: &DashboardSnapshot,
        device_id: &str,
        force: bool,
        now: Instant,
    ) -> Result<TierResponse, RenderError> {
        let profile = self.lookup(device_id)?;

        if force || self.scheduler.full_due(profile.id, now) {
            return Ok(self.full_refresh(snapshot, profile, now));
        }

        let response = self.evaluate_zones(snapshot, profile, &all_zone_ids(), false);
        for tier in 1..=3 {
            self.scheduler.mark_tier_serviced(profile.id, tier, now);
        }
        self.note_partials(profile, &response);
        Ok(response)
    }

    /// Render the zones of one tier if that tier is due (or `force` is set,
    /// which escalates to a full refresh of every zone). A tier not yet due
    /// (or an unknown tier number) yields an empty response.
    pub fn render_tier(
        &self,
        snapshot: &DashboardSnapshot,
        device_id: &str,
        tier: u8,
        force: bool,
    ) -> Result<TierResponse, RenderError> {
        self.render_tier_at(snapshot, device_id, tier, force, Instant::now())
    }

    /// [`Pipeline::render_tier`] with an explicit clock.
    pub fn render_tier_at(
        &self,
        snapshot: &DashboardSnapshot,
        device_id: &str,
        tier: u8,
        force: bool,
        now: Instant,
    ) -> Result<TierResponse, RenderError> {
        let profile = self.lookup(device_id)?;

        // Force and ghosting-age both override tier scoping: every zone is
        // repainted so the panel can flash fully clean.
        if force || self.scheduler.full_due(profile.id, now) {
            return Ok(self.full_refresh(snapshot, profile, now));
        }

        let zones = zones_for_tier(tier);
        if zones.is_empty() || !self.scheduler.tier_due(profile.id, tier, now) {
            debug!(device = profile.id, tier, "tier not due, nothing to render");
            return Ok(TierResponse::default());
        }

        let response = self.evaluate_zones(snapshot, profile, &zones, false);
        self.scheduler.mark_tier_serviced(profile.id, tier, now);
        self.note_partials(profile, &response);
        Ok(response)
    }

    /// Render one zone unconditionally (no cache consultation) and refresh
    /// its cache entry. Used by on-demand full-frame assembly.
    pub fn render_zone(
        &self,
        snapshot: &DashboardSnapshot,
        device_id: &str,
        zone: ZoneId,
    ) -> Result<EncodedZone, RenderError> {
        let profile = self.lookup(device_id)?;
        if let ZoneId::LegRow(slot) = zone {
            if slot >= MAX_LEG_ROWS {
                return Err(RenderError::UnknownZone {
                    zone: zone.to_string(),
                });
            }
        }

        let sig = signature(zone, snapshot);
        let encoded = self.paint_and_encode(zone, snapshot, profile, sig)?;
        self.cache.put(profile.id, zone, entry_from(&encoded));
        Ok(encoded)
    }

    /// Render the whole dashboard as a single image. The fallback path when
    /// a client wants one picture or a zone overflowed its buffer.
    pub fn render_frame(
        &self,
        snapshot: &DashboardSnapshot,
        device_id: &str,
    ) -> Result<EncodedFrame, RenderError> {
        let profile = self.lookup(device_id)?;
        let surface = paint_frame(snapshot, profile).map_err(|source| RenderError::Paint {
            zone: paint_error_zone(&source),
            source,
        })?;

        let (bytes, format) = match profile.bit_depth {
            BitDepth::Mono => (
                encode_bmp1(&surface).map_err(|source| RenderError::FrameEncode { source })?,
                EncodedFormat::Bmp1,
            ),
            BitDepth::Rgb => (
                encode_png(&surface).map_err(|source| RenderError::FrameEncode { source })?,
                EncodedFormat::Png,
            ),
        };
        Ok(EncodedFrame {
            bytes,
            width: surface.width(),
            height: surface.height(),
            format,
        })
    }

    fn lookup(&self, device_id: &str) -> Result<&'static DeviceProfile, RenderError> {
        profile(device_id).ok_or_else(|| RenderError::UnknownDevice {
            id: device_id.to_string(),
        })
    }

    /// Repaint every zone, replace the device's cache wholesale, and reset
    /// its tier clocks: the ghosting defence.
    fn full_refresh(
        &self,
        snapshot: &DashboardSnapshot,
        profile: &'static DeviceProfile,
        now: Instant,
    ) -> TierResponse {
        info!(device = profile.id, "full refresh: cache bypassed and invalidated");
        self.cache.invalidate_device(profile.id);
        let response = self.evaluate_zones(snapshot, profile, &all_zone_ids(), true);
        self.scheduler.mark_full_refresh(profile.id, now);
        response
    }

    /// Evaluate a zone list through the signature cache. With
    /// `bypass_cache`, every zone repaints regardless of its fingerprint.
    fn evaluate_zones(
        &self,
        snapshot: &DashboardSnapshot,
        profile: &'static DeviceProfile,
        zones: &[ZoneId],
        bypass_cache: bool,
    ) -> TierResponse {
        let mut response = TierResponse::default();

        for &zone in zones {
            let sig = signature(zone, snapshot);
            if !bypass_cache && self.cache.matches(profile.id, zone, &sig) {
                debug!(device = profile.id, zone = %zone, "signature unchanged");
                response.zones.insert(zone, ZoneUpdate::Unchanged);
                continue;
            }

            match self.paint_and_encode(zone, snapshot, profile, sig) {
                Ok(encoded) => {
                    self.cache.put(profile.id, zone, entry_from(&encoded));
                    response.zones.insert(zone, ZoneUpdate::Rendered(encoded));
                }
                Err(error) => {
                    warn!(device = profile.id, zone = %zone, %error, "zone failed");
                    response.failed.push(ZoneFailure { zone, error });
                }
            }
        }
        response
    }

    fn paint_and_encode(
        &self,
        zone: ZoneId,
        snapshot: &DashboardSnapshot,
        profile: &'static DeviceProfile,
        sig: Signature,
    ) -> Result<EncodedZone, RenderError> {
        let surface = paint_zone(zone, snapshot, profile)
            .map_err(|source| RenderError::Paint { zone, source })?;

        let (bytes, format) = match profile.bit_depth {
            BitDepth::Mono => (
                encode_zone_bmp1(&surface)
                    .map_err(|source| RenderError::Encode { zone, source })?,
                EncodedFormat::Bmp1,
            ),
            BitDepth::Rgb => (
                encode_png(&surface).map_err(|source| RenderError::Encode { zone, source })?,
                EncodedFormat::Png,
            ),
        };

        Ok(EncodedZone {
            zone,
            bytes,
            width: surface.width(),
            height: surface.height(),
            signature: sig,
            format,
        })
    }

    /// Every repainted zone is one partial refresh on the panel; feed the
    /// ghosting counter.
    fn note_partials(&self, profile: &'static DeviceProfile, response: &TierResponse) {
        let rendered = u32::try_from(response.rendered_ids().len()).unwrap_or(u32::MAX);
        self.scheduler.note_partials(profile.id, rendered);
    }
}

fn entry_from(encoded: &EncodedZone) -> CacheEntry {
    CacheEntry {
        signature: encoded.signature.clone(),
        bytes: encoded.bytes.clone(),
        width: encoded.width,
        height: encoded.height,
        rendered_at: Instant::now(),
    }
}
