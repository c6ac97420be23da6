//! Tiered refresh scheduling.
//!
//! All tiering is computed from elapsed wall-clock time at request time;
//! no background timers. Per device the scheduler tracks when each tier was
//! last serviced, when the last full refresh ran, and how many partial zone
//! refreshes have accumulated since; enough consecutive partials force a
//! full repaint to clear e-ink ghosting even before the interval elapses.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::cache::lock_unpoisoned;

/// Refresh cadence, loadable from config files. Defaults are the intervals
/// the reference panel shipped with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    /// Tier 1 service interval (clock, summary) in milliseconds.
    pub tier1_ms: u64,
    /// Tier 2 service interval (leg rows) in milliseconds.
    pub tier2_ms: u64,
    /// Tier 3 service interval (footer) in milliseconds.
    pub tier3_ms: u64,
    /// Forced full-refresh interval in milliseconds.
    pub full_refresh_ms: u64,
    /// Partial refreshes tolerated before forcing a full refresh.
    pub max_partials_before_full: u32,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            tier1_ms: 60_000,
            tier2_ms: 120_000,
            tier3_ms: 300_000,
            full_refresh_ms: 600_000,
            max_partials_before_full: 30,
        }
    }
}

impl TierConfig {
    /// Interval for a tier number; `None` for tiers outside 1..=3.
    pub fn tier_interval(&self, tier: u8) -> Option<Duration> {
        match tier {
            1 => Some(Duration::from_millis(self.tier1_ms)),
            2 => Some(Duration::from_millis(self.tier2_ms)),
            3 => Some(Duration::from_millis(self.tier3_ms)),
            _ => None,
        }
    }

    /// Forced full-refresh interval.
    pub fn full_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.full_refresh_ms)
    }
}

#[derive(Debug, Default, Clone)]
struct DeviceState {
    last_tier: [Option<Instant>; 3],
    last_full: Option<Instant>,
    partials_since_full: u32,
}

/// Per-device tier eligibility tracker.
#[derive(Debug)]
pub struct TierScheduler {
    config: TierConfig,
    states: Mutex<HashMap<String, DeviceState>>,
}

impl TierScheduler {
    /// Create a scheduler with the given cadence.
    pub fn new(config: TierConfig) -> Self {
        Self {
            config,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// The cadence this scheduler runs on.
    pub fn config(&self) -> &TierConfig {
        &self.config
    }

    /// Whether `tier` is due for service on `device` at `now`.
    ///
    /// A tier never serviced is always due; unknown tier numbers never are.
    pub fn tier_due(&self, device: &str, tier: u8, now: Instant) -> bool {
        let Some(interval) = self.config.tier_interval(tier) else {
            return false;
        };
        let states = lock_unpoisoned(&self.states);
        let last = states
            .get(device)
            .and_then(|s| s.last_tier.get(usize::from(tier - 1)).copied().flatten());
        match last {
            None => true,
            Some(at) => now.saturating_duration_since(at) >= interval,
        }
    }

    /// Whether a full refresh must run for `device` at `now`: first contact,
    /// the full-refresh interval elapsed, or too many partials accumulated.
    pub fn full_due(&self, device: &str, now: Instant) -> bool {
        let states = lock_unpoisoned(&self.states);
        let Some(state) = states.get(device) else {
            return true;
        };
        let Some(last_full) = state.last_full else {
            return true;
        };
        now.saturating_duration_since(last_full) >= self.config.full_refresh_interval()
            || state.partials_since_full >= self.config.max_partials_before_full
    }

    /// Record that `tier` was serviced on `device` at `now`.
    pub fn mark_tier_serviced(&self, device: &str, tier: u8, now: Instant) {
        if !(1..=3).contains(&tier) {
            return;
        }
        let mut states = lock_unpoisoned(&self.states);
        let state = states.entry(device.to_string()).or_default();
        if let Some(slot) = state.last_tier.get_mut(usize::from(tier - 1)) {
            *slot = Some(now);
        }
    }

    /// Record a completed full refresh: all tiers serviced, the partial
    /// counter cleared.
    pub fn mark_full_refresh(&self, device: &str, now: Instant) {
        let mut states = lock_unpoisoned(&self.states);
        let state = states.entry(device.to_string()).or_default();
        state.last_tier = [Some(now); 3];
        state.last_full = Some(now);
        state.partials_since_full = 0;
    }

    /// Add partial zone refreshes to the device's ghosting counter.
    pub fn note_partials(&self, device: &str, count: u32) {
        if count == 0 {
            return;
        }
        let mut states = lock_unpoisoned(&self.states);
        let state = states.entry(device.to_string()).or_default();
        state.partials_since_full = state.partials_since_full.saturating_add(count);
    }

    /// Current partial count since the last full refresh (0 for unknown
    /// devices).
    pub fn partials_since_full(&self, device: &str) -> u32 {
        lock_unpoisoned(&self.states)
            .get(device)
            .map_or(0, |s| s.partials_since_full)
    }
}
