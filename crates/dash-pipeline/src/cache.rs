//! The zone cache: rendered bitmaps keyed by `(device, zone)`.
//!
//! Eviction is driven entirely by signature mismatch or explicit
//! invalidation, never by wall-clock expiry: tier timing governs *when a
//! zone is checked*, not whether a cached value is stale once checked. The
//! zone set is fixed and small, so the map is unbounded per device with no
//! LRU bookkeeping.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use dash_zones::{Signature, ZoneId};

/// One cached render: the fingerprint it was painted from, the encoded
/// bytes, and when it was produced.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Signature of the inputs the bitmap was painted from.
    pub signature: Signature,
    /// Encoded zone bytes (BMP or PNG per the device profile).
    pub bytes: Vec<u8>,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// When the zone was painted.
    pub rendered_at: Instant,
}

/// Injectable cache object keyed by `(device id, zone id)`.
///
/// Concurrent readers share the read lock; writers take the write lock per
/// update. Zones update independently; a torn cross-zone read ("one zone
/// old, one zone new") is an accepted, harmless outcome because each zone is
/// self-consistent.
#[derive(Debug, Default)]
pub struct ZoneCache {
    entries: RwLock<HashMap<(String, ZoneId), CacheEntry>>,
}

impl ZoneCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached signature for `(device, zone)` equals `signature`.
    pub fn matches(&self, device: &str, zone: ZoneId, signature: &Signature) -> bool {
        self.read()
            .get(&(device.to_string(), zone))
            .is_some_and(|entry| entry.signature == *signature)
    }

    /// Clone the cached entry for `(device, zone)`.
    pub fn get(&self, device: &str, zone: ZoneId) -> Option<CacheEntry> {
        self.read().get(&(device.to_string(), zone)).cloned()
    }

    /// Insert or replace the entry for `(device, zone)`.
    pub fn put(&self, device: &str, zone: ZoneId, entry: CacheEntry) {
        self.write().insert((device.to_string(), zone), entry);
    }

    /// Drop every entry belonging to `device`, leaving other devices'
    /// entries untouched.
    pub fn invalidate_device(&self, device: &str) {
        self.write().retain(|(dev, _), _| dev != device);
    }

    /// Number of entries cached for `device`.
    pub fn device_entry_count(&self, device: &str) -> usize {
        self.read().keys().filter(|(dev, _)| dev == device).count()
    }

    /// Total entries across all devices.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<(String, ZoneId), CacheEntry>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<(String, ZoneId), CacheEntry>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Recover a mutex guard even if a previous holder panicked; the protected
/// state is plain value data and stays coherent.
pub(crate) fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
