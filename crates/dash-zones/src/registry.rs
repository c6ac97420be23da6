//! The fixed zone catalogue for the canonical 800×480 layout.

use dash_specs::{scale_rect, DeviceProfile, Rect};

/// Frame the canonical zone rectangles are expressed in.
pub const CANONICAL_FRAME: (u32, u32) = (800, 480);

/// Number of journey-leg row slots in the layout.
pub const MAX_LEG_ROWS: u8 = 6;

// Canonical layout bands. Every width is a multiple of 32 so packed rows
// need no pad bits on the reference panel.
const HEADER_RECT: Rect = Rect::new(0, 0, 800, 94);
const SUMMARY_RECT: Rect = Rect::new(0, 96, 800, 28);
const LEGS_TOP: u32 = 132;
const LEG_ROW_PITCH: u32 = 51;
const LEG_ROW_HEIGHT: u32 = 50;
const FOOTER_RECT: Rect = Rect::new(0, 448, 800, 32);

/// Identifier of one independently rendered and cached dashboard region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZoneId {
    /// Clock, day/date, and weather block.
    Header,
    /// Status bar summarising the whole journey.
    Summary,
    /// One journey-leg row slot, `0..MAX_LEG_ROWS`.
    LegRow(u8),
    /// Location/destination bar.
    Footer,
}

impl core::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ZoneId::Header => f.write_str("header"),
            ZoneId::Summary => f.write_str("summary"),
            ZoneId::LegRow(i) => write!(f, "leg-{i}"),
            ZoneId::Footer => f.write_str("footer"),
        }
    }
}

/// All zones in layout order, top to bottom.
pub fn all_zone_ids() -> Vec<ZoneId> {
    let mut ids = Vec::with_capacity(3 + usize::from(MAX_LEG_ROWS));
    ids.push(ZoneId::Header);
    ids.push(ZoneId::Summary);
    for i in 0..MAX_LEG_ROWS {
        ids.push(ZoneId::LegRow(i));
    }
    ids.push(ZoneId::Footer);
    ids
}

/// Refresh tier of a zone: 1 is the most volatile (serviced most often),
/// 3 the most static.
pub fn zone_tier(id: ZoneId) -> u8 {
    match id {
        ZoneId::Header | ZoneId::Summary => 1,
        ZoneId::LegRow(_) => 2,
        ZoneId::Footer => 3,
    }
}

/// Zones belonging to a tier, in layout order.
///
/// Tier numbers are advisory: an unknown tier yields an empty set, never an
/// error, so a stale client asking for "tier 7" simply gets nothing.
pub fn zones_for_tier(tier: u8) -> Vec<ZoneId> {
    all_zone_ids()
        .into_iter()
        .filter(|id| zone_tier(*id) == tier)
        .collect()
}

/// Canonical rectangle of a zone in the 800×480 frame.
///
/// Leg-row indices past [`MAX_LEG_ROWS`] fold onto the last slot; callers
/// that construct ids through the registry never produce them.
pub fn zone_rect(id: ZoneId) -> Rect {
    match id {
        ZoneId::Header => HEADER_RECT,
        ZoneId::Summary => SUMMARY_RECT,
        ZoneId::LegRow(i) => {
            let slot = u32::from(i.min(MAX_LEG_ROWS - 1));
            Rect::new(0, LEGS_TOP + slot * LEG_ROW_PITCH, 800, LEG_ROW_HEIGHT)
        }
        ZoneId::Footer => FOOTER_RECT,
    }
}

/// Zone rectangle scaled onto a device profile's layout frame.
pub fn zone_rect_for(id: ZoneId, profile: &DeviceProfile) -> Rect {
    scale_rect(zone_rect(id), CANONICAL_FRAME, profile.layout_size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_specs::{KINDLE_PW, TRMNL_OG};

    #[test]
    fn zone_count_is_fixed() {
        assert_eq!(all_zone_ids().len(), 9);
    }

    #[test]
    fn tiers_partition_the_zone_set() {
        let mut seen = Vec::new();
        for tier in 1..=3 {
            seen.extend(zones_for_tier(tier));
        }
        seen.sort();
        let mut all = all_zone_ids();
        all.sort();
        assert_eq!(seen, all);
    }

    #[test]
    fn unknown_tier_yields_empty_set() {
        assert!(zones_for_tier(0).is_empty());
        assert!(zones_for_tier(4).is_empty());
        assert!(zones_for_tier(u8::MAX).is_empty());
    }

    #[test]
    fn tier_assignments() {
        assert_eq!(zone_tier(ZoneId::Header), 1);
        assert_eq!(zone_tier(ZoneId::Summary), 1);
        assert_eq!(zone_tier(ZoneId::LegRow(0)), 2);
        assert_eq!(zone_tier(ZoneId::Footer), 3);
    }

    #[test]
    fn zones_do_not_overlap() {
        let ids = all_zone_ids();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                let (ra, rb) = (zone_rect(*a), zone_rect(*b));
                let disjoint = ra.y + ra.h <= rb.y || rb.y + rb.h <= ra.y;
                assert!(disjoint, "{a} and {b} overlap");
            }
        }
    }

    #[test]
    fn zones_fit_canonical_frame() {
        for id in all_zone_ids() {
            let r = zone_rect(id);
            assert!(r.x + r.w <= CANONICAL_FRAME.0, "{id} exceeds frame width");
            assert!(r.y + r.h <= CANONICAL_FRAME.1, "{id} exceeds frame height");
        }
    }

    #[test]
    fn canonical_widths_are_multiples_of_32() {
        // Packed 1-bit rows pad to 32-bit boundaries; widths chosen as
        // multiples of 32 leave no pad bits at all on the reference panel.
        for id in all_zone_ids() {
            assert_eq!(zone_rect(id).w % 32, 0, "{id} width not 32-aligned");
        }
    }

    #[test]
    fn leg_rows_are_evenly_pitched() {
        let r0 = zone_rect(ZoneId::LegRow(0));
        let r1 = zone_rect(ZoneId::LegRow(1));
        assert_eq!(r1.y - r0.y, LEG_ROW_PITCH);
        let last = zone_rect(ZoneId::LegRow(MAX_LEG_ROWS - 1));
        assert!(last.y + last.h <= FOOTER_RECT.y);
    }

    #[test]
    fn reference_profile_rects_are_canonical() {
        for id in all_zone_ids() {
            assert_eq!(zone_rect_for(id, &TRMNL_OG), zone_rect(id));
        }
    }

    #[test]
    fn kindle_rects_scale_to_its_frame() {
        let (w, h) = KINDLE_PW.layout_size();
        for id in all_zone_ids() {
            let r = zone_rect_for(id, &KINDLE_PW);
            assert!(r.x + r.w <= w);
            assert!(r.y + r.h <= h);
            assert!(r.w > 0 && r.h > 0);
        }
    }

    #[test]
    fn display_names_match_wire_ids() {
        assert_eq!(ZoneId::Header.to_string(), "header");
        assert_eq!(ZoneId::LegRow(3).to_string(), "leg-3");
        assert_eq!(ZoneId::Footer.to_string(), "footer");
    }
}
