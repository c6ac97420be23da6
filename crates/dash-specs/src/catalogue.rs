//! Static catalogue of supported render targets.

use crate::profile::{BitDepth, DeviceProfile, Orientation};

/// TRMNL OG, the 7.5" 800x480 reference panel the canonical layout
/// was designed for.
pub const TRMNL_OG: DeviceProfile = DeviceProfile {
    id: "trmnl-og",
    name: "TRMNL OG 7.5\"",
    width: 800,
    height: 480,
    orientation: Orientation::Landscape,
    bit_depth: BitDepth::Mono,
};

/// Kindle-class 758×1024 panel mounted on its side, so the layout frame is
/// 1024×758.
pub const KINDLE_PW: DeviceProfile = DeviceProfile {
    id: "kindle-pw",
    name: "Kindle Paperwhite panel",
    width: 758,
    height: 1024,
    orientation: Orientation::Portrait,
    bit_depth: BitDepth::Mono,
};

/// Browser preview target: same frame as the reference panel, full color.
pub const WEB_PREVIEW: DeviceProfile = DeviceProfile {
    id: "web-preview",
    name: "Browser preview",
    width: 800,
    height: 480,
    orientation: Orientation::Landscape,
    bit_depth: BitDepth::Rgb,
};

const CATALOGUE: &[&DeviceProfile] = &[&TRMNL_OG, &KINDLE_PW, &WEB_PREVIEW];

/// Look up a profile by id. `None` means the caller asked for a device this
/// build does not know; reject the request rather than guessing a geometry.
pub fn profile(id: &str) -> Option<&'static DeviceProfile> {
    CATALOGUE.iter().copied().find(|p| p.id == id)
}

/// Every supported profile, reference panel first.
pub fn all_profiles() -> &'static [&'static DeviceProfile] {
    CATALOGUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(profile("trmnl-og"), Some(&TRMNL_OG));
        assert_eq!(profile("kindle-pw"), Some(&KINDLE_PW));
        assert_eq!(profile("web-preview"), Some(&WEB_PREVIEW));
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(profile("trmnl"), None);
        assert_eq!(profile(""), None);
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOGUE.iter().enumerate() {
            for b in &CATALOGUE[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn kindle_layout_frame_is_landscape() {
        assert_eq!(KINDLE_PW.layout_size(), (1024, 758));
    }
}
