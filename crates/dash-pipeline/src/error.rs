//! Pipeline error taxonomy.

use dash_codec::EncodeError;
use dash_render::PaintError;
use dash_zones::ZoneId;

/// A render request failed, either whole (unknown device/zone) or for a
/// single zone (paint/encode).
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested device id is not in the profile catalogue. The only
    /// error that fails a whole tiered request. It is rejected before any
    /// rendering work begins.
    #[error("unknown device profile '{id}'")]
    UnknownDevice {
        /// The id the caller sent.
        id: String,
    },
    /// A single-zone request named a zone outside the registry.
    #[error("unknown zone '{zone}'")]
    UnknownZone {
        /// The offending zone name.
        zone: String,
    },
    /// One zone's paint routine rejected the snapshot.
    #[error("painting zone {zone} failed")]
    Paint {
        /// The zone that failed.
        zone: ZoneId,
        /// The underlying paint failure.
        #[source]
        source: PaintError,
    },
    /// One zone's surface failed to encode.
    #[error("encoding zone {zone} failed")]
    Encode {
        /// The zone that failed.
        zone: ZoneId,
        /// The underlying encoder failure.
        #[source]
        source: EncodeError,
    },
    /// The assembled full frame failed to encode.
    #[error("encoding the full frame failed")]
    FrameEncode {
        /// The underlying encoder failure.
        #[source]
        source: EncodeError,
    },
}

/// Map a paint failure back to the zone it occurred in. Both paint failure
/// modes carry their leg slot, so the attribution is exact.
pub(crate) fn paint_error_zone(error: &PaintError) -> ZoneId {
    match error {
        PaintError::MissingDelay { slot } | PaintError::EmptyTitle { slot } => {
            ZoneId::LegRow(*slot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_errors_attribute_to_their_leg_row() {
        assert_eq!(
            paint_error_zone(&PaintError::MissingDelay { slot: 2 }),
            ZoneId::LegRow(2)
        );
        assert_eq!(
            paint_error_zone(&PaintError::EmptyTitle { slot: 5 }),
            ZoneId::LegRow(5)
        );
    }

    #[test]
    fn messages_name_the_subject() {
        let err = RenderError::UnknownDevice { id: "trmnl".into() };
        assert!(err.to_string().contains("trmnl"));

        let err = RenderError::Paint {
            zone: ZoneId::LegRow(1),
            source: PaintError::EmptyTitle { slot: 1 },
        };
        assert!(err.to_string().contains("leg-1"));
    }
}
