//! Device profile types and frame-scaling math.

/// Physical mounting orientation of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Orientation {
    /// Long edge horizontal; the dashboard's native orientation.
    Landscape,
    /// Long edge vertical. The layout frame is the panel turned on its side,
    /// so a portrait panel still receives a landscape dashboard.
    Portrait,
}

/// Output pixel depth of a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum BitDepth {
    /// 1-bit packed monochrome, the panel wire format.
    Mono,
    /// 24-bit RGB, the browser preview format.
    Rgb,
}

impl BitDepth {
    /// Bits per pixel as declared in container headers.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Mono => 1,
            BitDepth::Rgb => 24,
        }
    }
}

/// An axis-aligned pixel rectangle within a layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Rect {
    /// Construct a rect from components.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Complete description of one render target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DeviceProfile {
    /// Stable identifier used in render requests and cache keys.
    pub id: &'static str,
    /// Human-readable panel name.
    pub name: &'static str,
    /// Native width in pixels.
    pub width: u32,
    /// Native height in pixels.
    pub height: u32,
    /// Mounting orientation.
    pub orientation: Orientation,
    /// Output depth, which also selects the encoder.
    pub bit_depth: BitDepth,
}

impl DeviceProfile {
    /// Frame dimensions the dashboard layout is computed against.
    ///
    /// For portrait panels this is the native frame rotated a quarter turn:
    /// the layout always works in landscape and the panel driver applies
    /// the rotation.
    pub fn layout_size(&self) -> (u32, u32) {
        match self.orientation {
            Orientation::Landscape => (self.width, self.height),
            Orientation::Portrait => (self.height, self.width),
        }
    }
}

/// Scale `rect` from one frame into another, proportionally with rounding.
///
/// Used to position the canonical 800×480 zone set on frames of a different
/// size. Rounding is to-nearest so adjacent zones stay adjacent; the result
/// is clamped to the destination frame.
pub fn scale_rect(rect: Rect, from: (u32, u32), to: (u32, u32)) -> Rect {
    if from == to {
        return rect;
    }
    let sx = |v: u32| scale_axis(v, from.0, to.0);
    let sy = |v: u32| scale_axis(v, from.1, to.1);

    let x = sx(rect.x).min(to.0);
    let y = sy(rect.y).min(to.1);
    let w = sx(rect.x + rect.w).min(to.0).saturating_sub(x);
    let h = sy(rect.y + rect.h).min(to.1).saturating_sub(y);
    Rect { x, y, w, h }
}

fn scale_axis(v: u32, from: u32, to: u32) -> u32 {
    if from == 0 {
        return 0;
    }
    let scaled = u64::from(v) * u64::from(to) + u64::from(from) / 2;
    #[allow(clippy::cast_possible_truncation)] // quotient is bounded by `to`
    {
        (scaled / u64::from(from)) as u32
    }
}
