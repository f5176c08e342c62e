//! Display-mode catalog and the graphics-settings selector.
//!
//! - [`options`]: the four selectable option types and the bounded
//!   [`OptionList`](options::OptionList) they live in
//! - [`selector`]: the dependent-list rebuild cascade and Apply

mod options;
mod selector;

pub use options::{
    AUTO_FREQUENCY,
    ColorDepth,
    Frequency,
    OptionList,
    Resolution,
    SAMPLES_CHOICES,
    Samples,
};
pub use selector::{GraphicsSelector, MAX_DISPLAY_MODES};

// =============================================================================
// Hardware Capability Record
// =============================================================================

/// One display mode as reported by the hardware.
///
/// The catalog is fetched once at session start and treated as immutable
/// for the process lifetime; re-enumeration is not modeled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DisplayMode {
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Refresh frequency in Hz.
    pub frequency: i32,
    /// Color depth in bits per pixel.
    pub bits_per_pixel: u32,
    /// Whether the driver allows this mode in exclusive fullscreen.
    pub fullscreen_capable: bool,
}

// =============================================================================
// Live Renderer Settings
// =============================================================================

/// The live settings tuple held by the renderer.
///
/// Read when the settings dialog opens, written as a whole on Apply.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Refresh frequency in Hz; [`AUTO_FREQUENCY`]'s value in windowed mode.
    pub frequency: i32,
    pub bits_per_pixel: u32,
    /// Multisampling sample count; 0 deactivates multisampling.
    pub samples: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}
