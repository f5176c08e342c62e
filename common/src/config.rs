//! Display and layout configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Layout values used every frame (dial geometry, pivot offsets) are
//! compile-time constants. The panel positions themselves are recomputed
//! only when the resolution changes, never per frame.

// =============================================================================
// Default Window Configuration
// =============================================================================

/// Initial window width in pixels before the user applies other settings.
pub const DEFAULT_WIDTH: u32 = 960;

/// Initial window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 540;

// =============================================================================
// Gauge Geometry
// =============================================================================

/// Width and height of each dial face (speedometer and RPM gauge).
pub const DIAL_SIZE: i32 = 184;

/// Offset of the needle pivot from the dial's bottom-left corner.
/// Both dials share the same pivot geometry.
pub const NEEDLE_PIVOT_OFFSET: i32 = 93;

/// Needle length in pixels, measured from the pivot.
pub const NEEDLE_LENGTH: i32 = 70;

/// Dial tick mark length in pixels, drawn inward from the rim.
pub const TICK_LENGTH: i32 = 8;

// =============================================================================
// Panel Placement
// =============================================================================

/// Distance of the RPM dial's left edge from the rightmost anchor.
pub const RPM_DIAL_OFFSET: i32 = 300;

/// Distance of the speedometer's left edge from the rightmost anchor.
/// The dials deliberately overlap; the speedometer is drawn second.
pub const SPEED_DIAL_OFFSET: i32 = 200;

/// Gap between the dials and the bottom edge of the viewport.
pub const DIAL_BOTTOM_MARGIN: i32 = 15;

/// Horizontal fraction of the viewport used as the rightmost anchor on a
/// multi-monitor rig, so the gauges sit on the center screen.
pub const MULTI_SCREEN_ANCHOR: f32 = 1.85 / 3.0;

// =============================================================================
// Reposition Debounce
// =============================================================================

/// The panel repositions on every second tick after a resolution change,
/// giving the renderer one frame to settle at the new size.
pub const REPOSITION_INTERVAL_TICKS: u32 = 2;
