//! Color constants for the cockpit display.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The `embedded_graphics` crate provides pre-defined color constants through
//! the `RgbColor` trait; custom shades are constructed with `Rgb565::new`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Used for the scene background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Used for dial faces and menu values.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Warning color: speed-limit excursions and the
/// active gear indicator letter.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Used for the current gear number inside the
/// RPM dial.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Medium gray for inactive gear indicator letters (R/N/M/D at rest).
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);

/// Light gray for value text (speed, mileage, odometer, fuel) in the
/// normal state.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(24, 48, 24);

/// Orange needle color, matching the indicator texture of the dials.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark blue-gray highlight for the focused settings-menu row.
pub const ROW_HIGHLIGHT: Rgb565 = Rgb565::new(4, 10, 14);

/// Dim gray for dial tick marks and menu separators.
pub const DIM_GRAY: Rgb565 = Rgb565::new(8, 16, 8);
