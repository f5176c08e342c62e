//! Panel placement arithmetic.
//!
//! Every element position is a deterministic function of the viewport size,
//! the number of screens and the transmission type. Coordinates are screen
//! coordinates (y grows downward); vertical offsets are measured from the
//! bottom edge so the instrument cluster stays glued to it at any height.

use embedded_graphics::prelude::Point;

use crate::config::{
    DIAL_BOTTOM_MARGIN,
    DIAL_SIZE,
    MULTI_SCREEN_ANCHOR,
    NEEDLE_PIVOT_OFFSET,
    RPM_DIAL_OFFSET,
    SPEED_DIAL_OFFSET,
};

// =============================================================================
// Viewport
// =============================================================================

/// The drawable surface the panel is laid out against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    /// Number of physical screens the surface spans.
    pub screens: u32,
}

impl Viewport {
    /// X coordinate the instrument cluster is right-aligned against.
    ///
    /// On a single screen this is the full width; on a multi-monitor rig
    /// the anchor moves left so the gauges sit on the center screen.
    pub fn rightmost_anchor(&self) -> i32 {
        if self.screens == 1 {
            self.width as i32
        } else {
            (self.width as f32 * MULTI_SCREEN_ANCHOR) as i32
        }
    }
}

// =============================================================================
// Computed Layout
// =============================================================================

/// Screen positions of every panel element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PanelLayout {
    /// Top-left corner of the RPM dial face.
    pub rpm_dial: Point,
    /// Needle pivot of the RPM dial.
    pub rpm_pivot: Point,
    /// Top-left corner of the speedometer dial face.
    pub speed_dial: Point,
    /// Needle pivot of the speedometer.
    pub speed_pivot: Point,

    // Gear indicator letters inside the RPM dial
    pub reverse_label: Point,
    pub neutral_label: Point,
    pub manual_label: Point,
    pub drive_label: Point,
    /// Gear number; position depends on the transmission type.
    pub gear_number: Point,

    // Text labels
    pub odometer_text: Point,
    pub speed_text: Point,
    pub mileage_text: Point,
    pub rpm_text: Point,
    pub gear_text: Point,
    pub fuel_per_100km_text: Point,
    pub fuel_per_hour_text: Point,
    pub total_fuel_text: Point,
}

impl PanelLayout {
    /// Compute all element positions for the given viewport.
    pub fn compute(
        viewport: Viewport,
        automatic: bool,
    ) -> Self {
        let anchor = viewport.rightmost_anchor();
        let height = viewport.height as i32;
        let rpm_dial_left = anchor - RPM_DIAL_OFFSET;
        let speed_dial_left = anchor - SPEED_DIAL_OFFSET;
        let dial_top = height - DIAL_BOTTOM_MARGIN - DIAL_SIZE;
        let pivot_y = dial_top + DIAL_SIZE - NEEDLE_PIVOT_OFFSET;

        Self {
            rpm_dial: Point::new(rpm_dial_left, dial_top),
            rpm_pivot: Point::new(rpm_dial_left + NEEDLE_PIVOT_OFFSET, pivot_y),
            speed_dial: Point::new(speed_dial_left, dial_top),
            speed_pivot: Point::new(speed_dial_left + NEEDLE_PIVOT_OFFSET, pivot_y),

            reverse_label: Point::new(rpm_dial_left + 50, height - 65),
            neutral_label: Point::new(rpm_dial_left + 65, height - 65),
            manual_label: Point::new(rpm_dial_left + 80, height - 65),
            drive_label: Point::new(rpm_dial_left + 97, height - 65),
            gear_number: Self::gear_number_position(rpm_dial_left, height, automatic),

            odometer_text: Point::new(speed_dial_left + 20, height - 60),
            speed_text: Point::new(anchor - 90, height - 20),
            mileage_text: Point::new(8, height - 20),
            rpm_text: Point::new(anchor / 4, height - 20),
            gear_text: Point::new(anchor / 2, height - 20),
            fuel_per_100km_text: Point::new(anchor / 2, height - 40),
            fuel_per_hour_text: Point::new(anchor / 4, height - 40),
            total_fuel_text: Point::new(20, height - 40),
        }
    }

    /// The gear number sits over the active letter: over D for automatic
    /// transmissions, over M for manual ones.
    pub fn gear_number_position(
        rpm_dial_left: i32,
        height: i32,
        automatic: bool,
    ) -> Point {
        if automatic {
            Point::new(rpm_dial_left + 97, height - 48)
        } else {
            Point::new(rpm_dial_left + 80, height - 48)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_screen_anchor_is_full_width() {
        let viewport = Viewport {
            width: 1920,
            height: 1080,
            screens: 1,
        };
        assert_eq!(viewport.rightmost_anchor(), 1920);
    }

    #[test]
    fn test_multi_screen_anchor_moves_left() {
        let viewport = Viewport {
            width: 5760,
            height: 1080,
            screens: 3,
        };
        assert_eq!(viewport.rightmost_anchor(), (5760.0 * 1.85 / 3.0) as i32);
    }

    #[test]
    fn test_dials_anchor_to_bottom_right() {
        let viewport = Viewport {
            width: 1920,
            height: 1080,
            screens: 1,
        };
        let layout = PanelLayout::compute(viewport, true);

        assert_eq!(layout.rpm_dial, Point::new(1920 - 300, 1080 - 15 - DIAL_SIZE));
        assert_eq!(layout.speed_dial, Point::new(1920 - 200, 1080 - 15 - DIAL_SIZE));
        // Pivots sit 93px from each dial's bottom-left corner
        assert_eq!(layout.rpm_pivot.x, layout.rpm_dial.x + NEEDLE_PIVOT_OFFSET);
        assert_eq!(layout.rpm_pivot.y, layout.rpm_dial.y + DIAL_SIZE - NEEDLE_PIVOT_OFFSET);
    }

    #[test]
    fn test_gear_number_follows_transmission() {
        let viewport = Viewport {
            width: 1280,
            height: 720,
            screens: 1,
        };
        let automatic = PanelLayout::compute(viewport, true);
        let manual = PanelLayout::compute(viewport, false);

        assert_eq!(automatic.gear_number.x, automatic.drive_label.x);
        assert_eq!(manual.gear_number.x, manual.manual_label.x);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let viewport = Viewport {
            width: 1600,
            height: 900,
            screens: 1,
        };
        assert_eq!(PanelLayout::compute(viewport, false), PanelLayout::compute(viewport, false));
    }
}
