//! Cockpit panel state and per-tick update.
//!
//! The panel owns the displayed value of every instrument: needle angles,
//! label strings and indicator colors. [`Panel::tick`] refreshes them from
//! the current vehicle sample; the widgets then draw whatever is stored
//! here. Element positions live in the computed [`PanelLayout`] and are
//! only recomputed on a resolution change, one tick after the change is
//! reported (see [`Panel::report_resolution_change`]).

mod layout;
mod needle;

pub use layout::{PanelLayout, Viewport};
pub use needle::{
    RPM_MAX,
    RPM_PER_DEGREE,
    SCALE_ZERO_DEG,
    SPEED_DEAD_ZONE_KMH,
    SPEED_MAX_KMH,
    rpm_needle_radians,
    speed_needle_radians,
};

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{GRAY, LIGHT_GRAY, RED};
use crate::config::REPOSITION_INTERVAL_TICKS;
use crate::events::DrivingLog;
use crate::speed_limit::SpeedLimitWatch;
use crate::vehicle::VehicleSample;

// =============================================================================
// Visibility Options
// =============================================================================

/// Which element groups the panel shows.
#[derive(Clone, Copy, Debug)]
pub struct PanelOptions {
    /// Analog dials, needles and the gear indicator cluster.
    pub analog: bool,
    /// Digital speed/RPM/gear/mileage labels.
    pub digital: bool,
    /// Fuel consumption labels.
    pub fuel: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            analog: true,
            digital: true,
            fuel: false,
        }
    }
}

// =============================================================================
// Tick Outcome
// =============================================================================

/// What a tick asks the session to do.
#[derive(Clone, Copy, Default, Debug)]
pub struct TickOutcome {
    /// The debounced reposition ran; reopen the dialog on the
    /// graphics-settings view.
    pub reopen_settings: bool,
}

// =============================================================================
// Panel
// =============================================================================

/// Displayed state of every cockpit instrument.
pub struct Panel {
    pub options: PanelOptions,
    layout: PanelLayout,
    automatic: bool,

    // Speedometer
    pub speed_text: String<16>,
    pub speed_color: Rgb565,
    /// Needle angle in radians.
    pub speed_needle: f32,

    // RPM gauge
    pub rpm_text: String<16>,
    /// Needle angle in radians.
    pub rpm_needle: f32,

    // Distance
    pub mileage_text: String<16>,
    pub odometer_text: String<16>,

    // Gear
    pub gear_text: String<12>,
    pub gear_number: String<4>,
    pub reverse_color: Rgb565,
    pub neutral_color: Rgb565,
    pub manual_color: Rgb565,
    pub drive_color: Rgb565,

    // Fuel
    pub fuel_per_100km_text: String<16>,
    pub fuel_per_hour_text: String<16>,
    pub total_fuel_text: String<16>,

    // Reposition debounce
    resolution_changed: bool,
    reposition_delay: u32,

    limit_watch: SpeedLimitWatch,
}

impl Panel {
    /// Create a panel laid out for the given viewport.
    pub fn new(
        viewport: Viewport,
        options: PanelOptions,
    ) -> Self {
        let mut panel = Self {
            options,
            layout: PanelLayout::compute(viewport, true),
            automatic: true,
            speed_text: String::new(),
            speed_color: LIGHT_GRAY,
            speed_needle: speed_needle_radians(0.0),
            rpm_text: String::new(),
            rpm_needle: rpm_needle_radians(0.0),
            mileage_text: String::new(),
            odometer_text: String::new(),
            gear_text: String::new(),
            gear_number: String::new(),
            reverse_color: GRAY,
            neutral_color: GRAY,
            manual_color: GRAY,
            drive_color: GRAY,
            fuel_per_100km_text: String::new(),
            fuel_per_hour_text: String::new(),
            total_fuel_text: String::new(),
            resolution_changed: false,
            reposition_delay: 0,
            limit_watch: SpeedLimitWatch::new(),
        };
        panel.set_gear(0, true);
        panel
    }

    /// Current element positions.
    #[inline]
    pub const fn layout(&self) -> &PanelLayout { &self.layout }

    /// Mark that the render resolution changed. The reposition itself runs
    /// debounced inside a later [`Panel::tick`].
    pub fn report_resolution_change(&mut self) { self.resolution_changed = true }

    /// Per-simulation-step update of all displayed values.
    ///
    /// `viewport` is the surface the renderer currently draws to; it is
    /// only read when a pending resolution change triggers the debounced
    /// relayout. Speed-limit transitions are recorded into `log`.
    pub fn tick(
        &mut self,
        sample: &VehicleSample,
        viewport: Viewport,
        log: &mut DrivingLog,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.update_speed(sample, log);
        self.update_rpm(sample.rpm);
        self.update_mileage(sample.mileage_m);

        // Reposition one tick after the change was observed, giving the
        // renderer a frame to settle at the new size.
        if self.resolution_changed {
            self.reposition_delay += 1;
            if self.reposition_delay.is_multiple_of(REPOSITION_INTERVAL_TICKS) {
                self.layout = PanelLayout::compute(viewport, self.automatic);
                self.resolution_changed = false;
                outcome.reopen_settings = true;
            }
        }

        outcome
    }

    /// Update the gear display.
    ///
    /// Exactly one indicator letter carries the active color afterwards;
    /// the other three are rewritten to the inactive color on every call.
    pub fn set_gear(
        &mut self,
        gear: i32,
        automatic: bool,
    ) {
        self.automatic = automatic;

        self.gear_text.clear();
        self.gear_number.clear();
        self.reverse_color = GRAY;
        self.neutral_color = GRAY;
        self.manual_color = GRAY;
        self.drive_color = GRAY;

        if automatic {
            let _ = write!(self.gear_text, "Gear: A{gear}");
            let _ = write!(self.gear_number, "{gear}");
            self.drive_color = RED;
        } else if gear == 0 {
            let _ = write!(self.gear_text, "Gear: N");
            self.neutral_color = RED;
        } else if gear == -1 {
            let _ = write!(self.gear_text, "Gear: R");
            self.reverse_color = RED;
        } else {
            let _ = write!(self.gear_text, "Gear: M{gear}");
            let _ = write!(self.gear_number, "{gear}");
            self.manual_color = RED;
        }
    }

    /// Update the fuel consumption per 100 km. Negative readings (no
    /// consumption measurable yet) display as placeholder dashes.
    pub fn set_liters_per_100km(
        &mut self,
        liters: f32,
    ) {
        self.fuel_per_100km_text.clear();
        if liters < 0.0 {
            let _ = write!(self.fuel_per_100km_text, "-- L/100km");
        } else {
            let _ = write!(self.fuel_per_100km_text, "{liters:.2} L/100km");
        }
    }

    /// Update the fuel consumption per hour.
    pub fn set_liters_per_hour(
        &mut self,
        liters: f32,
    ) {
        self.fuel_per_hour_text.clear();
        let _ = write!(self.fuel_per_hour_text, "{liters:.2} L/h");
    }

    /// Update the total fuel consumed.
    pub fn set_total_fuel(
        &mut self,
        liters: f32,
    ) {
        self.total_fuel_text.clear();
        let _ = write!(self.total_fuel_text, "{liters:.3} L");
    }

    fn update_speed(
        &mut self,
        sample: &VehicleSample,
        log: &mut DrivingLog,
    ) {
        let speed = sample.speed_kmh;

        self.speed_text.clear();
        if speed.abs() <= SPEED_DEAD_ZONE_KMH {
            let _ = write!(self.speed_text, "0.0 km/h");
            self.speed_needle = speed_needle_radians(0.0);
        } else {
            let _ = write!(self.speed_text, "{speed:.1} km/h");
            self.speed_needle = speed_needle_radians(speed);
        }

        if let Some(event) = self
            .limit_watch
            .update(speed, sample.current_limit_kmh, sample.upcoming_limit_kmh)
        {
            log.record(event);
        }
        self.speed_color = if self.limit_watch.exceeded() { RED } else { LIGHT_GRAY };
    }

    fn update_rpm(
        &mut self,
        rpm: f32,
    ) {
        self.rpm_text.clear();
        let _ = write!(self.rpm_text, "{} rpm", rpm as i32);
        self.rpm_needle = rpm_needle_radians(rpm);
    }

    fn update_mileage(
        &mut self,
        mileage_m: f32,
    ) {
        self.mileage_text.clear();
        if mileage_m < 1000.0 {
            let _ = write!(self.mileage_text, "{} m", mileage_m as u32);
        } else {
            // Truncate to two decimals: 12345m -> 12.34 km
            let km = ((mileage_m / 10.0) as u32) as f32 / 100.0;
            let _ = write!(self.mileage_text, "{km:.2} km");
        }

        let odometer_km = (mileage_m as u32) as f32 / 1000.0;
        self.odometer_text.clear();
        let _ = write!(self.odometer_text, "{odometer_km:.3} km");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 720,
        screens: 1,
    };

    fn panel() -> Panel { Panel::new(VIEWPORT, PanelOptions::default()) }

    fn sample(speed: f32) -> VehicleSample {
        VehicleSample {
            speed_kmh: speed,
            rpm: 2000.0,
            mileage_m: 0.0,
            current_limit_kmh: 0.0,
            upcoming_limit_kmh: 0.0,
        }
    }

    #[test]
    fn test_dead_zone_displays_exact_zero() {
        let mut panel = panel();
        let mut log = DrivingLog::new();

        panel.tick(&sample(0.5), VIEWPORT, &mut log);
        assert_eq!(panel.speed_text.as_str(), "0.0 km/h");
        assert_eq!(panel.speed_needle, speed_needle_radians(0.0));
    }

    #[test]
    fn test_speed_text_one_decimal() {
        let mut panel = panel();
        let mut log = DrivingLog::new();

        panel.tick(&sample(123.46), VIEWPORT, &mut log);
        assert_eq!(panel.speed_text.as_str(), "123.5 km/h");
    }

    #[test]
    fn test_gear_neutral() {
        let mut panel = panel();
        panel.set_gear(0, false);

        assert_eq!(panel.gear_text.as_str(), "Gear: N");
        assert_eq!(panel.gear_number.as_str(), "");
        assert_eq!(panel.neutral_color, RED);
        assert_eq!(panel.reverse_color, GRAY);
        assert_eq!(panel.manual_color, GRAY);
        assert_eq!(panel.drive_color, GRAY);
    }

    #[test]
    fn test_gear_automatic_third() {
        let mut panel = panel();
        panel.set_gear(3, true);

        assert_eq!(panel.gear_text.as_str(), "Gear: A3");
        assert_eq!(panel.gear_number.as_str(), "3");
        assert_eq!(panel.drive_color, RED);
        assert_eq!(panel.neutral_color, GRAY);
    }

    #[test]
    fn test_gear_reverse_then_manual_resets_indicators() {
        let mut panel = panel();
        panel.set_gear(-1, false);
        assert_eq!(panel.gear_text.as_str(), "Gear: R");
        assert_eq!(panel.reverse_color, RED);

        panel.set_gear(4, false);
        assert_eq!(panel.gear_text.as_str(), "Gear: M4");
        assert_eq!(panel.gear_number.as_str(), "4");
        assert_eq!(panel.manual_color, RED);
        assert_eq!(panel.reverse_color, GRAY);
    }

    #[test]
    fn test_speed_limit_latch_colors_and_logs_once() {
        let mut panel = panel();
        let mut log = DrivingLog::new();

        let mut speeding = sample(65.0);
        speeding.current_limit_kmh = 50.0;

        panel.tick(&speeding, VIEWPORT, &mut log);
        assert_eq!(panel.speed_color, RED);
        assert_eq!(log.len(), 1);

        speeding.speed_kmh = 66.0;
        panel.tick(&speeding, VIEWPORT, &mut log);
        assert_eq!(log.len(), 1);

        speeding.speed_kmh = 55.0;
        panel.tick(&speeding, VIEWPORT, &mut log);
        assert_eq!(panel.speed_color, LIGHT_GRAY);
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().last().unwrap(), "Speed back to normal");
    }

    #[test]
    fn test_reposition_debounce_runs_on_second_tick() {
        let mut panel = panel();
        let mut log = DrivingLog::new();
        let grown = Viewport {
            width: 1920,
            height: 1080,
            screens: 1,
        };
        let before = *panel.layout();

        panel.report_resolution_change();

        // First tick after the flag: layout untouched
        let outcome = panel.tick(&sample(0.0), grown, &mut log);
        assert!(!outcome.reopen_settings);
        assert_eq!(*panel.layout(), before);

        // Second tick: reposition happens exactly once
        let outcome = panel.tick(&sample(0.0), grown, &mut log);
        assert!(outcome.reopen_settings);
        assert_eq!(*panel.layout(), PanelLayout::compute(grown, true));

        // Flag cleared: no further repositioning
        let outcome = panel.tick(&sample(0.0), grown, &mut log);
        assert!(!outcome.reopen_settings);
    }

    #[test]
    fn test_mileage_meters_then_kilometers() {
        let mut panel = panel();
        let mut log = DrivingLog::new();

        let mut s = sample(10.0);
        s.mileage_m = 999.4;
        panel.tick(&s, VIEWPORT, &mut log);
        assert_eq!(panel.mileage_text.as_str(), "999 m");

        s.mileage_m = 12345.0;
        panel.tick(&s, VIEWPORT, &mut log);
        assert_eq!(panel.mileage_text.as_str(), "12.34 km");
        assert_eq!(panel.odometer_text.as_str(), "12.345 km");
    }

    #[test]
    fn test_fuel_formatting() {
        let mut panel = panel();

        panel.set_liters_per_100km(-1.0);
        assert_eq!(panel.fuel_per_100km_text.as_str(), "-- L/100km");

        panel.set_liters_per_100km(7.456);
        assert_eq!(panel.fuel_per_100km_text.as_str(), "7.46 L/100km");

        panel.set_liters_per_hour(1.5);
        assert_eq!(panel.fuel_per_hour_text.as_str(), "1.50 L/h");

        panel.set_total_fuel(2.0);
        assert_eq!(panel.total_fuel_text.as_str(), "2.000 L");
    }
}
