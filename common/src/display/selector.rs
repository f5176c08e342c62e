//! Graphics-settings selector.
//!
//! A form binder over the display-mode catalog: four dependent option lists
//! (resolution, frequency, color depth, multisampling) plus the fullscreen
//! and vsync toggles. The frequency and color-depth lists are a function of
//! the selected resolution and the fullscreen flag; the resolution list
//! depends on the fullscreen flag alone; the samples list on nothing.
//!
//! Every dependency change clears and refills all four lists, then attempts
//! to re-select the previous values. A value that no longer exists in its
//! rebuilt list falls back to the widget behavior ([`OptionList::select`]);
//! that is not an error.

use heapless::Vec;

use super::options::{
    AUTO_FREQUENCY,
    ColorDepth,
    Frequency,
    OptionList,
    Resolution,
    SAMPLES_CHOICES,
    Samples,
};
use super::{DisplayMode, RenderSettings};

// =============================================================================
// Capacities
// =============================================================================

/// Upper bound on catalog entries kept from hardware enumeration.
pub const MAX_DISPLAY_MODES: usize = 64;

const MAX_RESOLUTIONS: usize = 32;
const MAX_FREQUENCIES: usize = 16;
const MAX_COLOR_DEPTHS: usize = 8;
const SAMPLES_COUNT: usize = SAMPLES_CHOICES.len();

// =============================================================================
// Selector
// =============================================================================

/// State of the graphics-settings dialog.
pub struct GraphicsSelector {
    /// Immutable catalog of hardware display modes.
    modes: Vec<DisplayMode, MAX_DISPLAY_MODES>,

    pub resolutions: OptionList<Resolution, MAX_RESOLUTIONS>,
    pub frequencies: OptionList<Frequency, MAX_FREQUENCIES>,
    pub color_depths: OptionList<ColorDepth, MAX_COLOR_DEPTHS>,
    pub samples: OptionList<Samples, SAMPLES_COUNT>,

    pub fullscreen: bool,
    pub vsync: bool,

    /// Guard against redundant rebuilds when a rebuild re-selects the
    /// same resolution programmatically.
    last_resolution: Option<Resolution>,
}

impl GraphicsSelector {
    /// Create a selector over the given catalog. Entries beyond
    /// [`MAX_DISPLAY_MODES`] are dropped.
    pub fn new(modes: &[DisplayMode]) -> Self {
        let mut catalog: Vec<DisplayMode, MAX_DISPLAY_MODES> = Vec::new();
        for mode in modes {
            catalog.push(*mode).ok();
        }

        Self {
            modes: catalog,
            resolutions: OptionList::new(),
            frequencies: OptionList::new(),
            color_depths: OptionList::new(),
            samples: OptionList::new(),
            fullscreen: false,
            vsync: false,
            last_resolution: None,
        }
    }

    /// Initialize the dialog from the renderer's current settings.
    ///
    /// Builds all four lists under the current fullscreen flag, selects the
    /// entries matching the settings tuple, sets both toggles, and records
    /// the current resolution as the last selection.
    pub fn open(
        &mut self,
        current: &RenderSettings,
    ) {
        self.fullscreen = current.fullscreen;
        self.vsync = current.vsync;
        self.rebuild(
            current.width,
            current.height,
            Frequency(current.frequency),
            ColorDepth(current.bits_per_pixel),
            Samples(current.samples),
        );
        self.last_resolution = Some(Resolution {
            width: current.width,
            height: current.height,
        });
    }

    /// Change the fullscreen flag and rebuild every list, re-selecting the
    /// currently selected values under the new constraint.
    ///
    /// List membership may shrink (windowed-only resolutions disappear in
    /// fullscreen); vanished selections take the widget fallback.
    pub fn set_fullscreen(
        &mut self,
        fullscreen: bool,
    ) {
        self.fullscreen = fullscreen;
        self.rebuild_from_selection();
    }

    /// React to a resolution selection.
    ///
    /// Only a resolution that differs from the last selected one triggers a
    /// rebuild; reselection storms from programmatic selects during a
    /// rebuild are filtered out here.
    pub fn select_resolution(
        &mut self,
        resolution: Resolution,
    ) {
        if self.last_resolution == Some(resolution) {
            return;
        }
        self.last_resolution = Some(resolution);

        let frequency = self.frequencies.selected().unwrap_or(AUTO_FREQUENCY);
        let color_depth = self.color_depths.selected().unwrap_or(ColorDepth(0));
        let samples = self.samples.selected().unwrap_or(Samples(0));
        self.rebuild(resolution.width, resolution.height, frequency, color_depth, samples);
    }

    /// Read the current selections into a settings tuple.
    ///
    /// `None` when no resolution is selectable (empty catalog); the dialog
    /// then offers nothing to apply. Writing the tuple to the renderer,
    /// requesting the restart and notifying the panel belong to the caller.
    pub fn apply(&self) -> Option<RenderSettings> {
        let resolution = self.resolutions.selected()?;
        Some(RenderSettings {
            width: resolution.width,
            height: resolution.height,
            frequency: self.frequencies.selected().unwrap_or(AUTO_FREQUENCY).0,
            bits_per_pixel: self.color_depths.selected().unwrap_or(ColorDepth(0)).0,
            samples: self.samples.selected().unwrap_or(Samples(0)).0,
            fullscreen: self.fullscreen,
            vsync: self.vsync,
        })
    }

    /// Rebuild all lists using the current selections as targets.
    fn rebuild_from_selection(&mut self) {
        let resolution = self
            .resolutions
            .selected()
            .or(self.last_resolution)
            .unwrap_or(Resolution { width: 0, height: 0 });
        let frequency = self.frequencies.selected().unwrap_or(AUTO_FREQUENCY);
        let color_depth = self.color_depths.selected().unwrap_or(ColorDepth(0));
        let samples = self.samples.selected().unwrap_or(Samples(0));
        self.rebuild(resolution.width, resolution.height, frequency, color_depth, samples);
    }

    /// Clear and refill all four lists, then re-select the given targets.
    ///
    /// `width`/`height` act both as the re-selection target for the
    /// resolution list and as the filter key for the frequency and
    /// color-depth lists.
    fn rebuild(
        &mut self,
        width: u32,
        height: u32,
        frequency: Frequency,
        color_depth: ColorDepth,
        samples: Samples,
    ) {
        self.resolutions.clear();
        self.frequencies.clear();
        self.color_depths.clear();
        self.samples.clear();

        // Resolutions: in fullscreen only the capable subset is offered
        for mode in &self.modes {
            if !self.fullscreen || mode.fullscreen_capable {
                self.resolutions.push_unique(Resolution {
                    width: mode.width,
                    height: mode.height,
                });
            }
        }
        self.resolutions.sort();
        self.resolutions.select(Resolution { width, height });

        // Frequencies: windowed mode always offers the sole Auto entry
        if self.fullscreen {
            for mode in &self.modes {
                if mode.fullscreen_capable && mode.width == width && mode.height == height {
                    self.frequencies.push_unique(Frequency(mode.frequency));
                }
            }
            self.frequencies.sort();
            self.frequencies.select(frequency);
        } else {
            self.frequencies.push_unique(AUTO_FREQUENCY);
        }

        // Color depths of the modes matching the resolution filter
        for mode in &self.modes {
            if (!self.fullscreen || mode.fullscreen_capable) && mode.width == width && mode.height == height {
                self.color_depths.push_unique(ColorDepth(mode.bits_per_pixel));
            }
        }
        self.color_depths.sort();
        self.color_depths.select(color_depth);

        // Samples: fixed choice set, independent of any other state
        for choice in SAMPLES_CHOICES {
            self.samples.push_unique(choice);
        }
        self.samples.sort();
        self.samples.select(samples);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(
        width: u32,
        height: u32,
        frequency: i32,
        bits_per_pixel: u32,
        fullscreen_capable: bool,
    ) -> DisplayMode {
        DisplayMode {
            width,
            height,
            frequency,
            bits_per_pixel,
            fullscreen_capable,
        }
    }

    fn catalog() -> [DisplayMode; 3] {
        [
            mode(1920, 1080, 60, 32, true),
            mode(1920, 1080, 75, 32, true),
            mode(1280, 720, 60, 24, false),
        ]
    }

    fn settings(
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> RenderSettings {
        RenderSettings {
            width,
            height,
            frequency: 60,
            bits_per_pixel: 32,
            samples: 0,
            fullscreen,
            vsync: true,
        }
    }

    #[test]
    fn test_windowed_frequency_is_auto_only() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, false));

        assert_eq!(selector.frequencies.items(), &[AUTO_FREQUENCY]);
        assert_eq!(selector.frequencies.selected(), Some(AUTO_FREQUENCY));
    }

    #[test]
    fn test_samples_are_fixed_choice_set() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, false));

        assert_eq!(
            selector.samples.items(),
            &[Samples(0), Samples(2), Samples(4), Samples(8), Samples(16)]
        );

        // Independent of fullscreen and resolution
        selector.set_fullscreen(true);
        assert_eq!(selector.samples.len(), 5);
    }

    #[test]
    fn test_resolutions_deduped_and_sorted() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, false));

        // Two 1920x1080 modes collapse into one entry
        assert_eq!(
            selector.resolutions.items(),
            &[
                Resolution { width: 1280, height: 720 },
                Resolution { width: 1920, height: 1080 },
            ]
        );
    }

    #[test]
    fn test_fullscreen_filters_dependent_lists() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, true));

        assert_eq!(selector.frequencies.items(), &[Frequency(60), Frequency(75)]);
        assert_eq!(selector.color_depths.items(), &[ColorDepth(32)]);
        // The windowed-only 1280x720 mode is gone
        assert_eq!(selector.resolutions.items(), &[Resolution { width: 1920, height: 1080 }]);
    }

    #[test]
    fn test_fullscreen_toggle_reselects_current_values() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, false));
        selector.samples.select(Samples(8));

        selector.set_fullscreen(true);

        assert_eq!(
            selector.resolutions.selected(),
            Some(Resolution { width: 1920, height: 1080 })
        );
        assert_eq!(selector.samples.selected(), Some(Samples(8)));
        // Frequency switches from the windowed Auto entry to the hardware list
        assert_eq!(selector.frequencies.selected(), Some(Frequency(60)));
    }

    #[test]
    fn test_select_resolution_rebuilds_dependents() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, false));

        selector.select_resolution(Resolution { width: 1280, height: 720 });

        assert_eq!(selector.color_depths.items(), &[ColorDepth(24)]);
        // Windowed: frequency stays the Auto sentinel
        assert_eq!(selector.frequencies.items(), &[AUTO_FREQUENCY]);
    }

    #[test]
    fn test_redundant_reselection_is_filtered() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, true));
        selector.frequencies.select(Frequency(75));

        // Re-selecting the same resolution must not rebuild (and therefore
        // not reset the frequency selection back to the target default)
        selector.select_resolution(Resolution { width: 1920, height: 1080 });
        assert_eq!(selector.frequencies.selected(), Some(Frequency(75)));
    }

    #[test]
    fn test_apply_reads_selections() {
        let mut selector = GraphicsSelector::new(&catalog());
        selector.open(&settings(1920, 1080, true));
        selector.frequencies.select(Frequency(75));
        selector.samples.select(Samples(4));
        selector.vsync = false;

        let applied = selector.apply().unwrap();
        assert_eq!(applied.width, 1920);
        assert_eq!(applied.height, 1080);
        assert_eq!(applied.frequency, 75);
        assert_eq!(applied.bits_per_pixel, 32);
        assert_eq!(applied.samples, 4);
        assert!(applied.fullscreen);
        assert!(!applied.vsync);
    }

    #[test]
    fn test_empty_catalog_offers_nothing() {
        let mut selector = GraphicsSelector::new(&[]);
        selector.open(&settings(1920, 1080, false));

        assert!(selector.resolutions.is_empty());
        assert!(selector.apply().is_none());
        // The hardware-independent lists are still populated
        assert_eq!(selector.samples.len(), 5);
        assert_eq!(selector.frequencies.items(), &[AUTO_FREQUENCY]);
    }
}
