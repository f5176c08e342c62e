//! Driving-simulator cockpit host for the desktop.
//!
//! Hosts the cockpit HUD and the graphics-settings dialog in an SDL window
//! via the embedded-graphics simulator. The window stands in for the
//! renderer: applying new graphics settings rebuilds it at the selected
//! resolution, which is the session's "renderer restart".

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod drive;
mod input;
mod timing;

use std::fmt::Write;
use std::thread;
use std::time::Instant;

use cockpit_common::colors::BLACK;
use cockpit_common::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use cockpit_common::display::{AUTO_FREQUENCY, DisplayMode, MAX_DISPLAY_MODES};
use cockpit_common::panel::{Panel, PanelOptions, Viewport};
use cockpit_common::widgets::{MenuRow, draw_cockpit, draw_settings_menu};
use cockpit_common::{DrivingEvent, DrivingLog, GraphicsSelector, Page, RenderSettings};
use cockpit_common::vehicle::{FixedFeed, VehicleFeed};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::{String, Vec};

use crate::drive::DriveModel;
use crate::input::{InputResult, process_key};
use crate::timing::FRAME_TIME;

/// Physical screens behind the drawable surface. The SDL host always maps
/// to a single window.
const SCREEN_COUNT: u32 = 1;

/// Speed pinned by the fixed-feed demo toggle.
const FIXED_DEMO_SPEED_KMH: f32 = 130.0;

/// Engine speed pinned by the fixed-feed demo toggle.
const FIXED_DEMO_RPM: f32 = 4200.0;

fn main() {
    let mut log = DrivingLog::new();

    // Enumeration failure is not fatal: the dialog just offers no
    // resolutions to pick from
    let modes = enumerate_display_modes().unwrap_or_else(|_| {
        log.record(DrivingEvent::ModeEnumerationFailed);
        Vec::new()
    });

    let settings = RenderSettings {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        frequency: AUTO_FREQUENCY.0,
        bits_per_pixel: 32,
        samples: 0,
        fullscreen: false,
        vsync: true,
    };

    let mut session = Session::new(settings, &modes, log);
    let (mut display, mut window) = open_window(&session.settings);

    'running: loop {
        let frame_start = Instant::now();

        let mut restart_requested = false;
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let action = process_key(keycode, session.page);
                    if action.quit {
                        break 'running;
                    }
                    restart_requested |= session.handle(&action);
                }
                _ => {}
            }
        }

        if restart_requested {
            // Renderer restart: reopen the window at the new size
            (display, window) = open_window(&session.settings);
        }

        session.step();

        display.clear(BLACK).ok();
        match session.page {
            Page::Cockpit => draw_cockpit(&mut display, &session.panel),
            Page::GraphicsSettings => draw_settings_menu(
                &mut display,
                &session.selector,
                session.menu_row,
                session.settings.width,
                session.settings.height,
            ),
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

// =============================================================================
// Session Context
// =============================================================================

/// Everything the running session owns: the live renderer settings, the
/// settings dialog, the panel, the driving log and the input focus.
struct Session {
    settings: RenderSettings,
    selector: GraphicsSelector,
    panel: Panel,
    log: DrivingLog,
    page: Page,
    menu_row: MenuRow,
    feed: FixedFeed<DriveModel>,
    gear_shown: (i32, bool),
}

impl Session {
    fn new(
        settings: RenderSettings,
        modes: &[DisplayMode],
        log: DrivingLog,
    ) -> Self {
        let viewport = Viewport {
            width: settings.width,
            height: settings.height,
            screens: SCREEN_COUNT,
        };
        let options = PanelOptions {
            analog: true,
            digital: true,
            fuel: true,
        };

        Self {
            settings,
            selector: GraphicsSelector::new(modes),
            panel: Panel::new(viewport, options),
            log,
            page: Page::default(),
            menu_row: MenuRow::default(),
            feed: FixedFeed::new(DriveModel::new()),
            gear_shown: (0, true),
        }
    }

    const fn viewport(&self) -> Viewport {
        Viewport {
            width: self.settings.width,
            height: self.settings.height,
            screens: SCREEN_COUNT,
        }
    }

    /// Execute one input action. Returns whether the window must be
    /// reopened (settings were applied).
    fn handle(
        &mut self,
        action: &InputResult,
    ) -> bool {
        if action.open_settings {
            self.open_settings_dialog();
        }
        if action.close_settings {
            self.page = Page::Cockpit;
        }
        if action.focus_up {
            self.menu_row = self.menu_row.prev();
        }
        if action.focus_down {
            self.menu_row = self.menu_row.next();
        }
        if action.cycle != 0 {
            self.cycle_focused(action.cycle);
        }
        if action.toggle_transmission {
            self.feed.inner.toggle_transmission();
        }
        if action.toggle_fixed_feed {
            let engage = self.feed.speed_kmh == 0.0;
            self.feed.speed_kmh = if engage { FIXED_DEMO_SPEED_KMH } else { 0.0 };
            self.feed.rpm = if engage { FIXED_DEMO_RPM } else { 0.0 };
        }
        if action.apply {
            return self.apply();
        }
        false
    }

    /// One simulation tick: sample the vehicle, update the panel, and run
    /// any debounced reposition.
    fn step(&mut self) {
        let sample = self.feed.sample();
        let outcome = self.panel.tick(&sample, self.viewport(), &mut self.log);
        if outcome.reopen_settings {
            // The panel has settled at the new resolution; restore the
            // dialog on the graphics-settings view
            self.open_settings_dialog();
        }

        let gear = self.feed.inner.gear();
        if gear != self.gear_shown {
            self.gear_shown = gear;
            self.panel.set_gear(gear.0, gear.1);
        }

        if self.panel.options.fuel {
            self.panel.set_liters_per_100km(self.feed.inner.liters_per_100km());
            self.panel.set_liters_per_hour(self.feed.inner.liters_per_hour());
            self.panel.set_total_fuel(self.feed.inner.total_fuel());
        }
    }

    fn open_settings_dialog(&mut self) {
        self.selector.open(&self.settings);
        self.menu_row = MenuRow::default();
        self.page = Page::GraphicsSettings;
    }

    /// Write the selection to the renderer settings and close the dialog.
    fn apply(&mut self) -> bool {
        let Some(applied) = self.selector.apply() else {
            return false;
        };

        self.settings = applied;
        self.page = Page::Cockpit;
        self.panel.report_resolution_change();

        self.log.record(DrivingEvent::SettingsApplied);
        let mut line: String<48> = String::new();
        let _ = write!(
            line,
            "{}x{} @{} {}bpp {}x {}",
            applied.width,
            applied.height,
            applied.frequency,
            applied.bits_per_pixel,
            applied.samples,
            if applied.fullscreen { "fullscreen" } else { "windowed" },
        );
        self.log.push(&line);

        true
    }

    /// Cycle the value of the focused form row.
    fn cycle_focused(
        &mut self,
        direction: i8,
    ) {
        let forward = direction > 0;
        match self.menu_row {
            MenuRow::Resolution => {
                let next = if forward {
                    self.selector.resolutions.peek_next()
                } else {
                    self.selector.resolutions.peek_prev()
                };
                if let Some(resolution) = next {
                    self.selector.select_resolution(resolution);
                }
            }
            MenuRow::Frequency => {
                if forward {
                    self.selector.frequencies.select_next();
                } else {
                    self.selector.frequencies.select_prev();
                }
            }
            MenuRow::ColorDepth => {
                if forward {
                    self.selector.color_depths.select_next();
                } else {
                    self.selector.color_depths.select_prev();
                }
            }
            MenuRow::Samples => {
                if forward {
                    self.selector.samples.select_next();
                } else {
                    self.selector.samples.select_prev();
                }
            }
            MenuRow::Fullscreen => {
                let fullscreen = self.selector.fullscreen;
                self.selector.set_fullscreen(!fullscreen);
            }
            MenuRow::VSync => self.selector.vsync = !self.selector.vsync,
        }
    }
}

// =============================================================================
// Renderer Boundary
// =============================================================================

/// Display modes the host reports.
///
/// The SDL simulator has no mode-enumeration API, so the catalog is the
/// fixed set a desktop monitor typically exposes, including windowed-only
/// entries the driver would refuse in exclusive fullscreen.
fn enumerate_display_modes() -> Result<Vec<DisplayMode, MAX_DISPLAY_MODES>, &'static str> {
    const CATALOG: [(u32, u32, i32, u32, bool); 11] = [
        (960, 540, 60, 32, false),
        (1024, 768, 60, 32, true),
        (1280, 720, 60, 32, true),
        (1280, 1024, 60, 32, true),
        (1280, 1024, 75, 32, true),
        (1366, 768, 60, 32, false),
        (1600, 900, 60, 32, true),
        (1920, 1080, 60, 24, false),
        (1920, 1080, 60, 32, true),
        (1920, 1080, 75, 32, true),
        (2560, 1440, 60, 32, false),
    ];

    let mut modes = Vec::new();
    for (width, height, frequency, bits_per_pixel, fullscreen_capable) in CATALOG {
        modes
            .push(DisplayMode {
                width,
                height,
                frequency,
                bits_per_pixel,
                fullscreen_capable,
            })
            .ok();
    }
    Ok(modes)
}

/// Open the render window for the given settings. Reopening at a new size
/// is the closest the SDL host gets to a renderer restart.
fn open_window(settings: &RenderSettings) -> (SimulatorDisplay<Rgb565>, Window) {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(settings.width, settings.height));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Driving Simulator Cockpit", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    (display, window)
}
