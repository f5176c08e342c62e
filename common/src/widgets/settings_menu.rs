//! Graphics-settings page rendering.
//!
//! Draws the selector state as a focusable form: one row per option list,
//! one per toggle, with the focused row highlighted and key hints at the
//! bottom. Row focus itself is session state owned by the host.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::ROW_HIGHLIGHT;
use crate::display::GraphicsSelector;
use crate::styles::{CENTERED, HINT_STYLE, LABEL_STYLE_LIGHT, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE};
use super::primitives::draw_row_background;

// =============================================================================
// Form Rows
// =============================================================================

/// Focusable rows of the settings form, top to bottom.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum MenuRow {
    #[default]
    Resolution,
    Frequency,
    ColorDepth,
    Samples,
    Fullscreen,
    VSync,
}

impl MenuRow {
    /// The row below, saturating at the bottom.
    pub const fn next(self) -> Self {
        match self {
            Self::Resolution => Self::Frequency,
            Self::Frequency => Self::ColorDepth,
            Self::ColorDepth => Self::Samples,
            Self::Samples => Self::Fullscreen,
            Self::Fullscreen | Self::VSync => Self::VSync,
        }
    }

    /// The row above, saturating at the top.
    pub const fn prev(self) -> Self {
        match self {
            Self::Resolution | Self::Frequency => Self::Resolution,
            Self::ColorDepth => Self::Frequency,
            Self::Samples => Self::ColorDepth,
            Self::Fullscreen => Self::Samples,
            Self::VSync => Self::Fullscreen,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Resolution => "Resolution",
            Self::Frequency => "Frequency",
            Self::ColorDepth => "Color depth",
            Self::Samples => "Multisampling",
            Self::Fullscreen => "Fullscreen",
            Self::VSync => "Vertical sync",
        }
    }

    const fn all() -> [Self; 6] {
        [
            Self::Resolution,
            Self::Frequency,
            Self::ColorDepth,
            Self::Samples,
            Self::Fullscreen,
            Self::VSync,
        ]
    }
}

// =============================================================================
// Layout
// =============================================================================

const TITLE_Y: i32 = 36;
const FIRST_ROW_Y: i32 = 70;
const ROW_HEIGHT: i32 = 24;
const ROW_MARGIN_X: i32 = 40;

// =============================================================================
// Rendering
// =============================================================================

/// Draw the settings form for the current selector state.
pub fn draw_settings_menu<D>(
    display: &mut D,
    selector: &GraphicsSelector,
    focused: MenuRow,
    viewport_width: u32,
    viewport_height: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center_x = (viewport_width / 2) as i32;
    let row_width = viewport_width as i32 - 2 * ROW_MARGIN_X;

    Text::with_text_style("GRAPHIC SETTINGS", Point::new(center_x, TITLE_Y), TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    for (index, row) in MenuRow::all().into_iter().enumerate() {
        let row_top = FIRST_ROW_Y + index as i32 * ROW_HEIGHT;

        if row == focused {
            draw_row_background(
                display,
                Point::new(ROW_MARGIN_X, row_top),
                row_width as u32,
                ROW_HEIGHT as u32,
                ROW_HIGHLIGHT,
            );
        }

        let text_y = row_top + ROW_HEIGHT / 2 + 3;
        let style = if row == focused { LABEL_STYLE_WHITE } else { LABEL_STYLE_LIGHT };

        Text::with_text_style(row.label(), Point::new(ROW_MARGIN_X + 8, text_y), style, LEFT_ALIGNED)
            .draw(display)
            .ok();

        let mut value: String<24> = String::new();
        row_value(selector, row, &mut value);
        Text::with_text_style(
            value.as_str(),
            Point::new(ROW_MARGIN_X + row_width - 8, text_y),
            style,
            RIGHT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    if selector.resolutions.is_empty() {
        Text::with_text_style(
            "No display modes reported",
            Point::new(center_x, FIRST_ROW_Y + 7 * ROW_HEIGHT),
            HINT_STYLE,
            CENTERED,
        )
        .draw(display)
        .ok();
    }

    Text::with_text_style(
        "Up/Down select  Left/Right change  Enter apply  Esc back",
        Point::new(center_x, viewport_height as i32 - 12),
        HINT_STYLE,
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Format the displayed value of one form row.
fn row_value(
    selector: &GraphicsSelector,
    row: MenuRow,
    out: &mut String<24>,
) {
    match row {
        MenuRow::Resolution => match selector.resolutions.selected() {
            Some(resolution) => {
                let _ = write!(out, "< {resolution} >");
            }
            None => {
                let _ = write!(out, "--");
            }
        },
        MenuRow::Frequency => match selector.frequencies.selected() {
            Some(frequency) => {
                let _ = write!(out, "< {frequency} >");
            }
            None => {
                let _ = write!(out, "--");
            }
        },
        MenuRow::ColorDepth => match selector.color_depths.selected() {
            Some(depth) => {
                let _ = write!(out, "< {depth} >");
            }
            None => {
                let _ = write!(out, "--");
            }
        },
        MenuRow::Samples => match selector.samples.selected() {
            Some(samples) => {
                let _ = write!(out, "< {samples} >");
            }
            None => {
                let _ = write!(out, "--");
            }
        },
        MenuRow::Fullscreen => {
            let _ = write!(out, "{}", if selector.fullscreen { "[x]" } else { "[ ]" });
        }
        MenuRow::VSync => {
            let _ = write!(out, "{}", if selector.vsync { "[x]" } else { "[ ]" });
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
