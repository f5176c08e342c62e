//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` objects are defined as `const` so the
//! compiler stores them in the binary's read-only data section and draw
//! functions reference them without any runtime construction. Styles whose
//! color varies at runtime (speed text, gear indicator letters) are built
//! from the exposed font references instead:
//! `MonoTextStyle::new(LABEL_FONT, dynamic_color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{DIM_GRAY, LIGHT_GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for dial labels and menu titles.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for panel value labels and menu rows.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the odometer and menu values.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Exposed for creating dynamic-color styles.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (10x20 pixels). Exposed for the gear indicator letters.
pub const INDICATOR_FONT: &MonoFont = &FONT_10X20;

/// Large value font (`ProFont` 18pt). Exposed for dynamic-color value text.
pub const VALUE_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text for labels on dark backgrounds.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small light-gray text for value labels in the normal state.
pub const LABEL_STYLE_LIGHT: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY);

/// Small dim text for key hints at the bottom of the settings menu.
pub const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, DIM_GRAY);

/// Medium white text for the settings-menu title.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large light-gray text for the digital speed readout.
pub const VALUE_STYLE_LIGHT: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, LIGHT_GRAY);
