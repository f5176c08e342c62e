//! Widget components for the cockpit display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence.

mod gauges;
mod primitives;
mod settings_menu;

pub use gauges::draw_cockpit;
pub use primitives::{draw_dial_face, draw_dial_ticks, draw_needle, draw_row_background};
pub use settings_menu::{MenuRow, draw_settings_menu};
