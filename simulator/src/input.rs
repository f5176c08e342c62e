//! Keyboard input processing.
//!
//! Converts key presses into typed session actions depending on the active
//! page. All state mutation happens in the main loop; this module only
//! decides what a key means.

use cockpit_common::Page;
use embedded_graphics_simulator::sdl2::Keycode;

/// Result of processing one key press.
#[derive(Default)]
pub struct InputResult {
    /// Open the graphics-settings dialog (cockpit page).
    pub open_settings: bool,
    /// Close the dialog without applying (settings page).
    pub close_settings: bool,
    /// Move the form focus one row up.
    pub focus_up: bool,
    /// Move the form focus one row down.
    pub focus_down: bool,
    /// Cycle the focused row's value: -1 left, +1 right, 0 none.
    pub cycle: i8,
    /// Apply the selected settings and restart the renderer.
    pub apply: bool,
    /// Switch between automatic and manual transmission (cockpit page).
    pub toggle_transmission: bool,
    /// Engage or release the fixed-speed demo feed (cockpit page).
    pub toggle_fixed_feed: bool,
    /// Quit the application.
    pub quit: bool,
}

/// Map one key press to an action for the current page.
pub fn process_key(
    keycode: Keycode,
    page: Page,
) -> InputResult {
    let mut result = InputResult::default();

    match page {
        Page::Cockpit => match keycode {
            Keycode::G => result.open_settings = true,
            Keycode::T => result.toggle_transmission = true,
            Keycode::F => result.toggle_fixed_feed = true,
            Keycode::Escape => result.quit = true,
            _ => {}
        },
        Page::GraphicsSettings => match keycode {
            Keycode::Up => result.focus_up = true,
            Keycode::Down => result.focus_down = true,
            Keycode::Left => result.cycle = -1,
            Keycode::Right => result.cycle = 1,
            Keycode::Return => result.apply = true,
            Keycode::Escape => result.close_settings = true,
            _ => {}
        },
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_depend_on_page() {
        assert!(process_key(Keycode::G, Page::Cockpit).open_settings);
        // G means nothing inside the dialog
        assert!(!process_key(Keycode::G, Page::GraphicsSettings).open_settings);

        assert!(process_key(Keycode::Return, Page::GraphicsSettings).apply);
        assert!(!process_key(Keycode::Return, Page::Cockpit).apply);
    }

    #[test]
    fn test_escape_quits_cockpit_but_closes_dialog() {
        assert!(process_key(Keycode::Escape, Page::Cockpit).quit);
        let in_dialog = process_key(Keycode::Escape, Page::GraphicsSettings);
        assert!(in_dialog.close_settings);
        assert!(!in_dialog.quit);
    }

    #[test]
    fn test_cycle_direction() {
        assert_eq!(process_key(Keycode::Left, Page::GraphicsSettings).cycle, -1);
        assert_eq!(process_key(Keycode::Right, Page::GraphicsSettings).cycle, 1);
    }
}
