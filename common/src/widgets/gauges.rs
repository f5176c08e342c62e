//! Cockpit page rendering: dials, needles, gear cluster and value labels.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::{GREEN, ORANGE, WHITE};
use crate::panel::{Panel, RPM_MAX, SPEED_MAX_KMH, rpm_needle_radians, speed_needle_radians};
use crate::styles::{
    CENTERED,
    INDICATOR_FONT,
    LABEL_FONT,
    LABEL_STYLE_LIGHT,
    LABEL_STYLE_WHITE,
    LEFT_ALIGNED,
    RIGHT_ALIGNED,
    VALUE_FONT,
};
use super::primitives::{draw_dial_face, draw_dial_ticks, draw_needle};

/// Major tick spacing of the speedometer scale in km/h.
const SPEED_TICK_STEP_KMH: f32 = 20.0;

/// Major tick spacing of the RPM scale.
const RPM_TICK_STEP: f32 = 500.0;

/// Draw the whole cockpit page from the panel's displayed state.
pub fn draw_cockpit<D>(
    display: &mut D,
    panel: &Panel,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let layout = panel.layout();

    if panel.options.analog {
        // RPM gauge
        draw_dial_face(display, layout.rpm_dial, layout.rpm_pivot, WHITE);
        draw_dial_ticks(
            display,
            layout.rpm_pivot,
            rpm_tick_angles(),
        );
        Text::with_text_style(
            "rpm",
            Point::new(layout.rpm_pivot.x, layout.rpm_dial.y + 40),
            LABEL_STYLE_WHITE,
            CENTERED,
        )
        .draw(display)
        .ok();

        // Speedometer, drawn second so it overlaps the RPM dial
        draw_dial_face(display, layout.speed_dial, layout.speed_pivot, WHITE);
        draw_dial_ticks(
            display,
            layout.speed_pivot,
            speed_tick_angles(),
        );
        Text::with_text_style(
            "km/h",
            Point::new(layout.speed_pivot.x, layout.speed_dial.y + 40),
            LABEL_STYLE_WHITE,
            CENTERED,
        )
        .draw(display)
        .ok();

        // Gear indicator cluster inside the RPM dial
        let letters = [
            ("R", layout.reverse_label, panel.reverse_color),
            ("N", layout.neutral_label, panel.neutral_color),
            ("M", layout.manual_label, panel.manual_color),
            ("D", layout.drive_label, panel.drive_color),
        ];
        for (letter, position, color) in letters {
            Text::with_text_style(letter, position, MonoTextStyle::new(INDICATOR_FONT, color), LEFT_ALIGNED)
                .draw(display)
                .ok();
        }
        Text::with_text_style(
            panel.gear_number.as_str(),
            layout.gear_number,
            MonoTextStyle::new(LABEL_FONT, GREEN),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(
            panel.odometer_text.as_str(),
            layout.odometer_text,
            LABEL_STYLE_LIGHT,
            RIGHT_ALIGNED,
        )
        .draw(display)
        .ok();

        draw_needle(display, layout.rpm_pivot, panel.rpm_needle, ORANGE);
        draw_needle(display, layout.speed_pivot, panel.speed_needle, ORANGE);
    }

    if panel.options.digital {
        Text::with_text_style(
            panel.speed_text.as_str(),
            layout.speed_text,
            MonoTextStyle::new(VALUE_FONT, panel.speed_color),
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(
            panel.mileage_text.as_str(),
            layout.mileage_text,
            LABEL_STYLE_LIGHT,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(panel.rpm_text.as_str(), layout.rpm_text, LABEL_STYLE_LIGHT, LEFT_ALIGNED)
            .draw(display)
            .ok();

        Text::with_text_style(panel.gear_text.as_str(), layout.gear_text, LABEL_STYLE_LIGHT, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    if panel.options.fuel {
        Text::with_text_style(
            panel.fuel_per_100km_text.as_str(),
            layout.fuel_per_100km_text,
            LABEL_STYLE_LIGHT,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(
            panel.fuel_per_hour_text.as_str(),
            layout.fuel_per_hour_text,
            LABEL_STYLE_LIGHT,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();

        Text::with_text_style(
            panel.total_fuel_text.as_str(),
            layout.total_fuel_text,
            LABEL_STYLE_LIGHT,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}

fn speed_tick_angles() -> impl Iterator<Item = f32> {
    let count = (SPEED_MAX_KMH / SPEED_TICK_STEP_KMH) as i32;
    (0..=count).map(|i| speed_needle_radians(i as f32 * SPEED_TICK_STEP_KMH))
}

fn rpm_tick_angles() -> impl Iterator<Item = f32> {
    let count = (RPM_MAX / RPM_TICK_STEP) as i32;
    (0..=count).map(|i| rpm_needle_radians(i as f32 * RPM_TICK_STEP))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::RPM_PER_DEGREE;

    #[test]
    fn test_tick_angles_span_the_scale() {
        let speed: Vec<f32> = speed_tick_angles().collect();
        assert_eq!(speed.len(), 14); // 0..=260 in 20 km/h steps
        assert_eq!(speed[0], speed_needle_radians(0.0));
        assert_eq!(*speed.last().unwrap(), speed_needle_radians(SPEED_MAX_KMH));

        let rpm: Vec<f32> = rpm_tick_angles().collect();
        assert_eq!(rpm.len(), 16); // 0..=7500 in 500 rpm steps
        // One degree of needle travel per RPM_PER_DEGREE units
        let step_deg = RPM_TICK_STEP / RPM_PER_DEGREE;
        let delta = (rpm[0] - rpm[1]).to_degrees();
        assert!((delta - step_deg).abs() < 1e-3);
    }
}
