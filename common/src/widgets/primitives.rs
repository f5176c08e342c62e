//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use micromath::F32Ext;

use crate::colors::DIM_GRAY;
use crate::config::{DIAL_SIZE, NEEDLE_LENGTH, TICK_LENGTH};

/// Draw a dial face: rim circle plus a filled pivot hub.
pub fn draw_dial_face<D>(
    display: &mut D,
    top_left: Point,
    pivot: Point,
    rim_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::new(top_left, DIAL_SIZE as u32)
        .into_styled(PrimitiveStyle::with_stroke(rim_color, 2))
        .draw(display)
        .ok();

    Circle::with_center(pivot, 10)
        .into_styled(PrimitiveStyle::with_fill(rim_color))
        .draw(display)
        .ok();
}

/// Draw tick marks on a dial rim at the given needle angles.
///
/// Ticks are generated from the same angle mapping as the needle, so the
/// scale cannot drift away from the needle travel.
pub fn draw_dial_ticks<D>(
    display: &mut D,
    pivot: Point,
    angles: impl Iterator<Item = f32>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let outer = (DIAL_SIZE / 2 - 2) as f32;
    let inner = outer - TICK_LENGTH as f32;
    let style = PrimitiveStyle::with_stroke(DIM_GRAY, 1);

    for radians in angles {
        let (sin, cos) = (radians.sin(), radians.cos());
        // Screen y grows downward, so a counter-clockwise angle negates y
        let from = Point::new(pivot.x + (cos * inner) as i32, pivot.y - (sin * inner) as i32);
        let to = Point::new(pivot.x + (cos * outer) as i32, pivot.y - (sin * outer) as i32);
        Line::new(from, to).into_styled(style).draw(display).ok();
    }
}

/// Draw a needle from the pivot at the given angle in radians.
pub fn draw_needle<D>(
    display: &mut D,
    pivot: Point,
    radians: f32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (sin, cos) = (radians.sin(), radians.cos());
    let tip = Point::new(
        pivot.x + (cos * NEEDLE_LENGTH as f32) as i32,
        pivot.y - (sin * NEEDLE_LENGTH as f32) as i32,
    );
    Line::new(pivot, tip)
        .into_styled(PrimitiveStyle::with_stroke(color, 3))
        .draw(display)
        .ok();
}

/// Fill a menu row background rectangle with 2px inset.
pub fn draw_row_background<D>(
    display: &mut D,
    top_left: Point,
    width: u32,
    height: u32,
    bg_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if width < 4 || height < 4 {
        return;
    }
    Rectangle::new(
        Point::new(top_left.x + 2, top_left.y + 2),
        Size::new(width - 4, height - 4),
    )
    .into_styled(PrimitiveStyle::with_fill(bg_color))
    .draw(display)
    .ok();
}
