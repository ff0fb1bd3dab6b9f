//! Control selection screen
//!
//! First screen shown: the red pilot picks keyboard or mouse controls.
//! Two bordered option boxes under a floating neon title.

use crate::game::types::{ARENA_WIDTH, CYAN, ELECTRIC_BLUE, NEON_PINK, WHITE};
use crate::text::{draw_neon_text, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub fn draw_control_select(canvas: &mut Canvas<Window>, game_time: f32) -> Result<(), String> {
    let center_x = ARENA_WIDTH as i32 / 2;
    let float = ((game_time * 0.05).sin() * 6.0) as i32;

    draw_neon_text(canvas, "SELECT CONTROLS", center_x, 70 + float, CYAN, 4)?;
    draw_text_centered(
        canvas,
        "RED PILOT - CHOOSE YOUR WEAPON",
        center_x,
        130,
        Color::RGB(180, 180, 200),
        2,
    )?;

    draw_option_box(
        canvas,
        center_x,
        190,
        NEON_PINK,
        "1 - KEYBOARD",
        "ARROW KEYS + RIGHT CTRL",
    )?;
    draw_option_box(
        canvas,
        center_x,
        300,
        ELECTRIC_BLUE,
        "2 - MOUSE",
        "MOVE TO STEER + CLICK TO FIRE",
    )?;

    // Blinking prompt
    if (game_time * 0.1).sin() > -0.2 {
        draw_text_centered(canvas, "PRESS 1 OR 2", center_x, 430, WHITE, 2)?;
    }

    Ok(())
}

fn draw_option_box(
    canvas: &mut Canvas<Window>,
    center_x: i32,
    y: i32,
    accent: Color,
    label: &str,
    detail: &str,
) -> Result<(), String> {
    let width = 440u32;
    let height = 80u32;
    let x = center_x - width as i32 / 2;

    canvas.set_draw_color(Color::RGBA(10, 10, 30, 200));
    canvas.fill_rect(Rect::new(x, y, width, height))?;

    canvas.set_draw_color(accent);
    canvas.draw_rect(Rect::new(x, y, width, height))?;
    canvas.draw_rect(Rect::new(x + 2, y + 2, width - 4, height - 4))?;

    draw_text_centered(canvas, label, center_x, y + 16, accent, 3)?;
    draw_text_centered(canvas, detail, center_x, y + 52, Color::RGB(160, 160, 180), 1)?;

    Ok(())
}
