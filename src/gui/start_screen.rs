//! Title screen
//!
//! Floating neon title, both ship sprites bobbing on offset sine waves,
//! a blinking start prompt and a per-scheme controls summary.

use crate::game::types::{
    ARENA_WIDTH, CYAN, ControlScheme, NEON_PINK, RED, SHIP_HEIGHT, SHIP_WIDTH, WHITE, YELLOW,
};
use crate::text::{draw_neon_text, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

pub fn draw_start_screen(
    canvas: &mut Canvas<Window>,
    yellow_texture: &Texture,
    red_texture: &Texture,
    scheme: ControlScheme,
    game_time: f32,
) -> Result<(), String> {
    let center_x = ARENA_WIDTH as i32 / 2;
    let float = ((game_time * 0.05).sin() * 8.0) as i32;

    draw_neon_text(canvas, "NEON", center_x, 60 + float, CYAN, 6)?;
    draw_neon_text(canvas, "SPACE BATTLE", center_x, 120 + float, NEON_PINK, 5)?;

    // Ship previews bob on offset waves
    let yellow_bob = ((game_time * 0.07).sin() * 10.0) as i32;
    let red_bob = ((game_time * 0.07 + 2.0).sin() * 10.0) as i32;
    canvas.copy(
        yellow_texture,
        None,
        Rect::new(center_x - 200, 240 + yellow_bob, SHIP_WIDTH, SHIP_HEIGHT),
    )?;
    canvas.copy(
        red_texture,
        None,
        Rect::new(center_x + 200 - SHIP_WIDTH as i32, 240 + red_bob, SHIP_WIDTH, SHIP_HEIGHT),
    )?;

    draw_text_centered(canvas, "YELLOW", center_x - 200 + SHIP_WIDTH as i32 / 2, 300, YELLOW, 2)?;
    draw_text_centered(canvas, "RED", center_x + 200 - SHIP_WIDTH as i32 / 2, 300, RED, 2)?;

    if (game_time * 0.1).sin() > -0.2 {
        draw_neon_text(canvas, "PRESS SPACE TO START", center_x, 350, WHITE, 3)?;
    }

    let red_controls = match scheme {
        ControlScheme::Keyboard => "RED: ARROWS + RIGHT CTRL",
        ControlScheme::Mouse => "RED: MOUSE + CLICK",
    };
    draw_text_centered(
        canvas,
        "YELLOW: WASD + LEFT CTRL",
        center_x,
        410,
        Color::RGB(160, 160, 180),
        1,
    )?;
    draw_text_centered(canvas, red_controls, center_x, 428, Color::RGB(160, 160, 180), 1)?;
    draw_text_centered(canvas, "C - CHANGE CONTROLS", center_x, 460, Color::RGB(120, 120, 140), 1)?;

    Ok(())
}
