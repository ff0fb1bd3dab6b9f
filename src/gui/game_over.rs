//! Winner screen
//!
//! Drawn over the final frame of the arena (the victory burst keeps
//! animating underneath): a pulsing banner box naming the winner, plus
//! rematch and quit prompts.

use crate::game::types::{ARENA_WIDTH, Side, WHITE};
use crate::text::{draw_neon_text, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub fn draw_game_over(
    canvas: &mut Canvas<Window>,
    winner: Side,
    game_time: f32,
) -> Result<(), String> {
    let center_x = ARENA_WIDTH as i32 / 2;
    let accent = winner.color();
    let pulse = (game_time * 0.15).sin() * 0.3 + 0.7;

    let banner = match winner {
        Side::Yellow => "YELLOW WINS!",
        Side::Red => "RED WINS!",
    };

    // Banner box with a pulsing border
    let width = 520u32;
    let height = 120u32;
    let x = center_x - width as i32 / 2;
    let y = 140;

    canvas.set_draw_color(Color::RGBA(5, 5, 20, 220));
    canvas.fill_rect(Rect::new(x, y, width, height))?;

    let border = Color::RGB(
        (accent.r as f32 * pulse) as u8,
        (accent.g as f32 * pulse) as u8,
        (accent.b as f32 * pulse) as u8,
    );
    canvas.set_draw_color(border);
    canvas.draw_rect(Rect::new(x, y, width, height))?;
    canvas.draw_rect(Rect::new(x + 3, y + 3, width - 6, height - 6))?;

    draw_neon_text(canvas, banner, center_x, y + 40, accent, 5)?;

    if (game_time * 0.1).sin() > -0.2 {
        draw_text_centered(canvas, "R - REMATCH", center_x, 320, WHITE, 2)?;
    }
    draw_text_centered(
        canvas,
        "ESC - BACK TO TITLE",
        center_x,
        360,
        Color::RGB(160, 160, 180),
        2,
    )?;

    Ok(())
}
