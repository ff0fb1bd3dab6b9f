//! Procedural rendering helpers
//!
//! The whole scene is drawn with SDL2 primitives: filled/stroked
//! circles built from rectangle spans and midpoint points, gradients
//! built from 1px strips, and layered low-alpha passes for glow. The
//! canvas blend mode is set to Blend once at startup; every helper here
//! is a pure read of the state it is handed.

use crate::entities::{Bullet, Ship};
use crate::game::types::{
    ARENA_HEIGHT, ARENA_WIDTH, BULLET_HEIGHT, BULLET_WIDTH, DIVIDER_X, FLASH_FRAMES, SHIP_HEIGHT,
    SHIP_WIDTH, WHITE,
};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Fills a circle using horizontal spans (one fill_rect per scanline).
pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    if radius <= 0 {
        return canvas.draw_point(Point::new(cx, cy)).map_err(|e| e.to_string());
    }

    for dy in -radius..=radius {
        let half_width = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        canvas.fill_rect(Rect::new(
            cx - half_width,
            cy + dy,
            (half_width * 2 + 1) as u32,
            1,
        ))?;
    }

    Ok(())
}

/// Strokes a circle outline with the midpoint algorithm.
pub fn draw_circle(
    canvas: &mut Canvas<Window>,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    if radius <= 0 {
        return canvas.draw_point(Point::new(cx, cy)).map_err(|e| e.to_string());
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    let mut points = Vec::with_capacity(radius as usize * 8);
    while x >= y {
        points.extend_from_slice(&[
            Point::new(cx + x, cy + y),
            Point::new(cx + y, cy + x),
            Point::new(cx - y, cy + x),
            Point::new(cx - x, cy + y),
            Point::new(cx - x, cy - y),
            Point::new(cx - y, cy - x),
            Point::new(cx + y, cy - x),
            Point::new(cx + x, cy - y),
        ]);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    canvas.draw_points(points.as_slice()).map_err(|e| e.to_string())
}

/// Fills the whole arena with a vertical three-stop gradient, one 1px
/// strip per row.
pub fn fill_vertical_gradient(
    canvas: &mut Canvas<Window>,
    top: Color,
    mid: Color,
    bottom: Color,
) -> Result<(), String> {
    let height = ARENA_HEIGHT as i32;
    let half = height / 2;

    for y in 0..height {
        let (from, to, t) = if y < half {
            (top, mid, y as f32 / half as f32)
        } else {
            (mid, bottom, (y - half) as f32 / half as f32)
        };
        let color = Color::RGB(
            lerp_channel(from.r, to.r, t),
            lerp_channel(from.g, to.g, t),
            lerp_channel(from.b, to.b, t),
        );
        canvas.set_draw_color(color);
        canvas.fill_rect(Rect::new(0, y, ARENA_WIDTH, 1))?;
    }

    Ok(())
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t) as u8
}

/// The arena divider: widening low-alpha passes around a 1px white
/// core, pulsing against the game clock.
pub fn draw_divider(
    canvas: &mut Canvas<Window>,
    game_time: f32,
    offset: (i32, i32),
) -> Result<(), String> {
    let pulse = (game_time * 0.08).sin() * 0.4 + 0.6;
    let x = DIVIDER_X + offset.0;

    let mut width = 12;
    while width > 0 {
        let glow = pulse / (width as f32 * 0.5);
        let color = Color::RGBA(
            0,
            (180.0 * glow).min(255.0) as u8,
            (255.0 * glow).min(255.0) as u8,
            (glow * 0.3 * 255.0).min(255.0) as u8,
        );
        canvas.set_draw_color(color);
        canvas.fill_rect(Rect::new(x - width, offset.1, (width * 2) as u32, ARENA_HEIGHT))?;
        width -= 2;
    }

    canvas.set_draw_color(WHITE);
    canvas
        .draw_line(Point::new(x, offset.1), Point::new(x, offset.1 + ARENA_HEIGHT as i32))
        .map_err(|e| e.to_string())
}

/// Bullets render as a solid core inside two outset low-alpha halos.
pub fn draw_bullets(
    canvas: &mut Canvas<Window>,
    bullets: &[Bullet],
    color: Color,
    offset: (i32, i32),
) -> Result<(), String> {
    for bullet in bullets {
        let x = bullet.x + offset.0;
        let y = bullet.y + offset.1;

        for (outset, alpha) in [(4, 40), (2, 90)] {
            canvas.set_draw_color(Color::RGBA(color.r, color.g, color.b, alpha));
            canvas.fill_rect(Rect::new(
                x - outset,
                y - outset,
                BULLET_WIDTH + outset as u32 * 2,
                BULLET_HEIGHT + outset as u32 * 2,
            ))?;
        }

        canvas.set_draw_color(color);
        canvas.fill_rect(Rect::new(x, y, BULLET_WIDTH, BULLET_HEIGHT))?;
    }

    Ok(())
}

/// Blits a ship sprite, preceded by the damage-flash overlay while the
/// flash timer is running.
pub fn draw_ship(
    canvas: &mut Canvas<Window>,
    texture: &Texture,
    ship: &Ship,
    flash: i32,
    flash_color: Color,
    offset: (i32, i32),
) -> Result<(), String> {
    let x = ship.x + offset.0;
    let y = ship.y + offset.1;

    if flash > 0 {
        let alpha = (flash * 255 / (FLASH_FRAMES - 2)).min(255) as u8;
        canvas.set_draw_color(Color::RGBA(flash_color.r, flash_color.g, flash_color.b, alpha));
        canvas.fill_rect(Rect::new(x - 5, y - 5, SHIP_WIDTH + 10, SHIP_HEIGHT + 10))?;
    }

    canvas.copy(texture, None, Rect::new(x, y, SHIP_WIDTH, SHIP_HEIGHT))
}
