//! Expanding energy ring effect

use crate::render::draw_circle;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// An expanding circular outline used for hits and explosions.
///
/// Grows from a 5px seed radius by `speed` per frame and dies once it
/// passes `max_radius`. Both stroke alpha and line weight fade as the
/// ring approaches its maximum.
pub struct EnergyRing {
    pub x: f32,
    pub y: f32,
    color: Color,
    radius: f32,
    max_radius: f32,
    speed: f32,
    pub alive: bool,
}

impl EnergyRing {
    pub fn new(x: f32, y: f32, color: Color, max_radius: f32, speed: f32) -> Self {
        EnergyRing {
            x,
            y,
            color,
            radius: 5.0,
            max_radius,
            speed,
            alive: true,
        }
    }

    /// Grow one step. No-op once dead.
    pub fn update(&mut self) {
        if !self.alive {
            return;
        }

        self.radius += self.speed;
        if self.radius > self.max_radius {
            self.alive = false;
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        if !self.alive {
            return Ok(());
        }

        let fade = 1.0 - self.radius / self.max_radius;
        let color = Color::RGBA(self.color.r, self.color.g, self.color.b, (255.0 * fade) as u8);

        // Thicker stroke while young: up to 3 concentric passes
        let passes = (3.0 * fade).max(1.0) as i32;
        for i in 0..passes {
            draw_circle(
                canvas,
                self.x as i32 + offset.0,
                self.y as i32 + offset.1,
                self.radius as i32 + i,
                color,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::WHITE;

    #[test]
    fn test_ring_grows_by_speed() {
        let mut ring = EnergyRing::new(0.0, 0.0, WHITE, 80.0, 4.0);
        ring.update();
        assert!((ring.radius - 9.0).abs() < 1e-5);
        assert!(ring.alive);
    }

    #[test]
    fn test_ring_dies_past_max_radius() {
        let mut ring = EnergyRing::new(0.0, 0.0, WHITE, 20.0, 6.0);
        // 5 -> 11 -> 17 -> 23 (> 20, dead)
        ring.update();
        ring.update();
        assert!(ring.alive);
        ring.update();
        assert!(!ring.alive);
    }

    #[test]
    fn test_stepping_dead_ring_is_noop() {
        let mut ring = EnergyRing::new(0.0, 0.0, WHITE, 6.0, 10.0);
        ring.update();
        assert!(!ring.alive);

        let radius_at_death = ring.radius;
        ring.update();
        assert_eq!(ring.radius, radius_at_death);
        assert!(!ring.alive);
    }
}
