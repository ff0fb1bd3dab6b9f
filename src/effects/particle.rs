//! Debris particle for explosions and hit sparks

use crate::render::fill_circle;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A single explosion particle.
///
/// Particles drift under light gravity with a little drag, shrink
/// linearly with remaining lifetime, and fade out. `update` mutates,
/// `render` only reads; the frame driver composes them as
/// update-all-then-render-all.
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    color: Color,
    size: f32,
    original_size: f32,
    lifetime: i32,
    max_lifetime: i32,
    gravity: f32,
    pub alive: bool,
}

impl Particle {
    pub fn new(
        x: f32,
        y: f32,
        color: Color,
        vx: f32,
        vy: f32,
        size: f32,
        lifetime: i32,
        gravity: f32,
    ) -> Self {
        Particle {
            x,
            y,
            vx,
            vy,
            color,
            size,
            original_size: size,
            lifetime,
            max_lifetime: lifetime,
            gravity,
            alive: true,
        }
    }

    /// Advance one frame. Stepping a dead particle is a no-op, so a
    /// particle can never be resurrected by an extra update call.
    pub fn update(&mut self) {
        if !self.alive {
            return;
        }

        self.x += self.vx;
        self.y += self.vy;
        self.vy += self.gravity;
        self.vx *= 0.99;
        self.vy *= 0.99;
        self.lifetime -= 1;

        // Size shrinks linearly with remaining lifetime
        self.size = self.original_size * self.lifetime as f32 / self.max_lifetime as f32;

        if self.lifetime <= 0 {
            self.alive = false;
        }
    }

    /// Draw as a fading filled circle. Skipped below the visibility
    /// threshold so near-dead particles don't render as stray pixels.
    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        if !self.alive || self.size <= 0.5 {
            return Ok(());
        }

        let alpha = (255.0 * self.lifetime as f32 / self.max_lifetime as f32) as u8;
        let color = Color::RGBA(self.color.r, self.color.g, self.color.b, alpha);
        fill_circle(
            canvas,
            self.x as i32 + offset.0,
            self.y as i32 + offset.1,
            self.size as i32,
            color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_moves_and_shrinks() {
        let mut p = Particle::new(10.0, 10.0, Color::RGB(255, 0, 0), 2.0, 0.0, 4.0, 10, 0.0);
        p.update();
        assert!(p.x > 10.0);
        assert!((p.size - 4.0 * 9.0 / 10.0).abs() < 1e-5);
        assert!(p.alive);
    }

    #[test]
    fn test_gravity_pulls_downward() {
        let mut p = Particle::new(0.0, 0.0, Color::RGB(255, 0, 0), 0.0, 0.0, 3.0, 30, 0.08);
        p.update();
        p.update();
        assert!(p.y > 0.0);
    }

    #[test]
    fn test_particle_dies_at_end_of_lifetime() {
        let mut p = Particle::new(0.0, 0.0, Color::RGB(255, 0, 0), 1.0, 1.0, 3.0, 5, 0.0);
        for _ in 0..5 {
            p.update();
        }
        assert!(!p.alive);
    }

    #[test]
    fn test_stepping_dead_particle_is_noop() {
        let mut p = Particle::new(0.0, 0.0, Color::RGB(255, 0, 0), 1.0, 0.0, 3.0, 1, 0.0);
        p.update();
        assert!(!p.alive);

        let x_after_death = p.x;
        p.update();
        p.update();
        assert!(!p.alive);
        assert_eq!(p.x, x_after_death);
    }
}
