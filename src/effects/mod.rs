//! Transient visual effects: particle bursts, energy rings, screen shake
//!
//! `EffectSystem` owns the two grow-and-reap pools (particles and rings)
//! plus the screen-shake magnitude. Combat code spawns named composite
//! effects; the frame driver calls `update` exactly once per frame and
//! `render` afterwards.
//!
//! Reaping is snapshot-then-filter: every member is stepped first, then
//! dead members are dropped with a single `retain` pass. Nothing is ever
//! removed from a pool mid-iteration.

mod particle;
mod ring;

pub use particle::Particle;
pub use ring::EnergyRing;

use crate::game::types::{CYAN, NEON_PINK, WHITE};
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Shake magnitude applied on every bullet hit
const HIT_SHAKE: f32 = 12.0;

/// Geometric decay factor per frame
const SHAKE_DECAY: f32 = 0.85;

/// Below this magnitude the shake produces no offset
const SHAKE_THRESHOLD: f32 = 0.5;

pub struct EffectSystem {
    particles: Vec<Particle>,
    rings: Vec<EnergyRing>,
    screen_shake: f32,
}

impl EffectSystem {
    pub fn new() -> Self {
        EffectSystem {
            particles: Vec::new(),
            rings: Vec::new(),
            screen_shake: 0.0,
        }
    }

    /// Step every effect entity, then reap the dead ones.
    ///
    /// Dead entities are guaranteed to be out of the pools by the end of
    /// the frame that killed them.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| p.alive);

        for ring in &mut self.rings {
            ring.update();
        }
        self.rings.retain(|r| r.alive);

        if self.screen_shake > SHAKE_THRESHOLD {
            self.screen_shake *= SHAKE_DECAY;
        }
    }

    /// Draw every live effect. Read-only; never steps anything.
    pub fn render(&self, canvas: &mut Canvas<Window>, offset: (i32, i32)) -> Result<(), String> {
        for ring in &self.rings {
            ring.render(canvas, offset)?;
        }
        for particle in &self.particles {
            particle.render(canvas, offset)?;
        }
        Ok(())
    }

    /// Radial particle burst plus a colored and a white shock ring.
    pub fn spawn_explosion(&mut self, x: f32, y: f32, color: Color, count: usize) {
        let mut rng = rand::thread_rng();

        self.rings.push(EnergyRing::new(x, y, color, 80.0, 4.0));
        self.rings.push(EnergyRing::new(x, y, WHITE, 50.0, 6.0));

        for _ in 0..count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(2.0..7.0);
            let size = rng.gen_range(2.0..6.0);
            let lifetime = rng.gen_range(25..=50);
            self.particles.push(Particle::new(
                x,
                y,
                color,
                angle.cos() * speed,
                angle.sin() * speed,
                size,
                lifetime,
                0.08,
            ));
        }
    }

    /// Bullet impact: screen shake, a tight ring, and a reduced burst.
    pub fn spawn_hit_effect(&mut self, x: f32, y: f32, color: Color) {
        self.screen_shake = HIT_SHAKE;
        self.rings.push(EnergyRing::new(x, y, color, 60.0, 5.0));
        self.spawn_explosion(x, y, color, 20);
    }

    /// Multi-stage end-of-match burst centered on the loser: five
    /// staggered rings and four successive 25-particle waves at
    /// increasing speed, cycling a fixed 4-color palette.
    pub fn spawn_victory_explosion(&mut self, x: f32, y: f32, color: Color) {
        for i in 0..5 {
            let max_radius = 30.0 + i as f32 * 40.0 + 60.0;
            self.rings.push(EnergyRing::new(x, y, color, max_radius, 3.0 + i as f32));
        }

        let palette = [color, CYAN, NEON_PINK, WHITE];
        for wave in 0..4 {
            for i in 0..25 {
                let angle = (i as f32 / 25.0) * std::f32::consts::TAU + wave as f32 * 0.3;
                let speed = 4.0 + wave as f32 * 2.5;
                let lifetime = 60 + wave * 15;
                self.particles.push(Particle::new(
                    x,
                    y,
                    palette[wave as usize % 4],
                    angle.cos() * speed,
                    angle.sin() * speed,
                    5.0,
                    lifetime,
                    0.0,
                ));
            }
        }
    }

    /// This frame's randomized camera offset. Zero below the activity
    /// threshold. Render-only; never folded back into entity positions.
    pub fn shake_offset(&self) -> (i32, i32) {
        if self.screen_shake <= SHAKE_THRESHOLD {
            return (0, 0);
        }
        let mut rng = rand::thread_rng();
        let dx = (rng.gen_range(0.0..1.0f32) - 0.5) * self.screen_shake;
        let dy = (rng.gen_range(0.0..1.0f32) - 0.5) * self.screen_shake;
        (dx as i32, dy as i32)
    }

    /// Clear both pools and the shake (match reset).
    pub fn clear(&mut self) {
        self.particles.clear();
        self.rings.clear();
        self.screen_shake = 0.0;
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    pub fn screen_shake(&self) -> f32 {
        self.screen_shake
    }
}

impl Default for EffectSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::RED;

    #[test]
    fn test_explosion_pool_accounting() {
        let mut effects = EffectSystem::new();
        effects.spawn_explosion(100.0, 100.0, RED, 25);

        assert_eq!(effects.particle_count(), 25);
        assert_eq!(effects.ring_count(), 2);
    }

    #[test]
    fn test_pools_drain_after_lifetimes_elapse() {
        let mut effects = EffectSystem::new();
        effects.spawn_explosion(100.0, 100.0, RED, 25);

        // Longest particle lifetime is 50 frames; the 80-radius ring at
        // speed 4 outlives everything else here (about 19 frames).
        for _ in 0..51 {
            effects.update();
        }

        assert_eq!(effects.particle_count(), 0);
        assert_eq!(effects.ring_count(), 0);
    }

    #[test]
    fn test_hit_effect_sets_shake_and_spawns() {
        let mut effects = EffectSystem::new();
        effects.spawn_hit_effect(50.0, 50.0, RED);

        assert_eq!(effects.screen_shake(), 12.0);
        assert_eq!(effects.particle_count(), 20);
        assert_eq!(effects.ring_count(), 3); // Impact ring + 2 explosion rings
    }

    #[test]
    fn test_victory_explosion_counts() {
        let mut effects = EffectSystem::new();
        effects.spawn_victory_explosion(450.0, 250.0, RED);

        assert_eq!(effects.particle_count(), 100);
        assert_eq!(effects.ring_count(), 5);
    }

    #[test]
    fn test_shake_decays_geometrically() {
        let mut effects = EffectSystem::new();
        effects.spawn_hit_effect(0.0, 0.0, RED);

        effects.update();
        // One decay step on top of the spawn-frame magnitude
        assert!((effects.screen_shake() - 12.0 * 0.85).abs() < 1e-4);

        for _ in 0..60 {
            effects.update();
        }
        assert!(effects.screen_shake() <= 0.5);
        assert_eq!(effects.shake_offset(), (0, 0));
    }

    #[test]
    fn test_shake_offset_bounded_by_magnitude() {
        let mut effects = EffectSystem::new();
        effects.spawn_hit_effect(0.0, 0.0, RED);

        for _ in 0..100 {
            let (dx, dy) = effects.shake_offset();
            assert!(dx.abs() <= 6 && dy.abs() <= 6);
        }
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut effects = EffectSystem::new();
        effects.spawn_victory_explosion(0.0, 0.0, RED);
        effects.spawn_hit_effect(0.0, 0.0, RED);

        effects.clear();
        assert_eq!(effects.particle_count(), 0);
        assert_eq!(effects.ring_count(), 0);
        assert_eq!(effects.screen_shake(), 0.0);
    }

    #[test]
    fn test_updating_empty_pools_is_safe() {
        let mut effects = EffectSystem::new();
        effects.update();
        effects.update();
        assert_eq!(effects.particle_count(), 0);
    }
}
