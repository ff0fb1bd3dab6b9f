//! Animated space backdrop: gradient, nebula clouds, starfield and
//! shooting stars
//!
//! Two pool patterns live here on purpose. Stars and nebula clouds wrap
//! horizontally forever (infinite lifecycle, fixed population). Shooting
//! stars are a fixed pool of reusable slots, each inactive until a
//! once-per-frame probabilistic spawn claims it, self-deactivating on
//! timeout or leaving bounds.

use crate::game::types::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::render::{fill_circle, fill_vertical_gradient};
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Number of reusable shooting-star slots
const SHOOTING_STAR_SLOTS: usize = 3;

/// Per-frame spawn probability when a free slot exists
const SHOOTING_STAR_CHANCE: f64 = 0.01;

/// A background star on one of three parallax layers.
///
/// Drifts leftward forever, wrapping back to the right edge; twinkles
/// sinusoidally against the shared game clock.
pub struct Star {
    layer: u32,
    x: f32,
    y: f32,
    speed: f32,
    size: f32,
    brightness: f32,
    twinkle_speed: f32,
    twinkle_offset: f32,
}

impl Star {
    pub fn new(layer: u32, rng: &mut impl Rng) -> Self {
        Star {
            layer,
            x: rng.gen_range(0.0..ARENA_WIDTH as f32),
            y: rng.gen_range(0.0..ARENA_HEIGHT as f32),
            speed: rng.gen_range(0.3..1.3) * layer as f32,
            size: (rng.gen_range(0.0..2.0) + layer as f32 * 0.5).max(1.0),
            brightness: rng.gen_range(150.0..255.0),
            twinkle_speed: rng.gen_range(0.05..0.2),
            twinkle_offset: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    pub fn update(&mut self, rng: &mut impl Rng) {
        self.x -= self.speed;
        if self.x < -5.0 {
            self.x = ARENA_WIDTH as f32 + rng.gen_range(0.0..50.0);
            self.y = rng.gen_range(0.0..ARENA_HEIGHT as f32);
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, game_time: f32) -> Result<(), String> {
        let twinkle = (game_time * self.twinkle_speed + self.twinkle_offset).sin() * 0.4 + 0.6;
        let level = (self.brightness * twinkle).min(255.0) as u8;
        let color = Color::RGBA(level, level, level, (twinkle * 255.0) as u8);
        fill_circle(canvas, self.x as i32, self.y as i32, self.size as i32, color)
    }

    #[cfg(test)]
    fn x(&self) -> f32 {
        self.x
    }
}

/// One reusable shooting-star slot.
pub struct ShootingStar {
    active: bool,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    length: f32,
    lifetime: i32,
}

impl ShootingStar {
    pub fn new() -> Self {
        ShootingStar {
            active: false,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            length: 0.0,
            lifetime: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Claim this slot: streak from the top-right region down and to the
    /// left at a shallow angle.
    pub fn spawn(&mut self, rng: &mut impl Rng) {
        self.active = true;
        self.x = ARENA_WIDTH as f32 / 2.0 + rng.gen_range(0.0..ARENA_WIDTH as f32 / 2.0);
        self.y = rng.gen_range(0.0..ARENA_HEIGHT as f32 / 3.0);
        let speed = rng.gen_range(15.0..25.0f32);
        let angle = rng.gen_range(0.2..0.7f32);
        self.vx = -speed * angle.cos();
        self.vy = speed * angle.sin();
        self.length = rng.gen_range(30.0..60.0);
        self.lifetime = 60;
    }

    /// Self-deactivates on timeout or once fully off screen.
    pub fn update(&mut self) {
        if !self.active {
            return;
        }

        self.x += self.vx;
        self.y += self.vy;
        self.lifetime -= 1;
        if self.lifetime <= 0 || self.x < -50.0 || self.y > ARENA_HEIGHT as f32 + 50.0 {
            self.active = false;
        }
    }

    /// Fading point trail stretched backward along the velocity.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if !self.active {
            return Ok(());
        }

        let alpha = self.lifetime as f32 / 60.0;
        let steps = self.length as i32;
        for i in 0..steps {
            let t = i as f32 / self.length;
            let px = self.x - self.vx * t * 0.5;
            let py = self.y - self.vy * t * 0.5;
            let level = (255.0 * (1.0 - t) * alpha) as u8;
            let size = (3.0 * (1.0 - t)).max(1.0) as i32;
            let color = Color::RGBA(level, level, level, (alpha * 255.0) as u8);
            fill_circle(canvas, px as i32, py as i32, size, color)?;
        }

        Ok(())
    }
}

/// A soft drifting color blob behind the starfield.
struct NebulaCloud {
    x: f32,
    y: f32,
    size: f32,
    speed: f32,
    hue: f32,
}

impl NebulaCloud {
    fn new(rng: &mut impl Rng) -> Self {
        NebulaCloud {
            x: rng.gen_range(0.0..ARENA_WIDTH as f32),
            y: rng.gen_range(0.0..ARENA_HEIGHT as f32),
            size: rng.gen_range(100.0..250.0),
            speed: rng.gen_range(0.1..0.4),
            hue: rng.gen_range(200.0..260.0),
        }
    }

    fn update(&mut self, rng: &mut impl Rng) {
        self.x -= self.speed;
        if self.x < -self.size {
            self.x = ARENA_WIDTH as f32 + self.size;
            self.y = rng.gen_range(0.0..ARENA_HEIGHT as f32);
        }
    }

    /// Approximates a radial gradient with a handful of concentric
    /// low-alpha fills.
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let (r, g, b) = hsl_to_rgb(self.hue, 0.7, 0.2);
        for i in 0..6 {
            let radius = self.size * (1.0 - i as f32 / 6.0);
            fill_circle(
                canvas,
                self.x as i32,
                self.y as i32,
                radius as i32,
                Color::RGBA(r, g, b, 8),
            )?;
        }
        Ok(())
    }
}

/// Converts HSL (hue in degrees) to 8-bit RGB.
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h_prime = (hue / 60.0) % 6.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    (
        ((r1 + m) * 255.0) as u8,
        ((g1 + m) * 255.0) as u8,
        ((b1 + m) * 255.0) as u8,
    )
}

/// The whole animated backdrop, drawn first in every phase.
pub struct Background {
    stars: Vec<Star>,
    shooting_stars: Vec<ShootingStar>,
    clouds: Vec<NebulaCloud>,
}

impl Background {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();

        let mut stars = Vec::new();
        for _ in 0..60 {
            stars.push(Star::new(1, &mut rng));
        }
        for _ in 0..35 {
            stars.push(Star::new(2, &mut rng));
        }
        for _ in 0..20 {
            stars.push(Star::new(3, &mut rng));
        }

        let shooting_stars = (0..SHOOTING_STAR_SLOTS).map(|_| ShootingStar::new()).collect();
        let clouds = (0..8).map(|_| NebulaCloud::new(&mut rng)).collect();

        Background {
            stars,
            shooting_stars,
            clouds,
        }
    }

    /// Advance drift, twinkle phases are derived at render time from the
    /// game clock. Rolls at most one shooting-star spawn per frame.
    pub fn update(&mut self) {
        let mut rng = rand::thread_rng();

        for cloud in &mut self.clouds {
            cloud.update(&mut rng);
        }
        for star in &mut self.stars {
            star.update(&mut rng);
        }

        if rng.gen_bool(SHOOTING_STAR_CHANCE) {
            if let Some(slot) = self.shooting_stars.iter_mut().find(|s| !s.is_active()) {
                slot.spawn(&mut rng);
            }
        }

        for star in &mut self.shooting_stars {
            star.update();
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, game_time: f32) -> Result<(), String> {
        fill_vertical_gradient(
            canvas,
            Color::RGB(5, 5, 21),
            Color::RGB(10, 10, 32),
            Color::RGB(5, 5, 21),
        )?;

        for cloud in &self.clouds {
            cloud.render(canvas)?;
        }
        for star in &self.stars {
            star.render(canvas, game_time)?;
        }
        for star in &self.shooting_stars {
            star.render(canvas)?;
        }

        Ok(())
    }
}
