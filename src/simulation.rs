//! Match simulator: the fixed-step combat core
//!
//! All gameplay state lives in the explicit `MatchState` struct and is
//! advanced by pure-ish update functions, so the whole combat loop is
//! unit-testable without a window or canvas. Each call to `advance` is
//! exactly one fixed unit step; there is no delta-time scaling.

use crate::collision::entities_collide;
use crate::effects::EffectSystem;
use crate::entities::{Bullet, Ship};
use crate::game::types::{
    ARENA_HEIGHT, ARENA_WIDTH, BULLET_HEIGHT, BULLET_VEL, BULLET_WIDTH, ControlScheme, DIVIDER_GAP,
    DIVIDER_X, FLASH_FRAMES, MAX_BULLETS, MAX_HEALTH, MOUSE_DEADZONE, RED, RED_SPAWN, SHIP_HEIGHT,
    SHIP_VEL, SHIP_WIDTH, Side, SimResult, YELLOW, YELLOW_SPAWN,
};
use crate::input_system::InputSnapshot;

/// Left-most legal x for the red ship (right of the divider gap)
const RED_LEFT_LIMIT: i32 = ARENA_WIDTH as i32 / 2 + DIVIDER_GAP;

/// Complete state of one match. Recreated from scratch on every reset.
pub struct MatchState {
    pub yellow_ship: Ship,
    pub red_ship: Ship,
    pub yellow_bullets: Vec<Bullet>,
    pub red_bullets: Vec<Bullet>,
    pub yellow_health: i32,
    pub red_health: i32,
    pub yellow_flash: i32,
    pub red_flash: i32,
}

impl MatchState {
    /// Fresh match: ships at their spawn points, full health, no bullets.
    pub fn new() -> Self {
        MatchState {
            yellow_ship: Ship::new(YELLOW_SPAWN.0, YELLOW_SPAWN.1),
            red_ship: Ship::new(RED_SPAWN.0, RED_SPAWN.1),
            yellow_bullets: Vec::new(),
            red_bullets: Vec::new(),
            yellow_health: MAX_HEALTH,
            red_health: MAX_HEALTH,
            yellow_flash: 0,
            red_flash: 0,
        }
    }

    /// Edge-triggered fire action, invoked from input handling rather
    /// than polled. Returns false (and spawns nothing) when the side is
    /// at its ammo cap.
    pub fn fire(&mut self, side: Side) -> bool {
        match side {
            Side::Yellow => {
                if self.yellow_bullets.len() >= MAX_BULLETS {
                    return false;
                }
                // Muzzle: right edge, vertically centered
                self.yellow_bullets.push(Bullet::new(
                    self.yellow_ship.x + SHIP_WIDTH as i32,
                    self.yellow_ship.y + SHIP_HEIGHT as i32 / 2 - 3,
                ));
            }
            Side::Red => {
                if self.red_bullets.len() >= MAX_BULLETS {
                    return false;
                }
                // Muzzle: left edge, bullet spawns fully outside the hull
                self.red_bullets.push(Bullet::new(
                    self.red_ship.x - BULLET_WIDTH as i32,
                    self.red_ship.y + SHIP_HEIGHT as i32 / 2 - 3,
                ));
            }
        }
        true
    }

    /// Remaining shots before the side hits its cap.
    pub fn ammo(&self, side: Side) -> usize {
        match side {
            Side::Yellow => MAX_BULLETS - self.yellow_bullets.len(),
            Side::Red => MAX_BULLETS - self.red_bullets.len(),
        }
    }

    /// Advance the match by one fixed step.
    ///
    /// Order matters and is part of the contract: flash timers, then
    /// movement, then bullet advancement and collisions, then the
    /// terminal check. Red health is checked first, so if both sides
    /// reach zero in the same pass red is declared the loser. That
    /// tie-break is deliberate, not incidental.
    pub fn advance(
        &mut self,
        input: &InputSnapshot,
        scheme: ControlScheme,
        effects: &mut EffectSystem,
    ) -> SimResult {
        self.yellow_flash = (self.yellow_flash - 1).max(0);
        self.red_flash = (self.red_flash - 1).max(0);

        self.move_yellow(input);
        match scheme {
            ControlScheme::Keyboard => self.move_red_keyboard(input),
            ControlScheme::Mouse => self.move_red_mouse(input),
        }

        self.resolve_bullets(effects);

        // Red is checked first: if both sides hit zero in the same pass,
        // red loses
        let loser = if self.red_health <= 0 {
            Side::Red
        } else if self.yellow_health <= 0 {
            Side::Yellow
        } else {
            return SimResult::None;
        };

        let (cx, cy) = match loser {
            Side::Yellow => self.yellow_ship.center(),
            Side::Red => self.red_ship.center(),
        };
        effects.spawn_victory_explosion(cx as f32, cy as f32, loser.color());
        SimResult::Winner(loser.opponent())
    }

    /// Yellow is always on WASD. Movement is clamp-by-rejection: each
    /// axis key applies only if the post-move position is still inside
    /// yellow's half, so the ship can never end up out of bounds and
    /// need pushing back.
    fn move_yellow(&mut self, input: &InputSnapshot) {
        let ship = &mut self.yellow_ship;
        if input.key_a && ship.x - SHIP_VEL > 0 {
            ship.x -= SHIP_VEL;
        }
        if input.key_d && ship.x + SHIP_VEL + (SHIP_WIDTH as i32) < DIVIDER_X {
            ship.x += SHIP_VEL;
        }
        if input.key_w && ship.y - SHIP_VEL > 0 {
            ship.y -= SHIP_VEL;
        }
        if input.key_s && ship.y + SHIP_VEL + (SHIP_HEIGHT as i32) < ARENA_HEIGHT as i32 {
            ship.y += SHIP_VEL;
        }
    }

    /// Arrow keys, same rejection-style bounds against red's half.
    fn move_red_keyboard(&mut self, input: &InputSnapshot) {
        let ship = &mut self.red_ship;
        if input.key_left && ship.x - SHIP_VEL > RED_LEFT_LIMIT {
            ship.x -= SHIP_VEL;
        }
        if input.key_right && ship.x + SHIP_VEL + (SHIP_WIDTH as i32) < ARENA_WIDTH as i32 {
            ship.x += SHIP_VEL;
        }
        if input.key_up && ship.y - SHIP_VEL > 0 {
            ship.y -= SHIP_VEL;
        }
        if input.key_down && ship.y + SHIP_VEL + (SHIP_HEIGHT as i32) < ARENA_HEIGHT as i32 {
            ship.y += SHIP_VEL;
        }
    }

    /// Chase the pointer at most SHIP_VEL per axis per frame, with a
    /// dead-zone so the ship doesn't jitter on top of the cursor. Only
    /// engages while the pointer is on red's side of the divider.
    fn move_red_mouse(&mut self, input: &InputSnapshot) {
        if input.mouse_x <= RED_LEFT_LIMIT {
            return;
        }

        let ship = &mut self.red_ship;
        let (cx, cy) = (
            ship.x + SHIP_WIDTH as i32 / 2,
            ship.y + SHIP_HEIGHT as i32 / 2,
        );

        if cx < input.mouse_x - MOUSE_DEADZONE
            && ship.x + SHIP_VEL + (SHIP_WIDTH as i32) < ARENA_WIDTH as i32
        {
            ship.x += SHIP_VEL;
        } else if cx > input.mouse_x + MOUSE_DEADZONE && ship.x - SHIP_VEL > RED_LEFT_LIMIT {
            ship.x -= SHIP_VEL;
        }

        if cy < input.mouse_y - MOUSE_DEADZONE
            && ship.y + SHIP_VEL + (SHIP_HEIGHT as i32) < ARENA_HEIGHT as i32
        {
            ship.y += SHIP_VEL;
        } else if cy > input.mouse_y + MOUSE_DEADZONE && ship.y - SHIP_VEL > 0 {
            ship.y -= SHIP_VEL;
        }
    }

    /// Advance every bullet, then resolve hits and exits in one
    /// snapshot-then-filter pass per side. The hit check runs before the
    /// exit check, so a bullet gets at most one outcome per frame.
    fn resolve_bullets(&mut self, effects: &mut EffectSystem) {
        for bullet in &mut self.yellow_bullets {
            bullet.x += BULLET_VEL;
        }
        for bullet in &mut self.red_bullets {
            bullet.x -= BULLET_VEL;
        }

        let red_ship = self.red_ship;
        let mut hits_on_red = 0;
        self.yellow_bullets.retain(|bullet| {
            if entities_collide(bullet, &red_ship) {
                hits_on_red += 1;
                return false;
            }
            bullet.x <= ARENA_WIDTH as i32
        });

        let yellow_ship = self.yellow_ship;
        let mut hits_on_yellow = 0;
        self.red_bullets.retain(|bullet| {
            if entities_collide(bullet, &yellow_ship) {
                hits_on_yellow += 1;
                return false;
            }
            bullet.x >= 0
        });

        if hits_on_red > 0 {
            self.red_health = (self.red_health - hits_on_red).max(0);
            self.red_flash = FLASH_FRAMES;
            let (cx, cy) = self.red_ship.center();
            for _ in 0..hits_on_red {
                effects.spawn_hit_effect(cx as f32, cy as f32, RED);
            }
        }

        if hits_on_yellow > 0 {
            self.yellow_health = (self.yellow_health - hits_on_yellow).max(0);
            self.yellow_flash = FLASH_FRAMES;
            let (cx, cy) = self.yellow_ship.center();
            for _ in 0..hits_on_yellow {
                effects.spawn_hit_effect(cx as f32, cy as f32, YELLOW);
            }
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
