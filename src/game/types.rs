// Shared enums, constants and the neon palette used throughout the game

use sdl2::pixels::Color;

// Arena dimensions (logical canvas size, fixed)
pub const ARENA_WIDTH: u32 = 900;
pub const ARENA_HEIGHT: u32 = 500;

/// Target frame rate. One loop iteration = one fixed simulation step.
pub const FPS: u32 = 60;

/// Ship movement speed in pixels per axis per frame
pub const SHIP_VEL: i32 = 5;

/// Bullet speed in pixels per frame (applied along x only, sign by side)
pub const BULLET_VEL: i32 = 10;

/// Maximum simultaneous live bullets per side (the ammo cap)
pub const MAX_BULLETS: usize = 3;

pub const SHIP_WIDTH: u32 = 55;
pub const SHIP_HEIGHT: u32 = 40;

pub const BULLET_WIDTH: u32 = 14;
pub const BULLET_HEIGHT: u32 = 7;

/// Starting health per side
pub const MAX_HEALTH: i32 = 10;

/// Frames the damage-taken overlay stays visible after a hit
pub const FLASH_FRAMES: i32 = 12;

/// Half-width of the no-fly gap around the arena midline.
/// Yellow may not cross right of ARENA_WIDTH/2 - DIVIDER_GAP,
/// red may not cross left of ARENA_WIDTH/2 + DIVIDER_GAP.
pub const DIVIDER_GAP: i32 = 5;

/// X coordinate of the divider line (and yellow's right limit)
pub const DIVIDER_X: i32 = ARENA_WIDTH as i32 / 2 - DIVIDER_GAP;

/// Dead-zone in pixels around the ship center for mouse steering
pub const MOUSE_DEADZONE: i32 = 10;

/// Ship spawn points (top-left anchored)
pub const YELLOW_SPAWN: (i32, i32) = (100, 300);
pub const RED_SPAWN: (i32, i32) = (700, 300);

// Neon palette
pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const RED: Color = Color::RGB(255, 60, 60);
pub const YELLOW: Color = Color::RGB(255, 255, 60);
pub const CYAN: Color = Color::RGB(0, 255, 255);
pub const NEON_PINK: Color = Color::RGB(255, 50, 180);
pub const ELECTRIC_BLUE: Color = Color::RGB(100, 200, 255);

/// Which half of the arena a combatant owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Yellow,
    Red,
}

impl Side {
    /// The side this side is shooting at
    pub fn opponent(&self) -> Side {
        match self {
            Side::Yellow => Side::Red,
            Side::Red => Side::Yellow,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Side::Yellow => YELLOW,
            Side::Red => RED,
        }
    }
}

/// Top-level game phase. Transitions happen only via discrete input
/// actions or the simulator declaring a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    ControlSelect,
    Start,
    Playing,
    GameOver,
}

/// Input source for the red ship (yellow is always WASD + Left Ctrl)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    Keyboard,
    Mouse,
}

/// Outcome of a single simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimResult {
    None,
    Winner(Side),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_symmetric() {
        assert_eq!(Side::Yellow.opponent(), Side::Red);
        assert_eq!(Side::Red.opponent(), Side::Yellow);
        assert_eq!(Side::Yellow.opponent().opponent(), Side::Yellow);
    }

    #[test]
    fn test_divider_leaves_symmetric_halves() {
        let yellow_limit = DIVIDER_X;
        let red_limit = ARENA_WIDTH as i32 / 2 + DIVIDER_GAP;
        assert_eq!(yellow_limit, 445);
        assert_eq!(red_limit, 455);
        assert_eq!(red_limit - ARENA_WIDTH as i32 / 2, ARENA_WIDTH as i32 / 2 - yellow_limit);
    }
}
