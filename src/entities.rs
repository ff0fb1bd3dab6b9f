//! Combat entities: ships and bullets
//!
//! Both are plain position records. Ships have no behavior beyond the
//! per-frame displacement the simulator applies; bullets only ever move
//! along x. Everything that changes them lives in `simulation`.

use crate::collision::Collidable;
use crate::game::types::{BULLET_HEIGHT, BULLET_WIDTH, SHIP_HEIGHT, SHIP_WIDTH};
use sdl2::rect::Rect;

/// A spacecraft, top-left anchored, fixed 55x40 size.
///
/// One instance per side, owned by the match state and recreated on
/// every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
}

impl Ship {
    pub fn new(x: i32, y: i32) -> Self {
        Ship { x, y }
    }

    /// Center point, used for effect placement and mouse steering
    pub fn center(&self) -> (i32, i32) {
        (
            self.x + SHIP_WIDTH as i32 / 2,
            self.y + SHIP_HEIGHT as i32 / 2,
        )
    }
}

impl Collidable for Ship {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, SHIP_WIDTH, SHIP_HEIGHT)
    }
}

/// A projectile, 14x7, moving along x only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

impl Bullet {
    pub fn new(x: i32, y: i32) -> Self {
        Bullet { x, y }
    }
}

impl Collidable for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_center() {
        let ship = Ship::new(100, 300);
        assert_eq!(ship.center(), (127, 320));
    }

    #[test]
    fn test_ship_bounds_match_position() {
        let ship = Ship::new(700, 50);
        let bounds = ship.bounds();
        assert_eq!(bounds.x(), 700);
        assert_eq!(bounds.y(), 50);
        assert_eq!(bounds.width(), SHIP_WIDTH);
        assert_eq!(bounds.height(), SHIP_HEIGHT);
    }

    #[test]
    fn test_bullet_bounds() {
        let bullet = Bullet::new(155, 317);
        let bounds = bullet.bounds();
        assert_eq!((bounds.width(), bounds.height()), (14, 7));
    }
}
