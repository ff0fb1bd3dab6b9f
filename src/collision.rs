//! Collision detection for the arena
//!
//! This module provides a trait-based collision system with AABB
//! (Axis-Aligned Bounding Box) detection. The only collision pairing in
//! the game is bullet-vs-ship, but the trait keeps the test decoupled
//! from the concrete entity types.
//!
//! Edges are INCLUSIVE on all four sides: a bullet whose box exactly
//! touches a ship's box registers a hit. This matches the original
//! gameplay feel (projectiles connect on grazing contact) and is pinned
//! down by the tests below.

use sdl2::rect::Rect;

/// Trait for entities that participate in collision detection.
///
/// The returned `Rect` must match the entity's actual on-screen position
/// and size.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes overlap, treating all edges
/// as inclusive.
///
/// For two rectangles to NOT overlap, one must be strictly beyond the
/// other on some axis. Touching counts as overlapping here, so the
/// comparisons use `<=`/`>=` rather than the strict forms.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() <= b.x() + b.width() as i32 && a.x() + a.width() as i32 >= b.x();
    let y_overlap = a.y() <= b.y() + b.height() as i32 && a.y() + a.height() as i32 >= b.y();

    x_overlap && y_overlap
}

/// Convenience wrapper for two `Collidable` entities.
pub fn entities_collide(a: &impl Collidable, b: &impl Collidable) -> bool {
    aabb_intersect(&a.bounds(), &b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        // Boxes that exactly touch DO collide (inclusive edges)
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32); // Right edge of a == left edge of b

        assert!(aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_touching_corner() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 32, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_one_unit_apart() {
        // One unit outside on an axis must NOT collide
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(33, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));

        let rect_c = Rect::new(0, 33, 32, 32);
        assert!(!aabb_intersect(&rect_a, &rect_c));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(100, 100, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        // Small rectangle completely inside larger one
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }
}
