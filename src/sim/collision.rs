//! Overlap tests shared by the target and enemy checks

use glam::Vec2;

/// Circle-overlap test: both targets and enemies count as hit when their
/// center is within `min_radius` of the duck's center.
#[inline]
pub fn circle_hit(a: Vec2, b: Vec2, min_radius: f32) -> bool {
    a.distance(b) <= min_radius
}

/// True once `x` has left the closed horizontal play range.
#[inline]
pub fn outside_walls(x: f32, min_x: f32, max_x: f32) -> bool {
    x < min_x || x > max_x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_hit_boundary() {
        let duck = Vec2::new(1.0, 2.0);
        // Exactly at the radius counts as a hit.
        assert!(circle_hit(duck, Vec2::new(1.3, 2.0), 0.3));
        assert!(circle_hit(duck, duck, 0.3));
        assert!(!circle_hit(duck, Vec2::new(1.31, 2.0), 0.3));
    }

    #[test]
    fn test_circle_hit_diagonal() {
        let duck = Vec2::ZERO;
        // 0.2 on each axis is ~0.283 away, inside the 0.3 radius.
        assert!(circle_hit(duck, Vec2::new(0.2, 0.2), 0.3));
        assert!(!circle_hit(duck, Vec2::new(0.25, 0.25), 0.3));
    }

    #[test]
    fn test_outside_walls() {
        assert!(!outside_walls(0.0, -0.5, 5.5));
        // The walls themselves are still in play.
        assert!(!outside_walls(-0.5, -0.5, 5.5));
        assert!(!outside_walls(5.5, -0.5, 5.5));
        assert!(outside_walls(-0.51, -0.5, 5.5));
        assert!(outside_walls(5.6, -0.5, 5.5));
    }
}
