//! Axis-aligned rectangles and the four diagonal ball directions
//!
//! Coordinates are y-up: y = 0 is the bottom edge of the playfield.
//! A rectangle's origin is its lower-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (origin + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner
    pub origin: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size: size.max(Vec2::ZERO),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// True when the interiors overlap. Rectangles that only share an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }
}

/// One of the four unit diagonals the ball may travel along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Unit-component vector, e.g. north-east is (+1, +1)
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::NorthEast => Vec2::new(1.0, 1.0),
            Direction::NorthWest => Vec2::new(-1.0, 1.0),
            Direction::SouthEast => Vec2::new(1.0, -1.0),
            Direction::SouthWest => Vec2::new(-1.0, -1.0),
        }
    }

    pub fn is_northward(self) -> bool {
        matches!(self, Direction::NorthEast | Direction::NorthWest)
    }

    // Bounce tables. Each one maps the direction held before the tick to the
    // direction after the bounce.

    /// Ball crossed the left edge
    pub fn off_left_wall(self) -> Self {
        match self {
            Direction::SouthWest => Direction::SouthEast,
            _ => Direction::NorthEast,
        }
    }

    /// Ball crossed the right edge
    pub fn off_right_wall(self) -> Self {
        match self {
            Direction::SouthEast => Direction::SouthWest,
            _ => Direction::NorthWest,
        }
    }

    /// Ball crossed the top edge. Bricks reuse this table.
    pub fn off_ceiling(self) -> Self {
        match self {
            Direction::NorthWest => Direction::SouthWest,
            _ => Direction::SouthEast,
        }
    }

    /// Ball crossed the bottom edge in the bouncing-floor variant
    pub fn off_floor(self) -> Self {
        match self {
            Direction::SouthWest => Direction::NorthWest,
            _ => Direction::NorthEast,
        }
    }

    /// Ball touched the paddle under the simple policy
    pub fn off_paddle(self) -> Self {
        match self {
            Direction::SouthWest => Direction::NorthEast,
            _ => Direction::NorthWest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(20.0, 440.0), Vec2::new(100.0, 20.0));
        assert_eq!(rect.left(), 20.0);
        assert_eq!(rect.right(), 120.0);
        assert_eq!(rect.bottom(), 440.0);
        assert_eq!(rect.top(), 460.0);
        assert_eq!(rect.center(), Vec2::new(70.0, 450.0));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let rect = Rect::new(Vec2::ZERO, Vec2::new(-5.0, 3.0));
        assert_eq!(rect.size, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_rect_intersection() {
        let brick = Rect::new(Vec2::new(20.0, 440.0), Vec2::new(100.0, 20.0));
        let overlapping = Rect::new(Vec2::new(50.0, 435.0), Vec2::splat(10.0));
        let touching = Rect::new(Vec2::new(50.0, 430.0), Vec2::splat(10.0));
        let clear = Rect::new(Vec2::new(200.0, 200.0), Vec2::splat(10.0));

        assert!(brick.intersects(&overlapping));
        assert!(overlapping.intersects(&brick));
        assert!(!brick.intersects(&touching));
        assert!(!brick.intersects(&clear));
    }

    #[test]
    fn test_direction_vectors_are_diagonal() {
        for dir in [
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ] {
            let v = dir.vector();
            assert_eq!(v.x.abs(), 1.0);
            assert_eq!(v.y.abs(), 1.0);
            assert_eq!(dir.is_northward(), v.y > 0.0);
        }
    }

    #[test]
    fn test_wall_tables() {
        assert_eq!(Direction::SouthWest.off_left_wall(), Direction::SouthEast);
        assert_eq!(Direction::NorthWest.off_left_wall(), Direction::NorthEast);
        assert_eq!(Direction::SouthEast.off_right_wall(), Direction::SouthWest);
        assert_eq!(Direction::NorthEast.off_right_wall(), Direction::NorthWest);
        assert_eq!(Direction::NorthWest.off_ceiling(), Direction::SouthWest);
        assert_eq!(Direction::NorthEast.off_ceiling(), Direction::SouthEast);
        assert_eq!(Direction::SouthWest.off_floor(), Direction::NorthWest);
        assert_eq!(Direction::SouthEast.off_floor(), Direction::NorthEast);
    }

    #[test]
    fn test_simple_paddle_table() {
        assert_eq!(Direction::SouthWest.off_paddle(), Direction::NorthEast);
        assert_eq!(Direction::SouthEast.off_paddle(), Direction::NorthWest);
    }
}
