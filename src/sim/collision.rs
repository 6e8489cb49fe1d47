//! Collision detection for the ball against walls, paddle and bricks
//!
//! Detection only: these functions report what was hit and which direction
//! the hit selects. `tick` applies rollbacks, scoring and brick removal in
//! the fixed stage order.

use super::geometry::{Direction, Rect};
use super::layout::BrickLayout;
use super::state::{Brick, BrickId, Paddle};
use crate::settings::PaddlePolicy;

/// A playfield edge the ball crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Left,
    Right,
    Ceiling,
    Floor,
}

impl WallHit {
    /// Direction after bouncing, from the direction held before the tick
    pub fn bounce(self, prior: Direction) -> Direction {
        match self {
            WallHit::Left => prior.off_left_wall(),
            WallHit::Right => prior.off_right_wall(),
            WallHit::Ceiling => prior.off_ceiling(),
            WallHit::Floor => prior.off_floor(),
        }
    }
}

/// Left or right edge breach
pub fn side_wall_hit(ball: &Rect, playfield_width: f32) -> Option<WallHit> {
    if ball.left() < 0.0 {
        Some(WallHit::Left)
    } else if ball.right() > playfield_width {
        Some(WallHit::Right)
    } else {
        None
    }
}

/// Bottom or top edge breach. The floor is checked first.
pub fn vertical_wall_hit(ball: &Rect, playfield_height: f32) -> Option<WallHit> {
    if ball.bottom() < 0.0 {
        Some(WallHit::Floor)
    } else if ball.top() > playfield_height {
        Some(WallHit::Ceiling)
    } else {
        None
    }
}

/// Direction chosen by a paddle hit, if the ball touches the paddle
pub fn paddle_bounce(
    ball: &Rect,
    paddle: &Paddle,
    prior: Direction,
    policy: PaddlePolicy,
) -> Option<Direction> {
    let paddle_rect = paddle.rect();
    if !ball.intersects(&paddle_rect) {
        return None;
    }

    let dir = match policy {
        PaddlePolicy::Simple => prior.off_paddle(),
        PaddlePolicy::Split => {
            if ball.center().x < paddle_rect.center().x {
                Direction::NorthWest
            } else {
                Direction::NorthEast
            }
        }
    };
    Some(dir)
}

/// Every remaining brick the ball overlaps, in brick order
pub fn brick_hits(ball: &Rect, bricks: &[Brick], layout: &BrickLayout) -> Vec<BrickId> {
    bricks
        .iter()
        .filter(|brick| {
            layout
                .rect(brick.id)
                .is_some_and(|rect| ball.intersects(&rect))
        })
        .map(|brick| brick.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::starting_bricks;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::splat(10.0))
    }

    #[test]
    fn test_side_walls() {
        assert_eq!(side_wall_hit(&ball_at(-2.0, 200.0), 640.0), Some(WallHit::Left));
        assert_eq!(side_wall_hit(&ball_at(631.0, 200.0), 640.0), Some(WallHit::Right));
        assert_eq!(side_wall_hit(&ball_at(630.0, 200.0), 640.0), None);
        assert_eq!(side_wall_hit(&ball_at(0.0, 200.0), 640.0), None);
    }

    #[test]
    fn test_vertical_walls() {
        assert_eq!(vertical_wall_hit(&ball_at(100.0, -0.5), 480.0), Some(WallHit::Floor));
        assert_eq!(vertical_wall_hit(&ball_at(100.0, 471.0), 480.0), Some(WallHit::Ceiling));
        assert_eq!(vertical_wall_hit(&ball_at(100.0, 0.0), 480.0), None);
    }

    #[test]
    fn test_wall_bounce_uses_prior_direction() {
        assert_eq!(WallHit::Left.bounce(Direction::SouthWest), Direction::SouthEast);
        assert_eq!(WallHit::Ceiling.bounce(Direction::NorthEast), Direction::SouthEast);
        assert_eq!(WallHit::Floor.bounce(Direction::SouthEast), Direction::NorthEast);
    }

    #[test]
    fn test_split_paddle_halves() {
        let paddle = Paddle::from_pointer(320.0, 640.0); // spans 270..370
        let left = ball_at(280.0, 5.0);
        let right = ball_at(340.0, 5.0);

        // Incoming direction is ignored
        for prior in [Direction::SouthWest, Direction::SouthEast] {
            assert_eq!(
                paddle_bounce(&left, &paddle, prior, PaddlePolicy::Split),
                Some(Direction::NorthWest)
            );
            assert_eq!(
                paddle_bounce(&right, &paddle, prior, PaddlePolicy::Split),
                Some(Direction::NorthEast)
            );
        }
    }

    #[test]
    fn test_simple_paddle() {
        let paddle = Paddle::from_pointer(320.0, 640.0);
        let ball = ball_at(280.0, 5.0);
        assert_eq!(
            paddle_bounce(&ball, &paddle, Direction::SouthWest, PaddlePolicy::Simple),
            Some(Direction::NorthEast)
        );
        assert_eq!(
            paddle_bounce(&ball, &paddle, Direction::SouthEast, PaddlePolicy::Simple),
            Some(Direction::NorthWest)
        );
    }

    #[test]
    fn test_paddle_miss() {
        let paddle = Paddle::from_pointer(320.0, 640.0);
        let ball = ball_at(100.0, 5.0);
        assert_eq!(paddle_bounce(&ball, &paddle, Direction::SouthWest, PaddlePolicy::Split), None);
    }

    #[test]
    fn test_brick_hits_can_be_multiple() {
        let bricks = starting_bricks();
        let layout = BrickLayout::new(&bricks, 640.0, 480.0);

        // Straddles the seam between columns 0 and 1 of row 0
        let hits = brick_hits(&ball_at(115.0, 445.0), &bricks, &layout);
        assert_eq!(
            hits,
            vec![BrickId { row: 0, column: 0 }, BrickId { row: 0, column: 1 }]
        );

        assert!(brick_hits(&ball_at(320.0, 240.0), &bricks, &layout).is_empty());
    }
}
