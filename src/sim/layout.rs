//! Brick layout: (row, column) to on-screen rectangle
//!
//! Row 0 sits two brick-heights below the top edge and each later row one
//! brick-height lower. Each row is centered horizontally using the number of
//! bricks that row had in the starting grid, so destroyed bricks leave gaps
//! instead of shifting their neighbours.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{Brick, BrickId};
use crate::consts::{BRICK_HEIGHT, BRICK_WIDTH};

/// Precomputed row placement for a session's starting grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    /// Left edge of each row's block, keyed by row
    row_starts: BTreeMap<u32, f32>,
    /// Bottom edge of row 0
    top_row_y: f32,
    brick_size: Vec2,
}

impl BrickLayout {
    /// Build the layout. Must be given the full starting grid, never the
    /// shrinking set of remaining bricks.
    pub fn new(starting: &[Brick], playfield_width: f32, playfield_height: f32) -> Self {
        let brick_size = Vec2::new(BRICK_WIDTH, BRICK_HEIGHT);

        let mut row_counts: BTreeMap<u32, u32> = BTreeMap::new();
        for brick in starting {
            *row_counts.entry(brick.id.row).or_default() += 1;
        }

        let center = playfield_width / 2.0;
        let row_starts = row_counts
            .into_iter()
            .map(|(row, count)| (row, center - count as f32 * brick_size.x / 2.0))
            .collect();

        Self {
            row_starts,
            top_row_y: playfield_height - 2.0 * brick_size.y,
            brick_size,
        }
    }

    /// Rectangle for a brick, or `None` if its row was not in the starting grid
    pub fn rect(&self, id: BrickId) -> Option<Rect> {
        let start_x = *self.row_starts.get(&id.row)?;
        let origin = Vec2::new(
            start_x + id.column as f32 * self.brick_size.x,
            self.top_row_y - id.row as f32 * self.brick_size.y,
        );
        Some(Rect::new(origin, self.brick_size))
    }
}
