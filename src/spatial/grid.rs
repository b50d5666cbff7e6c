//! Fixed square grid bounds and sight primitives

use rand::Rng;

use crate::core::types::Position;

/// Bounds of the simulation grid, 0-indexed on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
}

impl Grid {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0 || pos.x >= self.rows || pos.y < 0 || pos.y >= self.cols
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        !self.is_out_of_bounds(pos)
    }

    /// Cells reachable by spawn sampling.
    ///
    /// The last row and column are never sampled.
    pub fn spawn_capacity(&self) -> usize {
        if self.rows < 2 || self.cols < 2 {
            return 0;
        }
        ((self.rows - 1) as usize) * ((self.cols - 1) as usize)
    }

    /// Uniform sample over `[0, rows-1) x [0, cols-1)`
    pub fn sample_spawn_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(rng.gen_range(0..self.rows - 1), rng.gen_range(0..self.cols - 1))
    }
}

/// Inclusive sight test on squared distances
#[inline]
pub fn is_within_sight(from: Position, to: Position, radius: u32) -> bool {
    let r = radius as i64;
    from.distance_sq(&to) <= r * r
}
