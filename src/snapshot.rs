use serde::{Deserialize, Serialize};

use crate::input::Direction;
use crate::snake::Position;

/// Detached copy of the engine state after a step.
///
/// Owns all of its data, so holding on to a snapshot across later steps is
/// always safe.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cols: u16,
    pub rows: u16,
    pub wrap: bool,
    pub score: u32,
    pub over: bool,
    /// Body cells, tail first and head last.
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
}

impl Snapshot {
    /// Returns the head cell, if the body is non-empty.
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.snake.last().copied()
    }

    /// Returns the snake length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Returns true when the snapshot holds no body cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Returns true when every cell is covered by the snake.
    #[must_use]
    pub fn board_full(&self) -> bool {
        self.food.is_none()
    }
}
