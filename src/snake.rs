use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`, without wrapping.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// Ordered snake body, stored tail-first so the back of the deque is the head.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Lays out the starting snake: a horizontal segment through the board
    /// centre, head on the right.
    #[must_use]
    pub fn centered(bounds: GridSize) -> Self {
        let cx = i32::from(bounds.width / 2);
        let cy = i32::from(bounds.height / 2);
        let length = INITIAL_SNAKE_LENGTH as i32;
        let first = cx - length / 2;

        let body = (0..length)
            .map(|offset| Position::new(first + offset, cy))
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is tail, back is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // The body is non-empty by construction and `advance` never shrinks it.
        self.body[self.body.len() - 1]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[0]
    }

    /// Pushes `next_head` and drops the tail unless `grow` is set.
    pub fn advance(&mut self, next_head: Position, grow: bool) {
        self.body.push_back(next_head);
        if !grow {
            let _ = self.body.pop_front();
        }
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Copies the body out, tail first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }
}
