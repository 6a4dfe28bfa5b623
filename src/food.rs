use std::collections::HashSet;

use log::trace;

use crate::config::GridSize;
use crate::rng::{scale_to_index, RandomSource};
use crate::snake::{Position, Snake};

/// Set of cells covered by the snake, built once per placement.
#[must_use]
pub fn occupied_cells(snake: &Snake) -> HashSet<Position> {
    snake.segments().copied().collect()
}

/// Number of board cells not in `occupied`.
///
/// Segments outside the board (possible only on degenerate boards narrower
/// than the starting snake) still count as occupied.
#[must_use]
pub fn empty_cell_count(bounds: GridSize, occupied: &HashSet<Position>) -> usize {
    bounds.total_cells().saturating_sub(occupied.len())
}

/// Returns the `index`-th cell not in `occupied`, in row-major order
/// (y outer, x inner).
#[must_use]
pub fn nth_empty_cell(
    bounds: GridSize,
    occupied: &HashSet<Position>,
    index: usize,
) -> Option<Position> {
    (0..i32::from(bounds.height))
        .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Position { x, y }))
        .filter(|position| !occupied.contains(position))
        .nth(index)
}

/// Picks a free cell uniformly with exactly one draw from `source`.
///
/// Returns `None` without consuming a draw when the board is full.
pub fn spawn_position<S: RandomSource + ?Sized>(
    source: &mut S,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let occupied = occupied_cells(snake);
    let empty = empty_cell_count(bounds, &occupied);
    if empty == 0 {
        return None;
    }

    let index = scale_to_index(source.next_unit(), empty);
    let position = nth_empty_cell(bounds, &occupied, index);
    trace!("food placed at {position:?} (empty cell {index} of {empty})");
    position
}
