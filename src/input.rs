use serde::{Deserialize, Serialize};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in the order Up, Down, Left, Right.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector for this direction (y grows downwards).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Maps a control letter to a direction.
    ///
    /// Accepts `U`/`D`/`L`/`R` (case-insensitive) and the arrow-like
    /// symbols `^`, `v`, `<`, `>`.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'u' | 'U' | '^' => Some(Self::Up),
            'd' | 'D' | 'v' | 'V' => Some(Self::Down),
            'l' | 'L' | '<' => Some(Self::Left),
            'r' | 'R' | '>' => Some(Self::Right),
            _ => None,
        }
    }
}

impl From<Direction> for DirectionVector {
    fn from(direction: Direction) -> Self {
        let (x, y) = direction.delta();
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

/// Free-form 2D intent vector, e.g. a swipe delta or an analog stick reading.
///
/// Only the sign of each axis matters; magnitude is discarded when the vector
/// is turned into a [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionVector {
    pub x: f64,
    pub y: f64,
}

impl DirectionVector {
    pub const UP: Self = Self { x: 0.0, y: -1.0 };
    pub const DOWN: Self = Self { x: 0.0, y: 1.0 };
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Normalises the vector to a cardinal direction.
    ///
    /// Each axis is reduced to its sign. Returns `None` when both axes reduce
    /// to zero (including NaN components). When both axes are non-zero the
    /// axis with the larger magnitude wins; exact ties go to the vertical
    /// axis, as swipe gestures do.
    #[must_use]
    pub fn to_direction(self) -> Option<Direction> {
        let sx = axis_sign(self.x);
        let sy = axis_sign(self.y);

        let horizontal = match sx {
            1 => Some(Direction::Right),
            -1 => Some(Direction::Left),
            _ => None,
        };
        let vertical = match sy {
            1 => Some(Direction::Down),
            -1 => Some(Direction::Up),
            _ => None,
        };

        match (horizontal, vertical) {
            (Some(h), Some(v)) => {
                if self.y.abs() >= self.x.abs() {
                    Some(v)
                } else {
                    Some(h)
                }
            }
            (h, v) => h.or(v),
        }
    }
}

fn axis_sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

#[cfg(test)]
mod tests {
    use super::{direction_change_is_valid, Direction, DirectionVector};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_not_a_valid_change() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn vector_magnitude_is_ignored() {
        assert_eq!(
            DirectionVector::new(37.5, 0.0).to_direction(),
            Some(Direction::Right)
        );
        assert_eq!(
            DirectionVector::new(0.0, -0.001).to_direction(),
            Some(Direction::Up)
        );
    }

    #[test]
    fn zero_and_nan_vectors_have_no_direction() {
        assert_eq!(DirectionVector::new(0.0, 0.0).to_direction(), None);
        assert_eq!(DirectionVector::new(-0.0, 0.0).to_direction(), None);
        assert_eq!(DirectionVector::new(f64::NAN, 0.0).to_direction(), None);
    }

    #[test]
    fn diagonal_vectors_resolve_to_dominant_axis() {
        assert_eq!(
            DirectionVector::new(1.0, -4.0).to_direction(),
            Some(Direction::Up)
        );
        assert_eq!(
            DirectionVector::new(-3.0, 2.0).to_direction(),
            Some(Direction::Left)
        );
        assert_eq!(
            DirectionVector::new(2.0, 2.0).to_direction(),
            Some(Direction::Down)
        );
        assert_eq!(
            DirectionVector::new(-5.0, -5.0).to_direction(),
            Some(Direction::Up)
        );
    }

    #[test]
    fn named_vectors_round_trip_to_directions() {
        for direction in Direction::ALL {
            assert_eq!(
                DirectionVector::from(direction).to_direction(),
                Some(direction)
            );
        }
        assert_eq!(DirectionVector::UP, DirectionVector::from(Direction::Up));
    }

    #[test]
    fn control_letters_map_to_directions() {
        assert_eq!(Direction::from_key('U'), Some(Direction::Up));
        assert_eq!(Direction::from_key('^'), Some(Direction::Up));
        assert_eq!(Direction::from_key('l'), Some(Direction::Left));
        assert_eq!(Direction::from_key('v'), Some(Direction::Down));
        assert_eq!(Direction::from_key('d'), Some(Direction::Down));
        assert_eq!(Direction::from_key('>'), Some(Direction::Right));
        assert_eq!(Direction::from_key('.'), None);
        assert_eq!(Direction::from_key('w'), None);
    }
}
