//! The eight compass directions a piece can step or slide in.

use std::fmt;

/// One of the eight directions on the board.
///
/// Discriminants follow the numbering used when two squares are related:
/// 1 = down-left, 2 = down, 3 = down-right, 4 = right, 5 = up-right,
/// 6 = up, 7 = up-left, 8 = left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    DownLeft = 1,
    Down = 2,
    DownRight = 3,
    Right = 4,
    UpRight = 5,
    Up = 6,
    UpLeft = 7,
    Left = 8,
}

impl Direction {
    /// Rank and file directions, in ray-probe order.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Diagonal directions, in ray-probe order.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// All eight directions: orthogonals first, then diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Column and row deltas of a single step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::DownLeft => (-1, -1),
            Direction::Down => (0, -1),
            Direction::DownRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::Up => (0, 1),
            Direction::UpLeft => (-1, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Return the direction pointing the opposite way.
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::DownLeft => Direction::UpRight,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
            Direction::Right => Direction::Left,
            Direction::UpRight => Direction::DownLeft,
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::Left => Direction::Right,
        }
    }

    /// Return `true` for the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::DownLeft | Direction::DownRight | Direction::UpLeft | Direction::UpRight
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::DownLeft => "down-left",
            Direction::Down => "down",
            Direction::DownRight => "down-right",
            Direction::Right => "right",
            Direction::UpRight => "up-right",
            Direction::Up => "up",
            Direction::UpLeft => "up-left",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}
