//! Board squares: a linear index 0..64 with row = index / 8, column = index % 8.

use std::fmt;
use std::str::FromStr;

use crate::direction::Direction;
use crate::error::{BoundaryError, SquareError};

/// Knight offsets as two chained steps, in compass order
/// WSW, SSW, SSE, ESE, ENE, NNE, NNW, WNW.
const KNIGHT_STEPS: [(Direction, Direction); 8] = [
    (Direction::Left, Direction::DownLeft),
    (Direction::Down, Direction::DownLeft),
    (Direction::Down, Direction::DownRight),
    (Direction::Right, Direction::DownRight),
    (Direction::Right, Direction::UpRight),
    (Direction::Up, Direction::UpRight),
    (Direction::Up, Direction::UpLeft),
    (Direction::Left, Direction::UpLeft),
];

/// King offsets, in the order they are offered.
const KING_STEPS: [Direction; 8] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

/// A square on the board, A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

macro_rules! named_squares {
    ($($name:ident = $index:expr),* $(,)?) => {
        $(pub const $name: Square = Square($index);)*
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from a column (0 = a) and a row (0 = rank 1).
    #[inline]
    pub const fn from_coords(column: u8, row: u8) -> Option<Square> {
        if column < 8 && row < 8 {
            Some(Square(row * 8 + column))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row, 0 for rank 1 through 7 for rank 8.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column, 0 for the a-file through 7 for the h-file.
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Return the column letter (`'a'..='h'`).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.column()) as char
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    /// Step once in `direction`. Fails instead of wrapping at the board edge.
    pub fn step(self, direction: Direction) -> Result<Square, BoundaryError> {
        let (dc, dr) = direction.delta();
        let column = self.column() as i8 + dc;
        let row = self.row() as i8 + dr;
        if (0..8).contains(&column) && (0..8).contains(&row) {
            Ok(Square((row * 8 + column) as u8))
        } else {
            Err(BoundaryError {
                from: self,
                direction,
            })
        }
    }

    #[inline]
    pub fn up(self) -> Result<Square, BoundaryError> {
        self.step(Direction::Up)
    }

    #[inline]
    pub fn down(self) -> Result<Square, BoundaryError> {
        self.step(Direction::Down)
    }

    #[inline]
    pub fn left(self) -> Result<Square, BoundaryError> {
        self.step(Direction::Left)
    }

    #[inline]
    pub fn right(self) -> Result<Square, BoundaryError> {
        self.step(Direction::Right)
    }

    /// Squares a knight on this square reaches, in WSW..WNW compass order.
    pub fn knight_moves(self) -> Vec<Square> {
        KNIGHT_STEPS
            .iter()
            .filter_map(|&(first, second)| self.step(first).and_then(|sq| sq.step(second)).ok())
            .collect()
    }

    /// Squares adjacent to this one.
    pub fn king_moves(self) -> Vec<Square> {
        KING_STEPS
            .iter()
            .filter_map(|&dir| self.step(dir).ok())
            .collect()
    }

    /// Iterate over the squares from here to the board edge in `direction`,
    /// excluding this square.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Square> {
        std::iter::successors(self.step(direction).ok(), move |sq| sq.step(direction).ok())
    }

    /// Direction from `self` toward `to`, or `None` when the two squares share
    /// no rank, file or diagonal (or are the same square).
    pub fn direction_to(self, to: Square) -> Option<Direction> {
        if self == to {
            return None;
        }
        let dc = to.column() as i8 - self.column() as i8;
        let dr = to.row() as i8 - self.row() as i8;
        match (dc.signum(), dr.signum()) {
            (0, 1) => Some(Direction::Up),
            (0, _) => Some(Direction::Down),
            (1, 0) => Some(Direction::Right),
            (_, 0) => Some(Direction::Left),
            _ if dc.abs() != dr.abs() => None,
            (1, 1) => Some(Direction::UpRight),
            (1, _) => Some(Direction::DownRight),
            (_, 1) => Some(Direction::UpLeft),
            _ => Some(Direction::DownLeft),
        }
    }

    /// Return `true` if this square lies strictly between `bound1` and
    /// `bound2` on a shared rank, file or diagonal.
    pub fn is_between(self, bound1: Square, bound2: Square) -> bool {
        match self.direction_to(bound1) {
            Some(direction) => bound2.direction_to(self) == Some(direction),
            None => false,
        }
    }

    named_squares! {
        A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
        A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
        A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
        A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
        A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
        A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
        A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
        A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidLength { text: s.to_string() });
        };
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile { character: file });
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareError::InvalidRank { character: rank });
        }
        Ok(Square((rank as u8 - b'1') * 8 + (file as u8 - b'a')))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
