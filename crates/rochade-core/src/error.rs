//! Error types for square addressing and move construction.

use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors from parsing algebraic square text such as `"e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The text is not exactly two characters long.
    #[error("expected 2 characters for a square, found \"{text}\"")]
    InvalidLength {
        /// The rejected text.
        text: String,
    },
    /// The column letter is outside `a..=h`.
    #[error("invalid column letter: '{character}'")]
    InvalidFile {
        /// The rejected character.
        character: char,
    },
    /// The row digit is outside `1..=8`.
    #[error("invalid row digit: '{character}'")]
    InvalidRank {
        /// The rejected character.
        character: char,
    },
}

/// A step that would leave the board.
///
/// Expected during move assembly: every caller that walks offsets or rays
/// treats it as "no such square" and drops the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot step {direction} from {from}")]
pub struct BoundaryError {
    /// The square the step started from.
    pub from: Square,
    /// The direction of the failed step.
    pub direction: Direction,
}

/// Errors from building a [`Move`](crate::chess_move::Move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Origin and destination are the same square.
    #[error("move starts and ends on {square}")]
    SameSquare {
        /// The repeated square.
        square: Square,
    },
    /// A pawn cannot promote to this kind.
    #[error("cannot promote to {kind}")]
    InvalidPromotion {
        /// The rejected kind.
        kind: PieceKind,
    },
    /// Coordinate text such as `"e2e4"` could not be read.
    #[error("malformed move text: \"{text}\"")]
    Malformed {
        /// The rejected text.
        text: String,
    },
    /// One of the squares in the move text is invalid.
    #[error("invalid square in move: {source}")]
    InvalidSquare {
        /// The underlying square error.
        #[from]
        source: SquareError,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoundaryError, MoveError, SquareError};
    use crate::direction::Direction;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn boundary_error_display() {
        let err = BoundaryError {
            from: Square::A1,
            direction: Direction::Down,
        };
        assert_eq!(err.to_string(), "cannot step down from a1");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::InvalidPromotion {
            kind: PieceKind::King,
        };
        assert_eq!(err.to_string(), "cannot promote to king");
    }

    #[test]
    fn move_error_from_square_error() {
        let err: MoveError = SquareError::InvalidFile { character: 'z' }.into();
        assert!(matches!(err, MoveError::InvalidSquare { .. }));
    }
}
