//! Derive what a move does from the board it is played on.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::NormalMove;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The kind of a normal move, derived from the position before it is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// A move to an empty square.
    Quiet,
    /// A move onto an enemy piece.
    Capture,
    /// A pawn capturing a pawn that just advanced two squares past it.
    EnPassant,
    /// The king moving two squares toward a rook.
    Castle(CastleSide),
    /// A pawn reaching the far row.
    Promotion { capture: bool },
}

impl MoveKind {
    /// Return `true` if the move removes an enemy piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::Promotion { capture: true }
        )
    }

    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }
}

/// Classify `mv` as played on `board`.
///
/// A move from an empty square classifies as [`MoveKind::Quiet`].
pub fn classify(mv: NormalMove, board: &Board) -> MoveKind {
    let Some(piece) = board.piece_at(mv.from()) else {
        return MoveKind::Quiet;
    };
    let capture = board
        .color_at(mv.to())
        .is_some_and(|color| color != piece.color());

    match piece.kind() {
        PieceKind::King if mv.from().column() == 4 => {
            match CastleSide::from_king_destination(mv.to().column()) {
                Some(side) => MoveKind::Castle(side),
                None if capture => MoveKind::Capture,
                None => MoveKind::Quiet,
            }
        }
        PieceKind::Pawn if mv.to().row() == piece.color().promotion_row() => {
            MoveKind::Promotion { capture }
        }
        PieceKind::Pawn if mv.from().column() != mv.to().column() && board.is_empty(mv.to()) => {
            MoveKind::EnPassant
        }
        _ if capture => MoveKind::Capture,
        _ => MoveKind::Quiet,
    }
}

/// The square of the pawn removed by an en passant capture from `from` to
/// `to`, or `None` if that move is not an en passant capture.
pub fn en_passant_victim(board: &Board, from: Square, to: Square) -> Option<Square> {
    let piece = board.piece_at(from)?;
    let diagonal = from.column() != to.column();
    if piece.kind() != PieceKind::Pawn || !diagonal || !board.is_empty(to) {
        return None;
    }
    Square::from_coords(to.column(), from.row())
}
