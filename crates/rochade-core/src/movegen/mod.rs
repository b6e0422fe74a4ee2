//! Legal move generation.
//!
//! Each piece's pseudo-legal destinations are filtered through the pins and
//! checks found by [`analyze`](crate::check::analyze). King destinations are
//! tested for attack directly instead.

mod king;
mod knights;
mod pawns;
mod sliders;

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::board::Board;
use crate::check::CheckStatus;
use crate::classify::en_passant_victim;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

/// Legal destinations for every piece of the side to move that has one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    moves: BTreeMap<Square, BTreeSet<Square>>,
}

impl LegalMoves {
    /// Return `true` if moving from `from` to `to` is legal.
    #[inline]
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.moves.get(&from).is_some_and(|set| set.contains(&to))
    }

    /// Legal destinations of the piece on `from`, if it has any.
    #[inline]
    pub fn destinations(&self, from: Square) -> Option<&BTreeSet<Square>> {
        self.moves.get(&from)
    }

    /// Iterate over all `(from, to)` pairs in square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.moves
            .iter()
            .flat_map(|(&from, set)| set.iter().map(move |&to| (from, to)))
    }

    /// Total number of `(from, to)` pairs.
    pub fn len(&self) -> usize {
        self.moves.values().map(BTreeSet::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Generate all legal moves for the side analyzed in `check`.
pub fn generate(board: &Board, check: &CheckStatus) -> LegalMoves {
    let us = check.color();
    let mut moves = BTreeMap::new();

    for from in Square::all() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color() != us {
            continue;
        }

        let mut targets = Vec::new();
        match piece.kind() {
            PieceKind::King => gen_king(board, from, check, &mut targets),
            PieceKind::Knight => gen_knights(board, from, us, &mut targets),
            PieceKind::Pawn => gen_pawns(board, from, us, &mut targets),
            kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop) => {
                gen_sliders(board, from, kind, &mut targets)
            }
        }
        if piece.kind() != PieceKind::King {
            targets.retain(|&to| respects_findings(board, check, from, to));
        }

        if !targets.is_empty() {
            moves.insert(from, targets.into_iter().collect());
        }
    }

    let legal = LegalMoves { moves };
    trace!(color = %us, count = legal.len(), "generated legal moves");
    legal
}

/// Return `true` if a non-king move keeps every pin and answers every check.
///
/// A pinned piece must stay on the line between its king and the pinner, or
/// capture the pinner. Under direct check the move must capture the checker
/// or land strictly between the king and the checker, so with two checkers
/// nothing but the king can move.
fn respects_findings(board: &Board, check: &CheckStatus, from: Square, to: Square) -> bool {
    let Some(king) = check.king() else {
        return true;
    };

    let pins_hold = check.pinners().all(|pinner| {
        !from.is_between(king, pinner) || to == pinner || to.is_between(king, pinner)
    });
    if !pins_hold {
        return false;
    }

    let captured = en_passant_victim(board, from, to).unwrap_or(to);
    check
        .checkers()
        .all(|checker| captured == checker || to.is_between(king, checker))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::generate;
    use crate::board::Board;
    use crate::castle_rights::CastleRights;
    use crate::check::analyze;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn legal(board: &Board) -> super::LegalMoves {
        generate(board, &analyze(board, board.side_to_move()))
    }

    #[test]
    fn starting_position_20_moves() {
        let moves = legal(&Board::starting_position());
        assert_eq!(moves.len(), 20);
        let origins: BTreeSet<Square> = moves.iter().map(|(from, _)| from).collect();
        assert_eq!(origins.len(), 10);
        assert!(moves.contains(Square::G1, Square::F3));
        assert!(moves.contains(Square::E2, Square::E4));
        assert!(!moves.contains(Square::E1, Square::E2));
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::E2, Piece::WHITE_KNIGHT)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::H8, Piece::BLACK_KING);
        assert_eq!(legal(&board).destinations(Square::E2), None);
    }

    #[test]
    fn pinned_rook_slides_along_pin() {
        let board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::E3, Piece::WHITE_ROOK)
            .with_piece(Square::E7, Piece::BLACK_QUEEN)
            .with_piece(Square::H8, Piece::BLACK_KING);
        let moves = legal(&board);
        let rook: Vec<Square> = moves
            .destinations(Square::E3)
            .into_iter()
            .flatten()
            .copied()
            .collect();
        assert_eq!(
            rook,
            vec![Square::E2, Square::E4, Square::E5, Square::E6, Square::E7]
        );
    }

    #[test]
    fn single_check_block_or_capture() {
        // Rook e8 checks: the bishop can block on e2 or e4, the knight can
        // capture the checker.
        let board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::D3, Piece::WHITE_BISHOP)
            .with_piece(Square::G7, Piece::WHITE_KNIGHT)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING);
        let moves = legal(&board);
        for (from, to) in moves.iter() {
            if from == Square::E1 {
                continue;
            }
            assert!(
                to == Square::E8 || to.is_between(Square::E1, Square::E8),
                "{from}{to} ignores the check"
            );
        }
        assert!(moves.contains(Square::G7, Square::E8));
        assert!(moves.contains(Square::D3, Square::E2));
        assert!(moves.contains(Square::D3, Square::E4));
        assert!(!moves.contains(Square::D3, Square::C4));
    }

    #[test]
    fn double_check_king_only() {
        let board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::A3, Piece::WHITE_ROOK)
            .with_piece(Square::F3, Piece::BLACK_KNIGHT)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::G8, Piece::BLACK_KING);
        let moves = legal(&board);
        assert!(!moves.is_empty());
        for (from, _) in moves.iter() {
            assert_eq!(board.piece_at(from).map(Piece::kind), Some(PieceKind::King));
        }
    }

    #[test]
    fn king_cannot_retreat_along_check_ray() {
        let board = Board::empty(Color::White)
            .with_piece(Square::E2, Piece::WHITE_KING)
            .with_piece(Square::E8, Piece::BLACK_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING);
        let moves = legal(&board);
        assert!(!moves.contains(Square::E2, Square::E1));
        assert!(!moves.contains(Square::E2, Square::E3));
        assert!(moves.contains(Square::E2, Square::D2));
    }

    #[test]
    fn castling_not_through_attack() {
        let board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::A1, Piece::WHITE_ROOK)
            .with_piece(Square::H1, Piece::WHITE_ROOK)
            .with_piece(Square::A6, Piece::BLACK_BISHOP)
            .with_piece(Square::E8, Piece::BLACK_KING)
            .with_castling(CastleRights::WHITE_KING.insert(CastleRights::WHITE_QUEEN));
        let moves = legal(&board);
        assert!(!moves.contains(Square::E1, Square::G1));
        assert!(moves.contains(Square::E1, Square::C1));
    }

    #[test]
    fn castling_needs_empty_squares_and_right() {
        let board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::A1, Piece::WHITE_ROOK)
            .with_piece(Square::B1, Piece::WHITE_KNIGHT)
            .with_piece(Square::H1, Piece::WHITE_ROOK)
            .with_piece(Square::E8, Piece::BLACK_KING)
            .with_castling(CastleRights::WHITE_QUEEN);
        let moves = legal(&board);
        assert!(!moves.contains(Square::E1, Square::C1));
        assert!(!moves.contains(Square::E1, Square::G1));
    }

    #[test]
    fn no_castling_out_of_check() {
        let board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::H1, Piece::WHITE_ROOK)
            .with_piece(Square::E5, Piece::BLACK_ROOK)
            .with_piece(Square::A8, Piece::BLACK_KING)
            .with_castling(CastleRights::WHITE_KING);
        assert!(!legal(&board).contains(Square::E1, Square::G1));
    }
}
