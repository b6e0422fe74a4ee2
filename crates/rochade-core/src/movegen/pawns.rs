//! Pawn move generation.

use crate::board::{Board, BoardChange};
use crate::check::is_attacked;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate pawn pushes, captures and en passant.
///
/// Promotions are single destinations here; the promotion piece is chosen
/// when the move is applied.
pub(super) fn gen_pawns(board: &Board, from: Square, us: Color, targets: &mut Vec<Square>) {
    let forward = us.forward();

    if let Ok(one) = from.step(forward) {
        if board.is_empty(one) {
            targets.push(one);
            if from.row() == us.pawn_row() {
                if let Ok(two) = one.step(forward) {
                    if board.is_empty(two) {
                        targets.push(two);
                    }
                }
            }
        }
    }

    for direction in us.pawn_captures() {
        if let Ok(to) = from.step(direction) {
            if board.color_at(to) == Some(us.flip()) {
                targets.push(to);
            }
        }
    }

    if let Some(to) = en_passant_target(board, from, us) {
        targets.push(to);
    }
}

/// The en passant destination for the pawn on `from`, if the previous move
/// was an enemy pawn's two-square advance to the square beside it.
fn en_passant_target(board: &Board, from: Square, us: Color) -> Option<Square> {
    if from.row() != us.en_passant_row() {
        return None;
    }
    let last = board.last_move()?;
    let victim = last.to();
    if victim.row() != from.row() || victim.column().abs_diff(from.column()) != 1 {
        return None;
    }
    if board.piece_at(victim) != Some(Piece::new(PieceKind::Pawn, us.flip())) {
        return None;
    }
    let to = victim.step(us.forward()).ok()?;
    let origin = to.step(us.forward()).ok()?;
    if last.from() != origin || !board.is_empty(to) {
        return None;
    }
    (!exposes_king(board, from, to, victim, us)).then_some(to)
}

/// Return `true` if removing both pawns from their row would leave the king
/// attacked, e.g. by a rook on the same row.
fn exposes_king(board: &Board, from: Square, to: Square, victim: Square, us: Color) -> bool {
    let Some(king) = board.king_square(us) else {
        return false;
    };
    let mut after = board.clone();
    after.apply_changes(&[
        BoardChange::clear(victim),
        BoardChange::clear(from),
        BoardChange::place(to, Piece::new(PieceKind::Pawn, us)),
    ]);
    is_attacked(&after, king, us)
}

#[cfg(test)]
mod tests {
    use super::gen_pawns;
    use crate::board::Board;
    use crate::chess_move::NormalMove;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn targets(board: &Board, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        let us = board.color_at(from).unwrap();
        gen_pawns(board, from, us, &mut out);
        out.sort();
        out
    }

    /// White pawn e5, black pawn that just moved d7-d5.
    fn after_double_push() -> Board {
        let mut board = Board::empty(Color::White)
            .with_piece(Square::E1, Piece::WHITE_KING)
            .with_piece(Square::E8, Piece::BLACK_KING)
            .with_piece(Square::E5, Piece::WHITE_PAWN)
            .with_piece(Square::D5, Piece::BLACK_PAWN);
        board.push_history(NormalMove::new(Square::D7, Square::D5).unwrap());
        board
    }

    #[test]
    fn pushes_from_start_row() {
        let board = Board::starting_position();
        assert_eq!(targets(&board, Square::E2), vec![Square::E3, Square::E4]);
        assert_eq!(targets(&board, Square::D7), vec![Square::D5, Square::D6]);
    }

    #[test]
    fn blocked_pawn() {
        let board = Board::starting_position().with_piece(Square::E3, Piece::BLACK_KNIGHT);
        assert_eq!(targets(&board, Square::E2), Vec::<Square>::new());
        assert_eq!(targets(&board, Square::D2), vec![Square::D3, Square::E3, Square::D4]);
        assert_eq!(targets(&board, Square::F2), vec![Square::E3, Square::F3, Square::F4]);
    }

    #[test]
    fn en_passant_after_double_push() {
        let board = after_double_push();
        assert_eq!(targets(&board, Square::E5), vec![Square::D6, Square::E6]);
    }

    #[test]
    fn no_en_passant_after_single_steps() {
        let mut board = after_double_push();
        board.push_history(NormalMove::new(Square::E1, Square::F1).unwrap());
        assert_eq!(targets(&board, Square::E5), vec![Square::E6]);
    }

    #[test]
    fn en_passant_exposing_king_on_row() {
        let mut board = after_double_push()
            .with_piece(Square::H5, Piece::BLACK_ROOK)
            .with_piece(Square::A5, Piece::WHITE_KING);
        board.set(Square::E1, None);
        assert_eq!(targets(&board, Square::E5), vec![Square::E6]);
    }
}
