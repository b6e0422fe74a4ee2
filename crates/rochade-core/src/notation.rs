//! Short algebraic notation for moves about to be played.
//!
//! Two identical pieces able to reach the same square are not told apart:
//! `Nd2` may mean either knight.
//!
//! En passant counts as a capture even though its destination is empty, so
//! it reads `exd6` rather than `d6`.

use crate::board::Board;
use crate::chess_move::NormalMove;
use crate::classify::{MoveKind, classify};
use crate::piece_kind::PieceKind;

/// Render `mv` as played on `board`, the position before the move.
///
/// Castles read `0-0` or `0-0-0`. Otherwise: the piece letter (pawns have
/// none, but a capturing pawn names its file), `x` on captures, the
/// destination, and the promotion letter.
pub fn algebraic(board: &Board, mv: NormalMove) -> String {
    let kind = classify(mv, board);
    if let MoveKind::Castle(side) = kind {
        return side.notation().to_string();
    }

    let mut text = String::with_capacity(6);
    match board.piece_at(mv.from()).map(|p| p.kind()) {
        Some(PieceKind::Pawn) | None => {
            if kind.is_capture() {
                text.push(mv.from().file_char());
            }
        }
        Some(piece_kind) => text.push_str(piece_kind.notation()),
    }
    if kind.is_capture() {
        text.push('x');
    }
    text.push_str(&mv.to().to_string());
    if let Some(promotion) = mv.promotion() {
        text.push_str(promotion.to_piece_kind().notation());
    }
    text
}
