//! King move and castling generation.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::check::{CheckStatus, is_attacked};
use crate::color::Color;
use crate::square::Square;

/// Generate legal king moves (normal moves + castling).
pub(super) fn gen_king(board: &Board, from: Square, check: &CheckStatus, targets: &mut Vec<Square>) {
    let us = check.color();

    for to in from.king_moves() {
        if board.color_at(to) != Some(us) && !is_attacked(board, to, us) {
            targets.push(to);
        }
    }

    // Castling only when not currently in check
    if check.in_check() {
        return;
    }
    for side in CastleSide::ALL {
        if can_castle(board, from, us, side) {
            targets.push(side.king_destination(us));
        }
    }
}

/// The right is held, the squares up to the rook are empty and the king
/// never stands on an attacked square.
fn can_castle(board: &Board, from: Square, us: Color, side: CastleSide) -> bool {
    board.castling().has(us, side)
        && from == CastleSide::king_origin(us)
        && side.empty_squares(us).iter().all(|&sq| board.is_empty(sq))
        && side.king_path(us).iter().all(|&sq| !is_attacked(board, sq, us))
}
