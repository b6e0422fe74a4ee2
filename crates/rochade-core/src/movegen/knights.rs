//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Generate knight moves onto empty or enemy squares.
pub(super) fn gen_knights(board: &Board, from: Square, us: Color, targets: &mut Vec<Square>) {
    targets.extend(
        from.knight_moves()
            .into_iter()
            .filter(|&to| board.color_at(to) != Some(us)),
    );
}
