//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate slider moves by walking each ray up to the first occupied
/// square, which is included only when it holds an enemy piece.
pub(super) fn gen_sliders(board: &Board, from: Square, kind: PieceKind, targets: &mut Vec<Square>) {
    let directions: &[Direction] = match kind {
        PieceKind::Rook => &Direction::ORTHOGONAL,
        PieceKind::Bishop => &Direction::DIAGONAL,
        _ => &Direction::ALL,
    };
    let Some(us) = board.color_at(from) else {
        return;
    };

    for &direction in directions {
        for to in from.ray(direction) {
            match board.color_at(to) {
                None => targets.push(to),
                Some(color) => {
                    if color != us {
                        targets.push(to);
                    }
                    break;
                }
            }
        }
    }
}
