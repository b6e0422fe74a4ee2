//! Check and pin detection for one side's king.
//!
//! Analysis walks outward from the king: fixed knight and pawn offsets first,
//! then the eight rays. The result is recomputed every ply.

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// One threat against the analyzed king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckFinding {
    /// The piece on this square attacks the king.
    DirectCheck(Square),
    /// The piece on this square would attack the king if exactly one
    /// friendly piece did not stand in between.
    PiecePinned(Square),
}

/// All findings for the king of one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStatus {
    color: Color,
    king: Option<Square>,
    findings: Vec<CheckFinding>,
}

impl CheckStatus {
    /// The analyzed color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The analyzed king's square, if that side has a king.
    #[inline]
    pub fn king(&self) -> Option<Square> {
        self.king
    }

    #[inline]
    pub fn findings(&self) -> &[CheckFinding] {
        &self.findings
    }

    /// Return `true` if at least one piece gives direct check.
    pub fn in_check(&self) -> bool {
        self.checkers().next().is_some()
    }

    /// Squares of the pieces giving direct check.
    pub fn checkers(&self) -> impl Iterator<Item = Square> + '_ {
        self.findings.iter().filter_map(|finding| match finding {
            CheckFinding::DirectCheck(sq) => Some(*sq),
            CheckFinding::PiecePinned(_) => None,
        })
    }

    /// Squares of the pieces pinning a friendly piece to the king.
    pub fn pinners(&self) -> impl Iterator<Item = Square> + '_ {
        self.findings.iter().filter_map(|finding| match finding {
            CheckFinding::PiecePinned(sq) => Some(*sq),
            CheckFinding::DirectCheck(_) => None,
        })
    }
}

/// Analyze checks and pins against the king of `color`.
///
/// A board without a king of that color yields no findings.
pub fn analyze(board: &Board, color: Color) -> CheckStatus {
    let Some(king) = board.king_square(color) else {
        return CheckStatus {
            color,
            king: None,
            findings: Vec::new(),
        };
    };

    let mut findings: Vec<CheckFinding> = offset_attackers(board, king, color)
        .map(CheckFinding::DirectCheck)
        .collect();

    for direction in Direction::ALL {
        let mut shield: Option<Square> = None;
        for sq in king.ray(direction) {
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };
            if piece.color() == color {
                if shield.is_some() {
                    break;
                }
                shield = Some(sq);
                continue;
            }
            if piece.kind().threatens_ray(direction.is_diagonal()) {
                findings.push(match shield {
                    None => CheckFinding::DirectCheck(sq),
                    Some(_) => CheckFinding::PiecePinned(sq),
                });
            }
            break;
        }
    }

    CheckStatus {
        color,
        king: Some(king),
        findings,
    }
}

/// Return `true` if a piece of `color` standing on `sq` would be attacked.
///
/// The king of `color` does not block rays, so squares behind it along a
/// checking line count as attacked.
pub fn is_attacked(board: &Board, sq: Square, color: Color) -> bool {
    let enemy = color.flip();
    let enemy_king_adjacent = sq.king_moves().into_iter().any(|near| {
        board
            .piece_at(near)
            .is_some_and(|p| p.color() == enemy && p.kind() == PieceKind::King)
    });
    if enemy_king_adjacent || offset_attackers(board, sq, color).next().is_some() {
        return true;
    }

    Direction::ALL.into_iter().any(|direction| {
        for next in sq.ray(direction) {
            let Some(piece) = board.piece_at(next) else {
                continue;
            };
            if piece.color() == color {
                if piece.kind() == PieceKind::King {
                    continue;
                }
                return false;
            }
            return piece.kind().threatens_ray(direction.is_diagonal());
        }
        false
    })
}

/// Enemy knights and pawns that attack a piece of `color` on `sq`.
fn offset_attackers(board: &Board, sq: Square, color: Color) -> impl Iterator<Item = Square> + '_ {
    let enemy = color.flip();
    let knights = sq
        .knight_moves()
        .into_iter()
        .filter(move |&from| {
            board
                .piece_at(from)
                .is_some_and(|p| p.color() == enemy && p.kind() == PieceKind::Knight)
        });
    let pawns = color
        .pawn_captures()
        .into_iter()
        .filter_map(move |direction| sq.step(direction).ok())
        .filter(move |&from| {
            board
                .piece_at(from)
                .is_some_and(|p| p.color() == enemy && p.kind() == PieceKind::Pawn)
        });
    knights.chain(pawns)
}
