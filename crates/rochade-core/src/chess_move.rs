//! Move intents: a normal move between two squares, a resignation, or a draw offer.
//!
//! A normal move stores only where a piece goes and, optionally, what it
//! promotes to. Whether it castles, captures en passant or promotes is never
//! stored; see [`classify`](crate::classify::classify).

use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// All promotion pieces, queen first.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Lowercase letter used in coordinate text (`e7e8q`).
    pub const fn coordinate_char(self) -> char {
        match self {
            PromotionPiece::Queen => 'q',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Knight => 'n',
        }
    }

    fn from_coordinate_char(c: char) -> Option<PromotionPiece> {
        PromotionPiece::ALL
            .into_iter()
            .find(|p| p.coordinate_char() == c.to_ascii_lowercase())
    }
}

impl TryFrom<PieceKind> for PromotionPiece {
    type Error = MoveError;

    fn try_from(kind: PieceKind) -> Result<PromotionPiece, MoveError> {
        match kind {
            PieceKind::Queen => Ok(PromotionPiece::Queen),
            PieceKind::Rook => Ok(PromotionPiece::Rook),
            PieceKind::Bishop => Ok(PromotionPiece::Bishop),
            PieceKind::Knight => Ok(PromotionPiece::Knight),
            PieceKind::King | PieceKind::Pawn => Err(MoveError::InvalidPromotion { kind }),
        }
    }
}

/// A piece moving from one square to another.
///
/// Both squares are valid and distinct by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalMove {
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
}

impl NormalMove {
    /// Create a move without a promotion piece.
    pub fn new(from: Square, to: Square) -> Result<NormalMove, MoveError> {
        if from == to {
            return Err(MoveError::SameSquare { square: from });
        }
        Ok(NormalMove {
            from,
            to,
            promotion: None,
        })
    }

    /// Return the same move with a promotion piece chosen.
    pub const fn with_promotion(self, promotion: PromotionPiece) -> NormalMove {
        NormalMove {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The chosen promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }
}

impl FromStr for NormalMove {
    type Err = MoveError;

    /// Parse coordinate text: `e2e4`, or `e7e8q` with a promotion letter.
    fn from_str(s: &str) -> Result<NormalMove, MoveError> {
        let malformed = || MoveError::Malformed { text: s.to_string() };
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(malformed());
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        let mv = NormalMove::new(from, to)?;
        match s[4..].chars().next() {
            None => Ok(mv),
            Some(c) => PromotionPiece::from_coordinate_char(c)
                .map(|p| mv.with_promotion(p))
                .ok_or_else(malformed),
        }
    }
}

impl fmt::Display for NormalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.coordinate_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for NormalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalMove({})", self)
    }
}

/// What a player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move a piece.
    Normal(NormalMove),
    /// Give up; the opponent wins.
    Resignation,
    /// Offer a draw, which ends the game drawn.
    DrawOffer,
}

impl Move {
    /// Shorthand for a normal move without promotion.
    pub fn normal(from: Square, to: Square) -> Result<Move, MoveError> {
        NormalMove::new(from, to).map(Move::Normal)
    }
}

impl From<NormalMove> for Move {
    fn from(mv: NormalMove) -> Move {
        Move::Normal(mv)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal(mv) => write!(f, "{mv}"),
            Move::Resignation => f.write_str("resign"),
            Move::DrawOffer => f.write_str("draw"),
        }
    }
}
