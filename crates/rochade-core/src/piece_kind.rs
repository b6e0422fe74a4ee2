//! Chess piece kinds.

use std::fmt;
use std::str::FromStr;

/// The kind of a chess piece, without color information.
///
/// An empty square is represented by the absence of a piece, not by a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds, most valuable first.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Letter used in algebraic notation. Pawns have none.
    #[inline]
    pub const fn notation(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Queen => "Q",
            PieceKind::Rook => "R",
            PieceKind::Bishop => "B",
            PieceKind::Knight => "N",
            PieceKind::Pawn => "",
        }
    }

    /// Lowercase full name, e.g. `"knight"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Standard material worth: pawn 1, minor pieces 3, rook 5, queen 9, king 0.
    #[inline]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 9,
            PieceKind::Rook => 5,
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Pawn => 1,
        }
    }

    /// Return `true` if this kind attacks along a ray of the given shape.
    #[inline]
    pub const fn threatens_ray(self, diagonal: bool) -> bool {
        match self {
            PieceKind::Queen => true,
            PieceKind::Rook => !diagonal,
            PieceKind::Bishop => diagonal,
            PieceKind::King | PieceKind::Knight | PieceKind::Pawn => false,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a piece name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown piece name: \"{0}\"")]
pub struct UnknownPieceName(pub String);

impl FromStr for PieceKind {
    type Err = UnknownPieceName;

    /// Parse a full piece name, ignoring case (`"Queen"`, `"knight"`).
    fn from_str(s: &str) -> Result<PieceKind, UnknownPieceName> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPieceName(s.to_string()))
    }
}
