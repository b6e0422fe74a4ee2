//! The board state: piece placement, side to move, castling rights, the
//! halfmove clock, and the log of applied moves.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::chess_move::NormalMove;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One square's new content after a move. `piece == None` clears the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardChange {
    pub square: Square,
    pub piece: Option<Piece>,
}

impl BoardChange {
    /// A change that empties `square`.
    #[inline]
    pub const fn clear(square: Square) -> BoardChange {
        BoardChange { square, piece: None }
    }

    /// A change that puts `piece` on `square`.
    #[inline]
    pub const fn place(square: Square, piece: Piece) -> BoardChange {
        BoardChange {
            square,
            piece: Some(piece),
        }
    }
}

/// Complete chess position state.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Content of each square, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Remaining castling rights.
    castling: CastleRights,
    /// Half-moves since the last pawn move, capture or castle.
    halfmove_clock: u16,
    /// Every normal move applied so far, oldest first.
    history: Vec<NormalMove>,
}

impl Board {
    /// Return the standard starting position with White to move.
    pub fn starting_position() -> Board {
        let mut board = Board::empty(Color::White).with_castling(CastleRights::ALL);
        for color in Color::ALL {
            for (column, kind) in (0u8..).zip(BACK_RANK) {
                if let Some(sq) = Square::from_coords(column, color.back_row()) {
                    board.set(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::from_coords(column, color.pawn_row()) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    /// Return an empty board with no castling rights.
    pub fn empty(side_to_move: Color) -> Board {
        Board {
            cells: [None; Square::COUNT],
            side_to_move,
            castling: CastleRights::NONE,
            halfmove_clock: 0,
            history: Vec::new(),
        }
    }

    /// Builder: place `piece` on `sq`.
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.set(sq, Some(piece));
        self
    }

    /// Builder: replace the castling rights.
    pub fn with_castling(mut self, rights: CastleRights) -> Board {
        self.castling = rights;
        self
    }

    /// Builder: start the halfmove clock at `clock`.
    pub fn with_halfmove_clock(mut self, clock: u16) -> Board {
        self.halfmove_clock = clock;
        self
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Return `true` if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Return the square of the king of `color`, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Every normal move applied so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[NormalMove] {
        &self.history
    }

    /// The most recently applied move.
    #[inline]
    pub fn last_move(&self) -> Option<NormalMove> {
        self.history.last().copied()
    }

    /// Signed material sum (White positive), from the perspective of the
    /// side to move.
    pub fn material_balance(&self) -> i32 {
        let balance: i32 = self.cells.iter().flatten().map(|p| p.signed_value()).sum();
        match self.side_to_move {
            Color::White => balance,
            Color::Black => -balance,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Apply changes in order; later changes to the same square win.
    pub(crate) fn apply_changes(&mut self, changes: &[BoardChange]) {
        for change in changes {
            self.set(change.square, change.piece);
        }
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn push_history(&mut self, mv: NormalMove) {
        self.history.push(mv);
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("side_to_move", &self.side_to_move)
            .field("castling", &self.castling)
            .field("halfmove_clock", &self.halfmove_clock)
            .field("moves", &self.history.len())
            .finish_non_exhaustive()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 first.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0u8..8).rev() {
            write!(f, "{}  ", row + 1)?;
            for column in 0u8..8 {
                let c = Square::from_coords(column, row)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', Piece::symbol);
                if column < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
