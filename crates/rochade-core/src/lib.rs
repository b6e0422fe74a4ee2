//! Chess rules: board state, check and pin analysis, legal move generation,
//! and a move applier that reports the game status after every move.

mod board;
mod castle_rights;
mod check;
mod chess_move;
mod classify;
mod color;
mod direction;
mod error;
mod game;
mod movegen;
mod notation;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, BoardChange, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use check::{CheckFinding, CheckStatus, analyze, is_attacked};
pub use chess_move::{Move, NormalMove, PromotionPiece};
pub use classify::{MoveKind, classify};
pub use color::Color;
pub use direction::Direction;
pub use error::{BoundaryError, MoveError, SquareError};
pub use game::{FIFTY_MOVE_LIMIT, Game, GameStatus, MoveOutcome};
pub use movegen::{LegalMoves, generate};
pub use notation::algebraic;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::{PieceKind, UnknownPieceName};
pub use square::Square;
