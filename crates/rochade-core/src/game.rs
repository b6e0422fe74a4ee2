//! A game in progress: the board plus the analysis of the side to move.
//!
//! Every applied move mutates the board and then re-runs check analysis and
//! move generation for the next side, so queries never recompute anything.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, BoardChange};
use crate::castle_rights::CastleRights;
use crate::check::{CheckStatus, analyze};
use crate::chess_move::{Move, NormalMove, PromotionPiece};
use crate::classify::{MoveKind, classify, en_passant_victim};
use crate::color::Color;
use crate::movegen::{LegalMoves, generate};
use crate::notation::algebraic;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The halfmove clock value beyond which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u16 = 100;

/// Where a game stands after a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    StillPlaying,
    WhiteWon,
    BlackWon,
    Draw,
    /// The attempted move was rejected; nothing changed.
    IllegalMove,
}

impl GameStatus {
    /// The status in which `color` has won.
    #[inline]
    pub const fn won_by(color: Color) -> GameStatus {
        match color {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }

    /// Return `true` if the game has ended.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::WhiteWon | GameStatus::BlackWon | GameStatus::Draw)
    }

    /// Score text of a finished game: `1-0`, `0-1` or `1/2-1/2`.
    #[inline]
    pub const fn result_text(self) -> Option<&'static str> {
        match self {
            GameStatus::WhiteWon => Some("1-0"),
            GameStatus::BlackWon => Some("0-1"),
            GameStatus::Draw => Some("1/2-1/2"),
            GameStatus::StillPlaying | GameStatus::IllegalMove => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::StillPlaying => "playing",
            GameStatus::WhiteWon => "white-won",
            GameStatus::BlackWon => "black-won",
            GameStatus::Draw => "draw",
            GameStatus::IllegalMove => "illegal",
        })
    }
}

/// The result of [`Game::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub status: GameStatus,
    /// The side to move next, `None` once the game is over.
    pub to_move: Option<Color>,
    /// Notation of the applied move, or the score text when the game ended
    /// without a board change.
    pub notation: Option<String>,
    /// Squares changed by the move, in application order.
    pub changes: Option<Vec<BoardChange>>,
}

impl MoveOutcome {
    fn finished(status: GameStatus) -> MoveOutcome {
        MoveOutcome {
            status,
            to_move: None,
            notation: status.result_text().map(str::to_string),
            changes: None,
        }
    }
}

/// A chess game: the board, the cached analysis for the side to move, and the
/// current status.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    check: CheckStatus,
    legal: LegalMoves,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard position with White to move.
    ///
    /// The board is set up as if Black had just moved; preparing the next
    /// move hands the turn to White and analyzes White's options.
    pub fn new() -> Game {
        let mut board = Board::starting_position();
        board.set_side_to_move(Color::Black);
        let mut game = Game::from_board(board);
        game.prepare_next_move();
        game
    }

    /// Start a game from an arbitrary board, analyzed for its side to move.
    pub fn from_board(board: Board) -> Game {
        let check = analyze(&board, board.side_to_move());
        let legal = generate(&board, &check);
        let status = status_of(&check, &legal);
        Game {
            board,
            check,
            legal,
            status,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn field(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks and pins against the side to move.
    #[inline]
    pub fn check_status(&self) -> &CheckStatus {
        &self.check
    }

    #[inline]
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal
    }

    /// Legal destinations of the piece on `sq`; empty for empty squares,
    /// enemy pieces and pieces that cannot move.
    pub fn legal_destinations(&self, sq: Square) -> BTreeSet<Square> {
        self.legal.destinations(sq).cloned().unwrap_or_default()
    }

    /// Return `true` if the legal move `from`-`to` promotes a pawn, so the
    /// caller should ask which piece to promote to.
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        if !self.legal.contains(from, to) {
            return false;
        }
        NormalMove::new(from, to)
            .is_ok_and(|mv| matches!(classify(mv, &self.board), MoveKind::Promotion { .. }))
    }

    /// Material balance from the side to move's perspective.
    #[inline]
    pub fn material_balance(&self) -> i32 {
        self.board.material_balance()
    }

    /// Apply a move intent. Illegal moves, and any move once the game is
    /// over, leave the game unchanged.
    pub fn apply(&mut self, mv: Move) -> MoveOutcome {
        if self.status.is_terminal() {
            return self.reject(mv);
        }
        match mv {
            Move::Normal(mv) => self.apply_normal(mv),
            Move::Resignation => {
                let loser = self.side_to_move();
                self.finish(GameStatus::won_by(loser.flip()));
                info!(color = %loser, "resigned");
                MoveOutcome::finished(self.status)
            }
            Move::DrawOffer => {
                self.finish(GameStatus::Draw);
                info!(color = %self.side_to_move(), "draw agreed");
                MoveOutcome::finished(self.status)
            }
        }
    }

    fn apply_normal(&mut self, mv: NormalMove) -> MoveOutcome {
        if !self.legal.contains(mv.from(), mv.to()) {
            return self.reject(mv.into());
        }
        let Some(mover) = self.board.piece_at(mv.from()) else {
            return self.reject(mv.into());
        };

        let kind = classify(mv, &self.board);
        let mv = match (kind, mv.promotion()) {
            (MoveKind::Promotion { .. }, None) => mv.with_promotion(PromotionPiece::Queen),
            (MoveKind::Promotion { .. }, Some(_)) | (_, None) => mv,
            (_, Some(_)) => return self.reject(mv.into()),
        };
        let notation = algebraic(&self.board, mv);

        if mover.kind() == PieceKind::Pawn || kind.is_capture() || kind.castle_side().is_some() {
            self.board.set_halfmove_clock(0);
        } else {
            let clock = self.board.halfmove_clock().saturating_add(1);
            self.board.set_halfmove_clock(clock);
            if clock > FIFTY_MOVE_LIMIT {
                self.finish(GameStatus::Draw);
                info!(%notation, clock, "fifty-move rule");
                return MoveOutcome::finished(self.status);
            }
        }

        let changes = change_list(&self.board, mv, kind, mover);
        let rights = updated_rights(self.board.castling(), mv, mover);

        self.board.apply_changes(&changes);
        self.board.set_castling(rights);
        self.board.push_history(mv);
        self.prepare_next_move();

        debug!(from = %mv.from(), to = %mv.to(), %notation, status = %self.status, "applied move");
        if self.status.is_terminal() {
            info!(status = %self.status, in_check = self.check.in_check(), "game over");
        }

        MoveOutcome {
            status: self.status,
            to_move: (!self.status.is_terminal()).then_some(self.side_to_move()),
            notation: Some(notation),
            changes: Some(changes),
        }
    }

    fn reject(&self, mv: Move) -> MoveOutcome {
        debug!(%mv, status = %self.status, "illegal move");
        MoveOutcome {
            status: GameStatus::IllegalMove,
            to_move: Some(self.side_to_move()),
            notation: None,
            changes: None,
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.legal = LegalMoves::default();
    }

    /// Hand the turn to the other side and rebuild the cached analysis.
    fn prepare_next_move(&mut self) {
        let next = self.board.side_to_move().flip();
        self.board.set_side_to_move(next);
        self.check = analyze(&self.board, next);
        self.legal = generate(&self.board, &self.check);
        self.status = status_of(&self.check, &self.legal);
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

/// Checkmate when the side without moves is in check, stalemate otherwise.
fn status_of(check: &CheckStatus, legal: &LegalMoves) -> GameStatus {
    if !legal.is_empty() {
        GameStatus::StillPlaying
    } else if check.in_check() {
        GameStatus::won_by(check.color().flip())
    } else {
        GameStatus::Draw
    }
}

/// Ordered square updates for `mv`: en passant victim, origin, destination,
/// then the castling rook's origin and destination.
fn change_list(board: &Board, mv: NormalMove, kind: MoveKind, mover: Piece) -> Vec<BoardChange> {
    let us = mover.color();
    let mut changes = Vec::with_capacity(4);

    if kind == MoveKind::EnPassant {
        if let Some(victim) = en_passant_victim(board, mv.from(), mv.to()) {
            changes.push(BoardChange::clear(victim));
        }
    }
    changes.push(BoardChange::clear(mv.from()));
    let placed = match mv.promotion() {
        Some(promotion) => Piece::new(promotion.to_piece_kind(), us),
        None => mover,
    };
    changes.push(BoardChange::place(mv.to(), placed));
    if let Some(side) = kind.castle_side() {
        let (rook_from, rook_to) = side.rook_squares(us);
        changes.push(BoardChange::clear(rook_from));
        changes.push(BoardChange::place(rook_to, Piece::new(PieceKind::Rook, us)));
    }
    changes
}

/// A king move loses both of its side's rights; leaving or landing on a rook's
/// home corner loses that corner's right.
fn updated_rights(rights: CastleRights, mv: NormalMove, mover: Piece) -> CastleRights {
    let rights = if mover.kind() == PieceKind::King {
        rights.remove_color(mover.color())
    } else {
        rights
    };
    rights
        .remove(CastleRights::for_corner(mv.from()))
        .remove(CastleRights::for_corner(mv.to()))
}

#[cfg(test)]
mod tests {
    use super::{Game, GameStatus, MoveOutcome};
    use crate::board::{Board, BoardChange};
    use crate::chess_move::{Move, NormalMove};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn play(game: &mut Game, from: Square, to: Square) -> MoveOutcome {
        game.apply(Move::normal(from, to).unwrap())
    }

    #[test]
    fn new_game_white_to_move() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::StillPlaying);
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.field(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(game.material_balance(), 0);
    }

    #[test]
    fn normal_move_outcome() {
        let mut game = Game::new();
        let outcome = play(&mut game, Square::E2, Square::E4);
        assert_eq!(outcome.status, GameStatus::StillPlaying);
        assert_eq!(outcome.to_move, Some(Color::Black));
        assert_eq!(outcome.notation.as_deref(), Some("e4"));
        assert_eq!(
            outcome.changes,
            Some(vec![
                BoardChange::clear(Square::E2),
                BoardChange::place(Square::E4, Piece::WHITE_PAWN),
            ])
        );
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.board().history().len(), 1);
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut game = Game::new();
        let before = game.board().clone();
        let outcome = play(&mut game, Square::E2, Square::E5);
        assert_eq!(outcome.status, GameStatus::IllegalMove);
        assert_eq!(outcome.to_move, Some(Color::White));
        assert_eq!(outcome.notation, None);
        assert_eq!(outcome.changes, None);
        assert_eq!(game.board(), &before);
        assert_eq!(game.status(), GameStatus::StillPlaying);
    }

    #[test]
    fn moving_the_opponents_piece_is_illegal() {
        let mut game = Game::new();
        assert_eq!(play(&mut game, Square::E7, Square::E5).status, GameStatus::IllegalMove);
    }

    #[test]
    fn promotion_piece_on_ordinary_move_is_illegal() {
        let mut game = Game::new();
        let mv = NormalMove::new(Square::E2, Square::E4)
            .unwrap()
            .with_promotion(crate::chess_move::PromotionPiece::Rook);
        assert_eq!(game.apply(Move::Normal(mv)).status, GameStatus::IllegalMove);
    }

    #[test]
    fn resignation_and_draw_offer() {
        let mut game = Game::new();
        let outcome = game.apply(Move::Resignation);
        assert_eq!(outcome.status, GameStatus::BlackWon);
        assert_eq!(outcome.to_move, None);
        assert_eq!(outcome.notation.as_deref(), Some("0-1"));
        assert_eq!(outcome.changes, None);
        assert_eq!(play(&mut game, Square::E2, Square::E4).status, GameStatus::IllegalMove);

        let mut game = Game::new();
        let outcome = game.apply(Move::DrawOffer);
        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(outcome.notation.as_deref(), Some("1/2-1/2"));
        assert_eq!(game.board(), Game::new().board());
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let board = Board::empty(Color::White)
            .with_piece(Square::A1, Piece::WHITE_KING)
            .with_piece(Square::H8, Piece::BLACK_KING)
            .with_piece(Square::C7, Piece::WHITE_PAWN);
        let mut game = Game::from_board(board);
        assert!(game.is_promotion(Square::C7, Square::C8));
        assert!(!game.is_promotion(Square::A1, Square::A2));
        let outcome = play(&mut game, Square::C7, Square::C8);
        assert_eq!(outcome.notation.as_deref(), Some("c8Q"));
        assert_eq!(game.field(Square::C8), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn status_texts() {
        assert_eq!(GameStatus::WhiteWon.result_text(), Some("1-0"));
        assert_eq!(GameStatus::StillPlaying.result_text(), None);
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::IllegalMove.is_terminal());
    }
}
