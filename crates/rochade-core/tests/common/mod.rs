//! Shared helpers for the integration tests.

#![allow(dead_code)]

use rochade_core::{Board, CastleRights, Color, Game, Move, MoveOutcome, Piece, PieceKind, Square};

/// Build a game from the piece-placement field of a diagram string, rank 8
/// first (`"8/8/8/8/8/8/8/4K2k"`), with the given side to move and rights.
pub fn position(placement: &str, side: Color, castling: CastleRights) -> Game {
    let mut board = Board::empty(side).with_castling(castling);
    for (rank_index, rank) in placement.split('/').enumerate() {
        let row = 7 - rank_index as u8;
        let mut column = 0u8;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                column += skip as u8;
                continue;
            }
            let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
            let kind = match c.to_ascii_lowercase() {
                'k' => PieceKind::King,
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                'p' => PieceKind::Pawn,
                other => panic!("unexpected piece letter {other:?} in {placement}"),
            };
            let sq = Square::from_coords(column, row).expect("placement stays on the board");
            board = board.with_piece(sq, Piece::new(kind, color));
            column += 1;
        }
    }
    Game::from_board(board)
}

/// Apply a sequence of coordinate moves, asserting each one is accepted.
pub fn play_all(game: &mut Game, moves: &[&str]) -> MoveOutcome {
    let mut last = None;
    for text in moves {
        let outcome = play(game, text);
        assert_ne!(
            outcome.status,
            rochade_core::GameStatus::IllegalMove,
            "{text} was rejected"
        );
        last = Some(outcome);
    }
    last.expect("at least one move")
}

/// Apply a single coordinate move such as `"e2e4"` or `"e7e8n"`.
pub fn play(game: &mut Game, text: &str) -> MoveOutcome {
    let mv = text.parse().expect("valid coordinate move");
    game.apply(Move::Normal(mv))
}
