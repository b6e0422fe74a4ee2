//! Perft (performance test) for move generation correctness verification.

use crate::chess_move::{Move, NormalMove, PromotionPiece};
use crate::game::Game;
use crate::square::Square;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Each promotion counts once per
/// promotion piece. Depth 1 is bulk-counted without applying moves.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    if depth == 1 {
        return game
            .legal_moves()
            .iter()
            .map(|(from, to)| if game.is_promotion(from, to) { 4 } else { 1 })
            .sum();
    }

    let mut nodes = 0u64;
    for (from, to) in game.legal_moves().iter() {
        for mv in expand(game, from, to) {
            let mut child = game.clone();
            child.apply(Move::Normal(mv));
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = game
        .legal_moves()
        .iter()
        .flat_map(|(from, to)| expand(game, from, to))
        .map(|mv| {
            let mut child = game.clone();
            child.apply(Move::Normal(mv));
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// One move per promotion piece for promotions, otherwise the plain move.
fn expand(game: &Game, from: Square, to: Square) -> Vec<NormalMove> {
    let Ok(mv) = NormalMove::new(from, to) else {
        return Vec::new();
    };
    if game.is_promotion(from, to) {
        PromotionPiece::ALL
            .into_iter()
            .map(|piece| mv.with_promotion(piece))
            .collect()
    } else {
        vec![mv]
    }
}
