use std::cmp::Reverse;

use rand::prelude::*;

use crate::board::{Board, Color, Move};

/// 1 if the destination is occupied before the move, else 0.
fn capture_score(board: &Board, mv: &Move) -> u8 {
    u8::from(board.piece_at(mv.to).is_some())
}

/// Pick a legal move for `color`, preferring captures: shuffle the legal
/// moves, then stable-sort them by capture score. The shuffle makes the
/// choice uniform within the capture tier and within the quiet tier; the
/// sort must stay stable or that uniformity is lost.
///
/// Returns `None` when there is no legal move; the caller then consults
/// `game_status` to tell checkmate from stalemate.
pub fn select_move(board: &Board, color: Color) -> Option<Move> {
    let mut moves = board.generate_legal_moves(color);
    if moves.is_empty() {
        return None;
    }
    let mut rng = rand::thread_rng();
    moves.shuffle(&mut rng);
    moves.sort_by_key(|m| Reverse(capture_score(board, m)));
    Some(moves[0])
}
