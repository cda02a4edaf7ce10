use crate::games::SessionRng;
use super::board::Board;
use super::types::{Difficulty, Mark, Outcome, BOT_MARK, HUMAN_MARK};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Picks the CPU's next cell for the given difficulty.
///
/// Must only be called on an `Ongoing` board with the CPU (`O`) to move.
/// A full board yields `None`; other terminal boards are not checked.
/// `PlayerVsPlayer` never produces a move.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        // Coin is flipped on every call, not once per game.
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_random_move(board, rng)
            } else {
                calculate_minimax_move(board)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board),
        Difficulty::PlayerVsPlayer => None,
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(board: &Board) -> Option<usize> {
    let mut working = *board;
    find_best_move(&mut working)
}

/// Searches in place and leaves `board` exactly as it was passed in.
///
/// Ties keep the lowest index: only a strictly greater score replaces the
/// current best.
pub fn find_best_move(board: &mut Board) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        board.set(index, BOT_MARK);
        let score = minimax(board, 0, false);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exhaustive game-tree score from the CPU's point of view.
///
/// Wins score `10 - depth` and losses `depth - 10`, so a quicker win and a
/// later loss are both preferred.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Winner(mark) if mark == BOT_MARK => return WIN_SCORE - depth as i32,
        Outcome::Winner(_) => return depth as i32 - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let mover: Mark = if is_maximizing { BOT_MARK } else { HUMAN_MARK };

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            board.set(index, mover);
            let eval = minimax(board, depth + 1, false);
            board.clear(index);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            board.set(index, mover);
            let eval = minimax(board, depth + 1, true);
            board.clear(index);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
