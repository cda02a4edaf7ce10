mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIZE};
pub use bot_controller::{
    calculate_minimax_move, calculate_move, calculate_random_move, find_best_move, minimax,
};
pub use game_state::TicTacToeGameState;
pub use session::{GameRecord, ResultRecorder, TicTacToeSession};
pub use types::{Difficulty, Mark, Outcome, Position, WinningLine, BOT_MARK, HUMAN_MARK};
pub use win_detector::{evaluate, winning_line, WIN_LINES};
