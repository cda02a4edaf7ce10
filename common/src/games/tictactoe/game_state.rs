use super::board::{Board, BOARD_SIZE};
use super::types::{Mark, Outcome, WinningLine};
use super::win_detector::{evaluate, winning_line};

/// Board plus turn bookkeeping for one game. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub last_move: Option<usize>,
    outcome: Outcome,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            last_move: None,
            outcome: Outcome::Ongoing,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<Outcome, String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("Not {}'s turn", mark));
        }

        if index >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty_at(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, mark);
        self.last_move = Some(index);
        self.outcome = evaluate(&self.board);

        if !self.is_over() {
            self.switch_turn();
        }

        Ok(self.outcome)
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }
}
