use crate::games::SessionRng;
use super::bot_controller::calculate_move;
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark, Outcome, BOT_MARK, HUMAN_MARK};

/// Summary of a finished game handed to a [`ResultRecorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub difficulty: Difficulty,
    pub outcome: Outcome,
    pub seed: u64,
}

impl GameRecord {
    /// The human beat the CPU. Never true in player-vs-player games.
    pub fn is_player_win(&self) -> bool {
        self.difficulty.uses_bot() && self.outcome == Outcome::Winner(HUMAN_MARK)
    }

    pub fn is_player_loss(&self) -> bool {
        self.difficulty.uses_bot() && self.outcome == Outcome::Winner(BOT_MARK)
    }
}

pub trait ResultRecorder {
    fn record_result(&mut self, record: &GameRecord) -> Result<(), String>;
}

/// One seat for the human (X) and one for the CPU (O), or two humans in
/// player-vs-player mode.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            difficulty,
            rng,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.difficulty.uses_bot() && !self.state.is_over() && self.state.current_mark == BOT_MARK
    }

    /// Mark the next human move will place.
    pub fn human_mark(&self) -> Mark {
        if self.difficulty.uses_bot() {
            HUMAN_MARK
        } else {
            self.state.current_mark
        }
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<Outcome, String> {
        if self.is_bot_turn() {
            return Err("Waiting for the computer to move".to_string());
        }
        let mark = self.human_mark();
        self.state.place_mark(mark, index)
    }

    /// Asks the engine for the CPU move and applies it. Returns the chosen cell.
    pub fn play_bot_turn(&mut self) -> Result<usize, String> {
        if !self.is_bot_turn() {
            return Err("It is not the computer's turn".to_string());
        }

        let index = calculate_move(self.difficulty, &self.state.board, &mut self.rng)
            .ok_or_else(|| format!("No move available for {} bot", self.difficulty))?;

        self.state.place_mark(BOT_MARK, index)?;
        Ok(index)
    }

    pub fn restart(&mut self) {
        self.state.restart();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Reports a finished game. Returns `Ok(None)` while the game is still running.
    pub fn finish<R: ResultRecorder>(&self, recorder: &mut R) -> Result<Option<GameRecord>, String> {
        if !self.state.is_over() {
            return Ok(None);
        }

        let record = GameRecord {
            difficulty: self.difficulty,
            outcome: self.state.outcome(),
            seed: self.rng.seed(),
        };
        recorder.record_result(&record)?;
        Ok(Some(record))
    }
}
