use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mark played by the CPU opponent. The search maximizes for this side.
pub const BOT_MARK: Mark = Mark::O;

/// Mark played by the human. The search minimizes for this side.
pub const HUMAN_MARK: Mark = Mark::X;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Classification of a board. Always derived from the cells, never stored
/// on its own by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Winner(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "in progress"),
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    #[serde(rename = "pvp")]
    PlayerVsPlayer,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::PlayerVsPlayer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::PlayerVsPlayer => "pvp",
        }
    }

    /// Whether the CPU opponent takes part at all.
    pub fn uses_bot(&self) -> bool {
        !matches!(self, Difficulty::PlayerVsPlayer)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown difficulty '{}', expected one of: easy, medium, hard, pvp",
                    s
                )
            })
    }
}

/// Row/column view of a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= super::BOARD_SIZE {
            return None;
        }
        Some(Self::new(index / 3, index % 3))
    }

    pub fn to_index(&self) -> Option<usize> {
        if self.row >= 3 || self.col >= 3 {
            return None;
        }
        Some(self.row * 3 + self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        Position::new(self.cells[0] / 3, self.cells[0] % 3)
    }

    pub fn end(&self) -> Position {
        Position::new(self.cells[2] / 3, self.cells[2] % 3)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_parses_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("pvp".parse::<Difficulty>(), Ok(Difficulty::PlayerVsPlayer));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_name_round_trips_through_parse() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_only_pvp_disables_bot() {
        assert!(Difficulty::Easy.uses_bot());
        assert!(Difficulty::Medium.uses_bot());
        assert!(Difficulty::Hard.uses_bot());
        assert!(!Difficulty::PlayerVsPlayer.uses_bot());
    }

    #[test]
    fn test_position_index_mapping() {
        assert_eq!(Position::from_index(0), Some(Position::new(0, 0)));
        assert_eq!(Position::from_index(5), Some(Position::new(1, 2)));
        assert_eq!(Position::from_index(8), Some(Position::new(2, 2)));
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::new(2, 1).to_index(), Some(7));
        assert_eq!(Position::new(3, 0).to_index(), None);
    }

    #[test]
    fn test_outcome_is_terminal() {
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Winner(Mark::X).is_terminal());
    }
}
