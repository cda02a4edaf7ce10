use std::collections::BTreeMap;

use chrono::Local;
use common::config::{ConfigContentProvider, ConfigSerializer, YamlConfigSerializer};
use common::tictactoe::{Difficulty, GameRecord, Mark, Outcome, ResultRecorder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCounts {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ResultCounts {
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Persistent history of finished games.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    /// Games the human won against the computer.
    #[serde(default)]
    pub cpu_defeats: u32,
    #[serde(default)]
    pub by_difficulty: BTreeMap<Difficulty, ResultCounts>,
    #[serde(default)]
    pub last_played: Option<String>,
}

impl GameStats {
    pub fn games_played(&self) -> u32 {
        self.by_difficulty.values().map(ResultCounts::total).sum()
    }

    pub fn counts(&self, difficulty: Difficulty) -> ResultCounts {
        self.by_difficulty.get(&difficulty).copied().unwrap_or_default()
    }

    pub fn apply(&mut self, record: &GameRecord) {
        if record.outcome == Outcome::Ongoing {
            return;
        }

        let counts = self.by_difficulty.entry(record.difficulty).or_default();
        match record.outcome {
            Outcome::Winner(Mark::X) => counts.x_wins += 1,
            Outcome::Winner(_) => counts.o_wins += 1,
            Outcome::Draw => counts.draws += 1,
            Outcome::Ongoing => {}
        }
        if record.is_player_win() {
            self.cpu_defeats += 1;
        }
        self.last_played = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
    }
}

/// Records finished games, writing them through `store` when one is set.
pub struct StatsRecorder<P: ConfigContentProvider> {
    store: Option<P>,
    serializer: YamlConfigSerializer,
    stats: GameStats,
}

impl<P: ConfigContentProvider> StatsRecorder<P> {
    pub fn load(store: P) -> Result<Self, String> {
        let serializer = YamlConfigSerializer::new();
        let stats: GameStats = match store.get_config_content()? {
            Some(content) => serializer
                .deserialize(&content)
                .map_err(|e| format!("Stats file is corrupt: {}", e))?,
            None => GameStats::default(),
        };

        Ok(Self {
            store: Some(store),
            serializer,
            stats,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            store: None,
            serializer: YamlConfigSerializer::new(),
            stats: GameStats::default(),
        }
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }
}

impl<P: ConfigContentProvider> ResultRecorder for StatsRecorder<P> {
    fn record_result(&mut self, record: &GameRecord) -> Result<(), String> {
        self.stats.apply(record);

        if let Some(store) = &self.store {
            let content = self.serializer.serialize(&self.stats)?;
            store.set_config_content(&content)?;
        }
        Ok(())
    }
}
