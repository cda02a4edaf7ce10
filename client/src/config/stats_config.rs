use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StatsConfig {
    pub save: bool,
    pub location: String,
}

impl Validate for StatsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.save && self.location.trim().is_empty() {
            return Err("stats location must not be empty when saving is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            save: true,
            location: "tictactoe_stats.yaml".to_string(),
        }
    }
}
