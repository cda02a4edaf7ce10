use common::config::Validate;
use common::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, StatsConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 5000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    /// Pause before the computer moves, so its reply is visible.
    pub bot_delay_ms: u64,
    pub stats: StatsConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        self.stats.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            bot_delay_ms: 500,
            stats: StatsConfig::default(),
        }
    }
}
