mod config;
mod game_ui;
mod offline;
mod stats;

use std::time::Duration;

use clap::Parser;
use common::config::FileContentConfigProvider;
use common::games::SessionRng;
use common::tictactoe::{Difficulty, TicTacToeSession};
use common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use config::{get_config_manager, ConfigManager};
use offline::play_games;
use stats::StatsRecorder;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, medium, hard or pvp. Defaults to the last difficulty played.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    /// Do not write results to the stats file.
    #[arg(long)]
    no_stats: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let mut config = config_manager.get_config()?;

    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let seed = args.seed.unwrap_or_else(rand::random);
    log!("Starting {} game (seed {})", difficulty, seed);

    let mut recorder = if args.no_stats || !config.stats.save {
        StatsRecorder::in_memory()
    } else {
        StatsRecorder::load(FileContentConfigProvider::new(config.stats.location.as_str()))?
    };

    let session = TicTacToeSession::new(difficulty, SessionRng::new(seed));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();
    let bot_delay = Duration::from_millis(config.bot_delay_ms);

    let session = play_games(session, &mut recorder, &mut lines, &mut stdout, bot_delay).await?;

    if session.difficulty() != config.difficulty {
        config.difficulty = session.difficulty();
        if let Err(e) = config_manager.set_config(&config) {
            log!("Failed to save config: {}", e);
        }
    }

    log!("Goodbye");
    Ok(())
}
