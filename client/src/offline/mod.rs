mod tictactoe_runner;

use std::io::Write;
use std::time::Duration;

use common::config::ConfigContentProvider;
use common::tictactoe::{Difficulty, TicTacToeSession};
use common::{debug_log, log};
use tokio::io::{AsyncBufRead, Lines};

use crate::stats::StatsRecorder;
use tictactoe_runner::io_error;

pub use tictactoe_runner::{run_tictactoe_game, GameEnd};

#[derive(Debug, PartialEq, Eq)]
enum NextGame {
    Again(Option<Difficulty>),
    Stop,
}

fn parse_next_game(line: &str) -> NextGame {
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        return NextGame::Again(None);
    }
    match answer.parse::<Difficulty>() {
        Ok(difficulty) => NextGame::Again(Some(difficulty)),
        Err(_) => NextGame::Stop,
    }
}

/// Plays games back to back until the player declines another one.
/// Every finished game is passed to `recorder`.
pub async fn play_games<R, W, P>(
    mut session: TicTacToeSession,
    recorder: &mut StatsRecorder<P>,
    input: &mut Lines<R>,
    out: &mut W,
    bot_delay: Duration,
) -> Result<TicTacToeSession, String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    P: ConfigContentProvider,
{
    loop {
        writeln!(out, "New game, difficulty: {}", session.difficulty()).map_err(io_error)?;

        let (returned, end) = run_tictactoe_game(session, input, out, bot_delay).await?;
        session = returned;

        if end == GameEnd::Quit {
            return Ok(session);
        }

        match session.finish(recorder) {
            Ok(Some(record)) => debug_log!(
                "Recorded {} game: {} (seed {})",
                record.difficulty,
                record.outcome,
                record.seed
            ),
            Ok(None) => {}
            Err(e) => log!("Failed to record game result: {}", e),
        }

        let stats = recorder.stats();
        writeln!(
            out,
            "Games played: {}, computer defeated: {}",
            stats.games_played(),
            stats.cpu_defeats
        )
        .map_err(io_error)?;

        write!(out, "Play again? [y/N, or easy/medium/hard/pvp to switch]: ").map_err(io_error)?;
        out.flush().map_err(io_error)?;

        let Some(line) = input
            .next_line()
            .await
            .map_err(|e| format!("Failed to read input: {}", e))?
        else {
            return Ok(session);
        };

        match parse_next_game(&line) {
            NextGame::Again(difficulty) => {
                if let Some(difficulty) = difficulty {
                    session.set_difficulty(difficulty);
                }
                session.restart();
                writeln!(out).map_err(io_error)?;
            }
            NextGame::Stop => return Ok(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::tictactoe::Mark;
    use tokio::io::{AsyncBufReadExt, BufReader};

    struct NoStore;

    impl ConfigContentProvider for NoStore {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(None)
        }

        fn set_config_content(&self, _content: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_next_game() {
        assert_eq!(parse_next_game("y"), NextGame::Again(None));
        assert_eq!(parse_next_game("YES\n"), NextGame::Again(None));
        assert_eq!(parse_next_game("hard"), NextGame::Again(Some(Difficulty::Hard)));
        assert_eq!(parse_next_game("pvp"), NextGame::Again(Some(Difficulty::PlayerVsPlayer)));
        assert_eq!(parse_next_game(""), NextGame::Stop);
        assert_eq!(parse_next_game("n"), NextGame::Stop);
    }

    #[tokio::test]
    async fn test_records_each_finished_game() {
        let session = TicTacToeSession::new(Difficulty::PlayerVsPlayer, SessionRng::new(1));
        let mut recorder = StatsRecorder::<NoStore>::in_memory();
        let mut lines = BufReader::new("1\n4\n2\n5\n3\ny\n1\n4\n2\n5\n3\nn\n".as_bytes()).lines();
        let mut out = Vec::new();

        let session = play_games(session, &mut recorder, &mut lines, &mut out, Duration::ZERO)
            .await
            .unwrap();

        assert!(session.state().is_over());
        assert_eq!(recorder.stats().games_played(), 2);
        assert_eq!(recorder.stats().counts(Difficulty::PlayerVsPlayer).x_wins, 2);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Games played: 2, computer defeated: 0"), "{}", output);
    }

    #[tokio::test]
    async fn test_switches_difficulty_between_games() {
        let session = TicTacToeSession::new(Difficulty::PlayerVsPlayer, SessionRng::new(1));
        let mut recorder = StatsRecorder::<NoStore>::in_memory();
        let mut lines = BufReader::new("1\n4\n2\n5\n3\nhard\n5\nq\n".as_bytes()).lines();
        let mut out = Vec::new();

        let session = play_games(session, &mut recorder, &mut lines, &mut out, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.state().board.get(4), Some(Mark::X));
        assert_eq!(session.state().board.get(0), Some(Mark::O));
        assert_eq!(recorder.stats().games_played(), 1);
    }

    #[tokio::test]
    async fn test_quit_mid_game_records_nothing() {
        let session = TicTacToeSession::new(Difficulty::Easy, SessionRng::new(1));
        let mut recorder = StatsRecorder::<NoStore>::in_memory();
        let mut lines = BufReader::new("q\n".as_bytes()).lines();
        let mut out = Vec::new();

        play_games(session, &mut recorder, &mut lines, &mut out, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(recorder.stats().games_played(), 0);
    }
}
