use std::io::Write;
use std::time::Duration;

use common::debug_log;
use common::tictactoe::TicTacToeSession;
use tokio::io::{AsyncBufRead, Lines};

use crate::game_ui::{describe_outcome, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum HumanCommand {
    Cell(usize),
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> HumanCommand {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return HumanCommand::Quit;
    }
    match trimmed.parse::<usize>() {
        Ok(number) if (1..=9).contains(&number) => HumanCommand::Cell(number - 1),
        _ => HumanCommand::Invalid(format!(
            "Enter a cell number from 1 to 9 (got '{}')",
            trimmed
        )),
    }
}

pub(crate) fn io_error(e: std::io::Error) -> String {
    format!("Terminal I/O failed: {}", e)
}

/// Plays one game to completion or until the player quits.
///
/// The session is handed back so the caller can record the result and
/// restart it.
pub async fn run_tictactoe_game<R, W>(
    mut session: TicTacToeSession,
    input: &mut Lines<R>,
    out: &mut W,
    bot_delay: Duration,
) -> Result<(TicTacToeSession, GameEnd), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}\n", render_board(session.state())).map_err(io_error)?;

    loop {
        if session.state().is_over() {
            let outcome = session.state().outcome();
            let against_bot = session.difficulty().uses_bot();
            writeln!(out, "{}", describe_outcome(outcome, against_bot)).map_err(io_error)?;
            return Ok((session, GameEnd::Finished));
        }

        if session.is_bot_turn() {
            if !bot_delay.is_zero() {
                tokio::time::sleep(bot_delay).await;
            }

            let (returned, result) = tokio::task::spawn_blocking(move || {
                let result = session.play_bot_turn();
                (session, result)
            })
            .await
            .map_err(|e| format!("Bot task failed: {}", e))?;
            session = returned;

            let index = result?;
            debug_log!("{} bot played cell {}", session.difficulty(), index + 1);
            writeln!(out, "Computer plays {}\n", index + 1).map_err(io_error)?;
            writeln!(out, "{}\n", render_board(session.state())).map_err(io_error)?;
            continue;
        }

        write!(out, "{} to move (1-9, q to quit): ", session.human_mark()).map_err(io_error)?;
        out.flush().map_err(io_error)?;

        let Some(line) = input
            .next_line()
            .await
            .map_err(|e| format!("Failed to read input: {}", e))?
        else {
            return Ok((session, GameEnd::Quit));
        };

        match parse_command(&line) {
            HumanCommand::Quit => return Ok((session, GameEnd::Quit)),
            HumanCommand::Invalid(message) => writeln!(out, "{}", message).map_err(io_error)?,
            HumanCommand::Cell(index) => match session.play_human_move(index) {
                Ok(_) => {
                    writeln!(out, "\n{}\n", render_board(session.state())).map_err(io_error)?
                }
                Err(e) => writeln!(out, "{}", e).map_err(io_error)?,
            },
        }
    }
}
