use common::tictactoe::{Mark, Outcome, TicTacToeGameState};

/// Renders the board with empty cells numbered 1-9 and the winning line in
/// brackets.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let mut rows = Vec::with_capacity(3);

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let mark = state.board.get(index).unwrap_or(Mark::Empty);
                let symbol = match mark {
                    Mark::Empty => (index + 1).to_string(),
                    _ => mark.to_string(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn describe_outcome(outcome: Outcome, against_bot: bool) -> String {
    match outcome {
        Outcome::Ongoing => "Game in progress".to_string(),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Winner(Mark::X) if against_bot => "You win!".to_string(),
        Outcome::Winner(Mark::O) if against_bot => "The computer wins.".to_string(),
        Outcome::Winner(mark) => format!("{} wins!", mark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let state = TicTacToeGameState::new();
        assert_eq!(
            render_board(&state),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4, 2] {
            let mark = state.current_mark;
            state.place_mark(mark, index).unwrap();
        }
        let rendered = render_board(&state);
        assert!(rendered.starts_with("[X]|[X]|[X]\n"), "{}", rendered);
        assert!(rendered.contains(" O | O | 6 "), "{}", rendered);
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(describe_outcome(Outcome::Winner(Mark::X), true), "You win!");
        assert_eq!(describe_outcome(Outcome::Winner(Mark::O), true), "The computer wins.");
        assert_eq!(describe_outcome(Outcome::Winner(Mark::O), false), "O wins!");
        assert_eq!(describe_outcome(Outcome::Draw, false), "It's a draw!");
    }
}
