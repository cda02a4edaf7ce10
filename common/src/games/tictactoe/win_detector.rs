use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

/// Rows top-to-bottom, columns left-to-right, main diagonal, anti-diagonal.
/// Scan order decides which line is reported when more than one is complete.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

/// Total over any board; legality of the position is not checked.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = winning_line(board) {
        return Outcome::Winner(line.mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
