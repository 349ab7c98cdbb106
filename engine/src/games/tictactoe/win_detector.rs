use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Run length that wins the game. Always 3, independent of board size:
/// on a 4×4 board, 3-in-a-row anywhere wins.
pub const WIN_LENGTH: usize = 3;

pub fn check_win(board: &Board, win_count: usize) -> Option<Mark> {
    check_win_with_line(board, win_count).map(|line| line.mark)
}

/// Scans every cell as the start of a horizontal, vertical or diagonal
/// run. At most one winner is reachable through legal play, so the scan
/// returns the first completed run it finds.
pub fn check_win_with_line(board: &Board, win_count: usize) -> Option<WinningLine> {
    let size = board.size();
    let last = win_count - 1;

    for y in 0..size {
        for x in 0..size {
            let mark = board.cell(x, y);
            if mark == Mark::Empty {
                continue;
            }

            if check_horizontal(board, x, y, mark, win_count) {
                return Some(WinningLine::new(
                    mark,
                    Position::new(x, y),
                    Position::new(x + last, y),
                ));
            }
            if check_vertical(board, x, y, mark, win_count) {
                return Some(WinningLine::new(
                    mark,
                    Position::new(x, y),
                    Position::new(x, y + last),
                ));
            }
            if check_diagonal_down_right(board, x, y, mark, win_count) {
                return Some(WinningLine::new(
                    mark,
                    Position::new(x, y),
                    Position::new(x + last, y + last),
                ));
            }
            if check_diagonal_down_left(board, x, y, mark, win_count) {
                return Some(WinningLine::new(
                    mark,
                    Position::new(x, y),
                    Position::new(x - last, y + last),
                ));
            }
        }
    }

    None
}

fn check_horizontal(board: &Board, x: usize, y: usize, mark: Mark, win_count: usize) -> bool {
    if x + win_count > board.size() {
        return false;
    }

    (0..win_count).all(|i| board.cell(x + i, y) == mark)
}

fn check_vertical(board: &Board, x: usize, y: usize, mark: Mark, win_count: usize) -> bool {
    if y + win_count > board.size() {
        return false;
    }

    (0..win_count).all(|i| board.cell(x, y + i) == mark)
}

fn check_diagonal_down_right(
    board: &Board,
    x: usize,
    y: usize,
    mark: Mark,
    win_count: usize,
) -> bool {
    if x + win_count > board.size() || y + win_count > board.size() {
        return false;
    }

    (0..win_count).all(|i| board.cell(x + i, y + i) == mark)
}

fn check_diagonal_down_left(
    board: &Board,
    x: usize,
    y: usize,
    mark: Mark,
    win_count: usize,
) -> bool {
    if x + 1 < win_count || y + win_count > board.size() {
        return false;
    }

    (0..win_count).all(|i| board.cell(x - i, y + i) == mark)
}
