use super::board::Board;
use super::types::{GameStatus, Mark};
use super::win_detector::{WIN_LENGTH, check_win};

/// Terminal classification of a position. Never cached anywhere, always
/// recomputed from the board.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        Some(Mark::Empty) => unreachable!(),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

pub fn winner(board: &Board) -> Option<Mark> {
    check_win(board, WIN_LENGTH)
}

pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// +1 when X has won, -1 when O has won, 0 otherwise. A 0 on its own
/// does not distinguish a draw from an undecided position; check
/// [`is_terminal`] first.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        _ => 0,
    }
}
