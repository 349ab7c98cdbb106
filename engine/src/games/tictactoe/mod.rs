mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{SearchResult, calculate_minimax_move, calculate_move};
pub use game_state::{is_terminal, status, utility, winner};
pub use settings::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, TicTacToeSettings};
pub use types::{GameStatus, InvalidMove, Mark, Position, WinningLine};
pub use win_detector::{WIN_LENGTH, check_win, check_win_with_line};
