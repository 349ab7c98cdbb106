use crate::config::EngineConfig;
use super::win_detector::WIN_LENGTH;

// The search enumerates the full game tree, which stays tractable only
// up to 4x4.
pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSettings {
    pub board_size: usize,
}

impl TicTacToeSettings {
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if self.board_size < WIN_LENGTH {
            return Err(format!(
                "Board size ({}) cannot be smaller than win length ({})",
                self.board_size, WIN_LENGTH
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
        }
    }
}

impl From<&EngineConfig> for TicTacToeSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            board_size: config.board_size,
        }
    }
}
