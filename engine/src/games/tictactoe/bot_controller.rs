use crate::games::{BotType, SessionRng};
use super::board::Board;
use super::game_state::{is_terminal, utility};
use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i32,
    pub best_move: Option<Position>,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<Position> {
    if is_terminal(board) {
        return None;
    }

    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => calculate_minimax_move(board),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Exhaustive minimax over the full game tree. Returns `None` iff the
/// position is already terminal. Ties between equally valued moves
/// resolve to the first one in row-major scan order, so repeated calls
/// on the same board return the same move.
pub fn calculate_minimax_move(board: &Board) -> Option<Position> {
    if is_terminal(board) {
        return None;
    }

    let mut scratch = board.clone();
    let result = match board.current_mark() {
        Mark::X => max_value(&mut scratch),
        Mark::O => min_value(&mut scratch),
        Mark::Empty => unreachable!(),
    };

    if let Some(pos) = result.best_move {
        crate::log!("Minimax picked {} with value {}", pos, result.value);
    }
    result.best_move
}

// X maximizes, O minimizes. Both walk every branch to a terminal leaf;
// no pruning or depth limit, which is tractable only because boards are
// capped at 4x4.
fn max_value(board: &mut Board) -> SearchResult {
    if is_terminal(board) {
        return SearchResult {
            value: utility(board),
            best_move: None,
        };
    }

    let mut best_value = i32::MIN;
    let mut best_move = None;
    for pos in board.available_moves() {
        board.place(pos, Mark::X);
        let reply = min_value(board);
        board.clear(pos);

        if reply.value > best_value {
            best_value = reply.value;
            best_move = Some(pos);
        }
    }

    SearchResult {
        value: best_value,
        best_move,
    }
}

fn min_value(board: &mut Board) -> SearchResult {
    if is_terminal(board) {
        return SearchResult {
            value: utility(board),
            best_move: None,
        };
    }

    let mut best_value = i32::MAX;
    let mut best_move = None;
    for pos in board.available_moves() {
        board.place(pos, Mark::O);
        let reply = max_value(board);
        board.clear(pos);

        if reply.value < best_value {
            best_value = reply.value;
            best_move = Some(pos);
        }
    }

    SearchResult {
        value: best_value,
        best_move,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::game_state::{status, winner};
    use super::super::types::GameStatus;

    #[test]
    fn test_minimax_returns_none_on_terminal_boards() {
        let won = Board::from_rows(&["XXX", "OO.", "..."]);
        let drawn = Board::from_rows(&["XOX", "XOO", "OXX"]);

        assert_eq!(calculate_minimax_move(&won), None);
        assert_eq!(calculate_minimax_move(&drawn), None);
    }

    #[test]
    fn test_minimax_returns_some_on_every_non_terminal_board() {
        let boards = [
            Board::new(3),
            Board::from_rows(&["X..", ".O.", "..."]),
            Board::from_rows(&["XX.", "OO.", "..."]),
        ];

        for board in boards {
            assert!(!is_terminal(&board));
            assert!(calculate_minimax_move(&board).is_some());
        }
    }

    #[test]
    fn test_minimax_takes_an_immediate_win() {
        // X completes the top row rather than blocking O.
        let board = Board::from_rows(&["XX.", "OO.", "..."]);

        assert_eq!(calculate_minimax_move(&board), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_minimax_blocks_an_immediate_loss() {
        // O threatens (2, 0); blocking there also forks for X.
        let board = Board::from_rows(&["OO.", ".X.", "..X"]);
        assert_eq!(board.current_mark(), Mark::X);

        assert_eq!(calculate_minimax_move(&board), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_minimax_wins_as_the_minimizing_player() {
        // O to move, completing the top row on the spot.
        let board = Board::from_rows(&["OO.", "XX.", "X.."]);
        assert_eq!(board.current_mark(), Mark::O);

        assert_eq!(calculate_minimax_move(&board), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_minimax_finds_win_on_4x4_endgame() {
        // X has (0,3) and (1,2) on the up-right diagonal; (2,1) wins.
        let board = Board::from_rows(&[
            "..O.",
            "....",
            ".XO.",
            "XO.X",
        ]);
        assert_eq!(board.current_mark(), Mark::X);

        assert_eq!(calculate_minimax_move(&board), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_perfect_play_from_empty_3x3_draws() {
        let mut board = Board::new(3);

        while let Some(pos) = calculate_minimax_move(&board) {
            board = board.apply(pos).unwrap();
        }

        assert_eq!(status(&board), GameStatus::Draw);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_empty_3x3_board_has_value_zero() {
        let mut board = Board::new(3);
        let result = max_value(&mut board);

        assert_eq!(result.value, 0);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_minimax_is_deterministic() {
        let board = Board::from_rows(&["X..", ".O.", "..."]);
        let first = calculate_minimax_move(&board);

        for _ in 0..3 {
            assert_eq!(calculate_minimax_move(&board), first);
        }
    }

    #[test]
    fn test_search_does_not_mutate_the_input_board() {
        let board = Board::from_rows(&["X..", ".O.", "..."]);
        let snapshot = board.clone();

        calculate_minimax_move(&board);

        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_terminal_search_reports_utility_without_a_move() {
        let mut won = Board::from_rows(&["OOO", "XX.", "X.."]);
        let result = max_value(&mut won);

        assert_eq!(result.value, -1);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_random_bot_is_reproducible_under_a_fixed_seed() {
        let board = Board::from_rows(&["X..", ".O.", "..."]);

        let mut first_rng = SessionRng::new(42);
        let mut second_rng = SessionRng::new(42);
        for _ in 0..5 {
            assert_eq!(
                calculate_move(BotType::Random, &board, &mut first_rng),
                calculate_move(BotType::Random, &board, &mut second_rng)
            );
        }
    }

    #[test]
    fn test_random_bot_returns_a_legal_move() {
        let board = Board::from_rows(&["XOX", "OX.", ".O."]);
        let mut rng = SessionRng::from_random();

        for _ in 0..20 {
            let pos = calculate_move(BotType::Random, &board, &mut rng).unwrap();
            assert_eq!(board.get(pos), Some(Mark::Empty));
        }
    }

    #[test]
    fn test_no_bot_moves_on_a_finished_game() {
        let board = Board::from_rows(&["XXX", "OO.", "..."]);
        let mut rng = SessionRng::new(7);

        assert_eq!(calculate_move(BotType::Random, &board, &mut rng), None);
        assert_eq!(calculate_move(BotType::Minimax, &board, &mut rng), None);
    }
}
