//! Game logic for Tic-Tac-Toe.

use super::types::{Mark, RoundOutcome, TicTacToeGame, BOARD_CELLS, WIN_LINES};

/// Input actions for Tic-Tac-Toe (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeInput {
    Up,
    Down,
    Left,
    Right,
    /// Place the current mark at the cursor (Enter or Space).
    Place,
    /// Restart the round, keeping the scoreboard (R).
    Restart,
    /// Zero the scoreboard and restart (N).
    NewGame,
    /// Any other key.
    Other,
}

/// Process a key input. While a round is decided, any key starts the next
/// round; `NewGame` additionally clears the scoreboard first.
pub fn process_input(game: &mut TicTacToeGame, input: TicTacToeInput) {
    if game.outcome.is_some() {
        match input {
            TicTacToeInput::NewGame => game.new_game(),
            _ => game.reset(),
        }
        return;
    }

    match input {
        TicTacToeInput::Up => game.move_cursor(-1, 0),
        TicTacToeInput::Down => game.move_cursor(1, 0),
        TicTacToeInput::Left => game.move_cursor(0, -1),
        TicTacToeInput::Right => game.move_cursor(0, 1),
        TicTacToeInput::Place => {
            play(game, game.cursor);
        }
        TicTacToeInput::Restart => game.reset(),
        TicTacToeInput::NewGame => game.new_game(),
        TicTacToeInput::Other => {}
    }
}

/// Place the current turn's mark at `cell`. Returns false without touching
/// any state when the cell is out of range, occupied, or the round is
/// already decided. After a valid move, checks for a win, then a draw,
/// then passes the turn.
pub fn play(game: &mut TicTacToeGame, cell: usize) -> bool {
    if game.outcome.is_some() || !game.is_open_cell(cell) {
        return false;
    }

    let mark = game.turn;
    game.board[cell] = Some(mark);
    game.moves += 1;

    if let Some(line) = winning_line(&game.board, mark) {
        match mark {
            Mark::X => game.x_wins += 1,
            Mark::O => game.o_wins += 1,
        }
        game.winning_line = Some(line);
        game.outcome = Some(RoundOutcome::Won(mark));
    } else if game.moves as usize == BOARD_CELLS {
        game.outcome = Some(RoundOutcome::Draw);
    } else {
        game.turn = mark.opponent();
    }
    true
}

/// First line fully held by `mark`, in the fixed scan order.
fn winning_line(board: &[Option<Mark>; BOARD_CELLS], mark: Mark) -> Option<[usize; 3]> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&cell| board[cell] == Some(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut TicTacToeGame, cells: &[usize]) {
        for &cell in cells {
            assert!(play(game, cell), "move at {cell} should be accepted");
        }
    }

    #[test]
    fn test_play_marks_and_alternates() {
        let mut game = TicTacToeGame::new();
        assert!(play(&mut game, 0));
        assert_eq!(game.board[0], Some(Mark::X));
        assert_eq!(game.turn, Mark::O);
        assert!(play(&mut game, 1));
        assert_eq!(game.board[1], Some(Mark::O));
        assert_eq!(game.turn, Mark::X);
        assert_eq!(game.moves, 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = TicTacToeGame::new();
        play(&mut game, 4);
        let before = game.clone();
        assert!(!play(&mut game, 4));
        assert_eq!(game.board, before.board);
        assert_eq!(game.turn, before.turn);
        assert_eq!(game.moves, before.moves);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = TicTacToeGame::new();
        assert!(!play(&mut game, 9));
        assert!(!play(&mut game, usize::MAX));
        assert_eq!(game.moves, 0);
        assert_eq!(game.turn, Mark::X);
    }

    #[test]
    fn test_row_win() {
        let mut game = TicTacToeGame::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.outcome, Some(RoundOutcome::Won(Mark::X)));
        assert_eq!(game.winning_line, Some([0, 1, 2]));
        assert_eq!(game.x_wins, 1);
        assert_eq!(game.o_wins, 0);
    }

    #[test]
    fn test_column_win_for_o() {
        let mut game = TicTacToeGame::new();
        // X: 0, 1, 6 / O completes the right column [2,5,8].
        play_all(&mut game, &[0, 2, 1, 5, 6, 8]);
        assert_eq!(game.outcome, Some(RoundOutcome::Won(Mark::O)));
        assert_eq!(game.winning_line, Some([2, 5, 8]));
        assert_eq!(game.o_wins, 1);
        assert_eq!(game.x_wins, 0);
    }

    #[test]
    fn test_diagonal_win_scenario() {
        // X->0, O->1, X->4, O->2, X->8: X wins through the main diagonal.
        let mut game = TicTacToeGame::new();
        play_all(&mut game, &[0, 1, 4, 2, 8]);
        assert_eq!(game.outcome, Some(RoundOutcome::Won(Mark::X)));
        assert_eq!(game.winning_line, Some([0, 4, 8]));
        assert_eq!(game.x_wins, 1);

        game.reset();
        assert!(game.board.iter().all(|c| c.is_none()));
        assert_eq!(game.x_wins, 1);
    }

    #[test]
    fn test_draw_after_nine_moves() {
        let mut game = TicTacToeGame::new();
        // X: 0, 8, 7, 2, 3 / O: 4, 1, 6, 5 -- no line completes.
        play_all(&mut game, &[0, 4, 8, 1, 7, 6, 2, 5, 3]);
        assert_eq!(game.moves, 9);
        assert_eq!(game.outcome, Some(RoundOutcome::Draw));
        assert!(game.winning_line.is_none());
        assert_eq!(game.x_wins, 0);
        assert_eq!(game.o_wins, 0);
    }

    #[test]
    fn test_no_moves_after_decided() {
        let mut game = TicTacToeGame::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert!(!play(&mut game, 5));
        assert!(game.board[5].is_none());
        assert_eq!(game.moves, 5);
    }

    #[test]
    fn test_win_on_final_move_beats_draw() {
        let mut game = TicTacToeGame::new();
        // X: 0, 2, 4, 5 / O: 1, 3, 7, 8, then X takes 6 for [2,4,6].
        play_all(&mut game, &[0, 1, 2, 3, 4, 7, 5, 8, 6]);
        assert_eq!(game.moves, 9);
        assert_eq!(game.outcome, Some(RoundOutcome::Won(Mark::X)));
        assert_eq!(game.winning_line, Some([2, 4, 6]));
        assert_eq!(game.x_wins, 1);
    }

    #[test]
    fn test_turn_frozen_once_decided() {
        let mut game = TicTacToeGame::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        // X just won; the turn stays on X rather than toggling.
        assert_eq!(game.turn, Mark::X);
    }

    #[test]
    fn test_process_input_cursor_and_place() {
        let mut game = TicTacToeGame::new();
        process_input(&mut game, TicTacToeInput::Up);
        assert_eq!(game.cursor, 1);
        process_input(&mut game, TicTacToeInput::Left);
        assert_eq!(game.cursor, 0);
        process_input(&mut game, TicTacToeInput::Place);
        assert_eq!(game.board[0], Some(Mark::X));
        // Placing again on the same cell is ignored.
        process_input(&mut game, TicTacToeInput::Place);
        assert_eq!(game.turn, Mark::O);
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn test_process_input_any_key_restarts_decided_round() {
        let mut game = TicTacToeGame::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        process_input(&mut game, TicTacToeInput::Other);
        assert!(game.outcome.is_none());
        assert!(game.board.iter().all(|c| c.is_none()));
        assert_eq!(game.x_wins, 1);
    }

    #[test]
    fn test_process_input_new_game_after_decided() {
        let mut game = TicTacToeGame::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        process_input(&mut game, TicTacToeInput::NewGame);
        assert!(game.outcome.is_none());
        assert_eq!(game.x_wins, 0);
    }
}
