//! Key-event dispatch: maps crossterm key events onto the game cores and
//! the menu, keeping the event loop free of per-game key tables.

use crate::games::flappy::{self, FlappyGame, FlappyInput};
use crate::games::tictactoe::{self, TicTacToeGame, TicTacToeInput};
use crate::ui::menu_scene::{MenuEntry, MenuScreen};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Result of handling a key inside a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Stay in the game.
    Continue,
    /// Leave the game and return to the menu.
    ReturnToMenu,
}

/// Handle a key on the menu screen. Returns the activated entry, if any.
pub fn handle_menu_key(key: KeyEvent, menu: &mut MenuScreen) -> Option<MenuEntry> {
    match key.code {
        KeyCode::Up => menu.navigate_up(),
        KeyCode::Down => menu.navigate_down(),
        KeyCode::Enter => return Some(menu.selected()),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(MenuEntry::Quit),
        _ => {}
    }
    None
}

/// Handle a key while Flappy Bird is on screen.
pub fn handle_flappy_key<R: Rng>(key: KeyEvent, game: &mut FlappyGame, rng: &mut R) -> InputResult {
    let input = match key.code {
        KeyCode::Esc => return InputResult::ReturnToMenu,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => FlappyInput::Flap,
        KeyCode::Char('r') | KeyCode::Char('R') => FlappyInput::Restart,
        _ => FlappyInput::Other,
    };
    flappy::logic::process_input(game, input, rng);
    InputResult::Continue
}

/// Handle a key while Tic-Tac-Toe is on screen.
pub fn handle_tictactoe_key(key: KeyEvent, game: &mut TicTacToeGame) -> InputResult {
    let input = match key.code {
        KeyCode::Esc => return InputResult::ReturnToMenu,
        KeyCode::Up => TicTacToeInput::Up,
        KeyCode::Down => TicTacToeInput::Down,
        KeyCode::Left => TicTacToeInput::Left,
        KeyCode::Right => TicTacToeInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => TicTacToeInput::Place,
        KeyCode::Char('r') | KeyCode::Char('R') => TicTacToeInput::Restart,
        KeyCode::Char('n') | KeyCode::Char('N') => TicTacToeInput::NewGame,
        _ => TicTacToeInput::Other,
    };
    tictactoe::logic::process_input(game, input);
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_menu_navigation_and_select() {
        let mut menu = MenuScreen::new();
        assert_eq!(handle_menu_key(key(KeyCode::Down), &mut menu), None);
        assert_eq!(
            handle_menu_key(key(KeyCode::Enter), &mut menu),
            Some(MenuEntry::TicTacToe)
        );
        assert_eq!(
            handle_menu_key(key(KeyCode::Char('q')), &mut menu),
            Some(MenuEntry::Quit)
        );
    }

    #[test]
    fn test_esc_leaves_flappy() {
        let mut rng = rand::thread_rng();
        let mut game = FlappyGame::new(&mut rng);
        let result = handle_flappy_key(key(KeyCode::Esc), &mut game, &mut rng);
        assert_eq!(result, InputResult::ReturnToMenu);
    }

    #[test]
    fn test_space_flaps() {
        let mut rng = rand::thread_rng();
        let mut game = FlappyGame::new(&mut rng);
        game.started = true;
        let result = handle_flappy_key(key(KeyCode::Char(' ')), &mut game, &mut rng);
        assert_eq!(result, InputResult::Continue);
        assert_eq!(game.bird_vel, flappy::FLAP_IMPULSE);
    }

    #[test]
    fn test_arrows_move_board_cursor() {
        let mut game = TicTacToeGame::new();
        handle_tictactoe_key(key(KeyCode::Right), &mut game);
        assert_eq!(game.cursor, 5);
        let result = handle_tictactoe_key(key(KeyCode::Esc), &mut game);
        assert_eq!(result, InputResult::ReturnToMenu);
    }
}
