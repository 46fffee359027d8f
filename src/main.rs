use arcade::games::flappy::{self, FlappyGame, TICK_INTERVAL_MS};
use arcade::games::tictactoe::TicTacToeGame;
use arcade::games::ActiveGame;
use arcade::input::{self, InputResult};
use arcade::ui::menu_scene::{MenuEntry, MenuScreen};
use arcade::ui::{flappy_scene, tictactoe_scene};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Menu,
    Playing(ActiveGame),
}

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut menu = MenuScreen::new();
    let mut screen = Screen::Menu;
    let mut last_tick = Instant::now();

    // Main loop
    loop {
        // Screen transitions are applied after the match so arms can keep
        // their borrows simple.
        let mut next_screen: Option<Screen> = None;

        match &mut screen {
            Screen::Menu => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    menu.draw(frame, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        match input::handle_menu_key(key_event, &mut menu) {
                            Some(MenuEntry::Flappy) => {
                                next_screen = Some(Screen::Playing(ActiveGame::Flappy(
                                    FlappyGame::new(&mut rng),
                                )));
                                last_tick = Instant::now();
                            }
                            Some(MenuEntry::TicTacToe) => {
                                next_screen = Some(Screen::Playing(ActiveGame::TicTacToe(
                                    TicTacToeGame::new(),
                                )));
                            }
                            Some(MenuEntry::Quit) => break,
                            None => {}
                        }
                    }
                }
            }

            Screen::Playing(ActiveGame::Flappy(game)) => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    flappy_scene::render_flappy(frame, area, game);
                })?;

                // Short poll so the tick cadence stays on time.
                if event::poll(Duration::from_millis(5))? {
                    if let Event::Key(key_event) = event::read()? {
                        if input::handle_flappy_key(key_event, game, &mut rng)
                            == InputResult::ReturnToMenu
                        {
                            next_screen = Some(Screen::Menu);
                        }
                    }
                }

                if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
                    flappy::logic::process_tick(game, &mut rng);
                    last_tick = Instant::now();
                }
            }

            Screen::Playing(ActiveGame::TicTacToe(game)) => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    tictactoe_scene::render_tictactoe(frame, area, game);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        if input::handle_tictactoe_key(key_event, game) == InputResult::ReturnToMenu
                        {
                            next_screen = Some(Screen::Menu);
                        }
                    }
                }
            }
        }

        if let Some(next) = next_screen {
            screen = next;
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
