//! UI rendering for Tic-Tac-Toe.

use crate::games::tictactoe::{Mark, RoundOutcome, TicTacToeGame, BOARD_SIDE};
use crate::ui::game_common::{
    create_game_layout, render_game_over_banner, render_sidebar_frame, render_status_bar,
    GameLayout, GameResultType,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Cyan,
        Mark::O => Color::LightRed,
    }
}

/// Render the Tic-Tac-Toe scene. When the round is decided the board stays
/// visible (with the winning line highlighted) under a result banner.
pub fn render_tictactoe(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let GameLayout {
        board,
        status,
        sidebar,
    } = create_game_layout(frame, area, " Tic-Tac-Toe ", Color::Cyan, 20);

    render_board(frame, board, game);
    render_status_bar_content(frame, status, game);
    render_sidebar(frame, sidebar, game);

    if game.outcome.is_some() {
        render_round_banner(frame, board, game);
    }
}

/// Draw the 3x3 grid with box-drawing separators, centered in `area`.
fn render_board(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    // Each cell renders 3 wide, rows separated by rules: 11x5 total.
    let board_width = (BOARD_SIDE * 3 + BOARD_SIDE - 1) as u16;
    let board_height = (BOARD_SIDE * 2 - 1) as u16;
    let x_offset = area.x + area.width.saturating_sub(board_width) / 2;
    let y_offset = area.y + area.height.saturating_sub(board_height) / 2;

    for row in 0..BOARD_SIDE {
        let mut spans = Vec::new();
        for col in 0..BOARD_SIDE {
            let cell = row * BOARD_SIDE + col;
            let is_cursor = game.cursor == cell && game.outcome.is_none();
            let is_winning = game.is_winning_cell(cell);

            let (symbol, mut style) = match game.board[cell] {
                Some(mark) => (
                    format!(" {} ", mark.symbol()),
                    Style::default()
                        .fg(mark_color(mark))
                        .add_modifier(Modifier::BOLD),
                ),
                None => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
            };
            if is_winning {
                style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD);
            } else if is_cursor {
                style = style.bg(Color::DarkGray).fg(Color::White);
            }

            spans.push(Span::styled(symbol, style));
            if col < BOARD_SIDE - 1 {
                spans.push(Span::styled("│", Style::default().fg(Color::Gray)));
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y_offset + (row * 2) as u16, board_width, 1),
        );

        if row < BOARD_SIDE - 1 {
            let rule = Line::from(Span::styled(
                "───┼───┼───",
                Style::default().fg(Color::Gray),
            ));
            frame.render_widget(
                Paragraph::new(rule),
                Rect::new(x_offset, y_offset + (row * 2 + 1) as u16, board_width, 1),
            );
        }
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    if game.outcome.is_some() {
        // The banner carries the result; keep the bar quiet.
        render_status_bar(frame, area, "", Color::White, &[]);
        return;
    }

    render_status_bar(
        frame,
        area,
        &format!("{}'s turn", game.turn.symbol()),
        mark_color(game.turn),
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Place"),
            ("[Esc]", "Menu"),
        ],
    );
}

fn render_sidebar(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let inner = render_sidebar_frame(frame, area, " Match ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(
                " X ",
                Style::default()
                    .fg(mark_color(Mark::X))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("wins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.x_wins.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(
                " O ",
                Style::default()
                    .fg(mark_color(Mark::O))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("wins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.o_wins.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Moves: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.moves.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " [N] New game",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_round_banner(frame: &mut Frame, area: Rect, game: &TicTacToeGame) {
    let (result_type, title, message) = match game.outcome {
        Some(RoundOutcome::Won(mark)) => (
            GameResultType::Win,
            match mark {
                Mark::X => "X WINS",
                Mark::O => "O WINS",
            },
            "the round goes on the board",
        ),
        Some(RoundOutcome::Draw) => (GameResultType::Draw, "DRAW", "nobody takes this one"),
        None => return,
    };

    render_game_over_banner(
        frame,
        area,
        result_type,
        title,
        message,
        "[Any key] Next round  [N] New game  [Esc] Menu",
    );
}
