//! UI rendering for Flappy Bird.
//!
//! The core simulates in a fixed 800x600 world; this scene maps every
//! terminal cell back into world coordinates and tests what occupies it.

use crate::games::flappy::{
    FlappyGame, GROUND_HEIGHT, PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::ui::game_common::{
    create_game_layout, render_game_over_overlay, render_sidebar_frame, render_status_bar,
    GameLayout, GameResultType,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the Flappy Bird scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if game.over {
        render_flappy_game_over(frame, area, game);
        return;
    }

    let GameLayout {
        board,
        status,
        sidebar,
    } = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 20);

    render_play_area(frame, board, game);
    render_status_bar_content(frame, status, game);
    render_sidebar(frame, sidebar, game);
}

/// Render the scaled play area: sky, ground strip, pipes, and the bird.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let bird = game.bird_rect();
    let ground_top = SCREEN_HEIGHT - GROUND_HEIGHT;

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        // Sample the world at the center of each terminal cell.
        let world_y = ((display_row as f64 + 0.5) / height as f64 * SCREEN_HEIGHT as f64) as i32;

        let mut spans = Vec::with_capacity(width);
        for display_col in 0..width {
            let world_x = ((display_col as f64 + 0.5) / width as f64 * SCREEN_WIDTH as f64) as i32;

            if world_x >= bird.x
                && world_x < bird.x + bird.width
                && world_y >= bird.y
                && world_y < bird.y + bird.height
            {
                let glyph = if game.bird_vel < 0 {
                    "▲"
                } else if game.bird_vel > 3 {
                    "▼"
                } else {
                    "►"
                };
                spans.push(Span::styled(
                    glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            if world_y >= ground_top {
                spans.push(Span::styled("▓", Style::default().fg(Color::DarkGray)));
                continue;
            }

            let in_pipe = game.pipes.iter().any(|pipe| {
                world_x >= pipe.x
                    && world_x < pipe.x + PIPE_WIDTH
                    && (world_y < pipe.top_height || world_y >= pipe.top_height + PIPE_GAP)
            });
            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if !game.started {
        render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space]", "Flap"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space]", "Flap"), ("[Esc]", "Menu")],
        );
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_sidebar_frame(frame, area, " Score ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            if game.started { " Flying" } else { " Ready" },
            Style::default().fg(Color::Cyan),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_flappy_game_over(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let message = if game.score > 0 && game.score == game.high_score {
        format!("Score: {} - a new best!", game.score)
    } else {
        format!("Score: {}   Best: {}", game.score, game.high_score)
    };
    render_game_over_overlay(
        frame,
        area,
        GameResultType::Loss,
        "GAME OVER",
        &message,
        "[Space] Play again  [Esc] Menu",
    );
}
