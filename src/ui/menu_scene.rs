//! Game-select menu screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Flappy,
    TicTacToe,
    Quit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::Flappy, MenuEntry::TicTacToe, MenuEntry::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Flappy => "Flappy Bird",
            MenuEntry::TicTacToe => "Tic-Tac-Toe",
            MenuEntry::Quit => "Quit",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            MenuEntry::Flappy => "Thread the pipes. Space flaps.",
            MenuEntry::TicTacToe => "Two players, one keyboard.",
            MenuEntry::Quit => "Leave the arcade.",
        }
    }
}

/// Menu screen state: just the highlighted row.
pub struct MenuScreen {
    pub selected_index: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        self.selected_index = (self.selected_index + 1).min(MenuEntry::ALL.len() - 1);
    }

    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected_index]
    }

    /// Draw the menu centered in `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Arcade ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "ARCADE",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, entry) in MenuEntry::ALL.iter().enumerate() {
            let is_selected = i == self.selected_index;
            let marker = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, entry.label()),
                style,
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            MenuEntry::ALL[self.selected_index].blurb(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Up/Down] Select  [Enter] Play  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )));

        let content_height = lines.len() as u16;
        let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;
        let text = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(
            text,
            Rect::new(inner.x, y_offset, inner.width, content_height),
        );
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
