//! Roster entry screen.

use crate::constants::MAX_PLAYERS;
use crate::game::{validate_name, Game, NameError};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SetupScreen {
    pub names: [String; MAX_PLAYERS],
    pub focused: usize,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            names: Default::default(),
            focused: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % MAX_PLAYERS;
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + MAX_PLAYERS - 1) % MAX_PLAYERS;
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.names[self.focused].push(c);
    }

    pub fn handle_backspace(&mut self) {
        self.names[self.focused].pop();
    }

    /// Names typed so far, in slot order. Blank slots are skipped.
    pub fn entered_names(&self) -> Vec<String> {
        self.names
            .iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect()
    }

    /// Why the name typed in `slot` would be skipped. Blank slots are fine,
    /// and a name repeated from an earlier slot counts as taken.
    pub fn field_error(&self, slot: usize) -> Option<NameError> {
        let name = self.names.get(slot)?.trim();
        if name.is_empty() {
            return None;
        }
        if let Err(reason) = validate_name(name) {
            return Some(reason);
        }
        self.names[..slot]
            .iter()
            .any(|earlier| earlier.trim().eq_ignore_ascii_case(name))
            .then_some(NameError::Taken)
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, game: &Game) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),                      // Title
                Constraint::Length(2),                      // Intro
                Constraint::Length(3 * MAX_PLAYERS as u16), // Name fields
                Constraint::Length(2),                      // Scoring rule
                Constraint::Min(0),                         // Name problems
                Constraint::Length(3),                      // Controls
            ])
            .split(area);

        let title = Paragraph::new("Treasure Hunt - Multiplayer Adventure")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let intro = Paragraph::new(format!(
            "Enter names for up to {} players. Invalid or repeated names are skipped.",
            MAX_PLAYERS
        ))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
        f.render_widget(intro, chunks[1]);

        let field_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3); MAX_PLAYERS])
            .split(chunks[2]);

        for (i, name) in self.names.iter().enumerate() {
            let focused = i == self.focused;
            let text = if focused {
                format!("{}_", name)
            } else {
                name.clone()
            };
            let border = if focused {
                Color::Yellow
            } else if self.field_error(i).is_some() {
                Color::Red
            } else {
                Color::DarkGray
            };
            let field = Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border))
                        .title(format!(" Player {} Name ", i + 1)),
                )
                .style(Style::default().fg(Color::White));
            f.render_widget(field, field_rows[i]);
        }

        let rule = Paragraph::new(Line::from(vec![
            Span::styled("Scoring: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.scoring.name(), Style::default().fg(Color::Cyan)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(rule, chunks[3]);

        let problems: Vec<Line> = (0..MAX_PLAYERS)
            .filter_map(|i| {
                let reason = self.field_error(i)?;
                Some(Line::from(Span::styled(
                    format!("Player {}: {}", i + 1, reason),
                    Style::default().fg(Color::LightRed),
                )))
            })
            .collect();
        f.render_widget(
            Paragraph::new(problems).alignment(Alignment::Center),
            chunks[4],
        );

        let controls = Paragraph::new("[Tab/↑↓] Switch field    [Enter] Start Game    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[5]);
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}
