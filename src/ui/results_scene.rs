//! End screen: the cold journey back and final standings.

use super::game_common::render_status_bar;
use crate::game::Game;
use crate::scoring::ReturnTier;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_results(frame: &mut Frame, area: Rect, game: &Game) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Final Stage: Cold Journey Back ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Scoring rule
            Constraint::Min(4),    // Standings
            Constraint::Length(3), // Winner
            Constraint::Length(2), // Controls
        ])
        .split(inner);

    let rule = Paragraph::new(format!("Scoring: {}", game.scoring.name()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(rule, chunks[0]);

    let standings = game.standings.as_deref().unwrap_or(&[]);
    let lines: Vec<Line> = standings
        .iter()
        .map(|s| {
            let color = match s.tier {
                ReturnTier::DidNotSurvive => Color::LightRed,
                ReturnTier::BarelyMadeIt | ReturnTier::Weary => Color::Yellow,
                ReturnTier::StrongAndQuick | ReturnTier::Healthy => Color::Green,
            };
            Line::from(vec![
                Span::styled(
                    format!("{}. ", s.rank),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    s.name.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(": {} gold", s.gold),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  (health {}, time {})  ", s.health, s.time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(s.message.as_str(), Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let winner_text = match game.winner() {
        Some(w) => format!("🏆 The winner is {}!", w.name),
        None => "No one made it back.".to_string(),
    };
    let winner = Paragraph::new(winner_text)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(winner, chunks[2]);

    render_status_bar(
        frame,
        chunks[3],
        "",
        Color::DarkGray,
        &[("[Enter]", "Play Again"), ("[Esc]", "Quit")],
    );
}
