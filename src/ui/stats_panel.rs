use crate::constants::MAX_HEALTH;
use crate::hunt::Player;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the active player's card and the roster beneath it
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, active: &Player, roster: &[Player]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Health gauge
            Constraint::Length(7), // Gold, time, location, inventory
            Constraint::Min(0),    // Roster
        ])
        .split(area);

    draw_health(frame, chunks[0], active);
    draw_details(frame, chunks[1], active);
    draw_roster(frame, chunks[2], active, roster);
}

fn health_color(health: i32) -> Color {
    match health {
        h if h > 50 => Color::Green,
        h if h > 25 => Color::Yellow,
        _ => Color::Red,
    }
}

fn draw_health(frame: &mut Frame, area: Rect, player: &Player) {
    let health = player.display_health();
    let label = format!("Health: {}/{}", health, MAX_HEALTH);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(player.name.as_str()),
        )
        .gauge_style(
            Style::default()
                .fg(health_color(health))
                .add_modifier(Modifier::BOLD),
        )
        .label(label)
        .ratio(player.health_ratio());

    frame.render_widget(gauge, area);
}

fn draw_details(frame: &mut Frame, area: Rect, player: &Player) {
    let location = player.location.map(|p| p.name()).unwrap_or("Base camp");
    let inventory = if player.inventory.is_empty() {
        "empty".to_string()
    } else {
        player
            .inventory
            .items()
            .iter()
            .map(|item| item.name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Gold: ", Style::default().fg(Color::DarkGray)),
            Span::styled(player.gold.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                player.time.to_string(),
                Style::default().fg(if player.time > 50 {
                    Color::Cyan
                } else {
                    Color::LightRed
                }),
            ),
        ]),
        Line::from(vec![
            Span::styled("Location: ", Style::default().fg(Color::DarkGray)),
            Span::styled(location, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Pack: ", Style::default().fg(Color::DarkGray)),
            Span::styled(inventory, Style::default().fg(Color::Magenta)),
        ]),
    ];

    let details =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(details, area);
}

fn draw_roster(frame: &mut Frame, area: Rect, active: &Player, roster: &[Player]) {
    let lines: Vec<Line> = roster
        .iter()
        .map(|p| {
            let marker = if p.name == active.name { "▶ " } else { "  " };
            let progress = match p.stage.number() {
                Some(n) => format!("stage {}/5", n),
                None => "done".to_string(),
            };
            let style = if p.complete {
                Style::default().fg(Color::DarkGray)
            } else if p.name == active.name {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(
                format!("{}{} ({})", marker, p.name, progress),
                style,
            ))
        })
        .collect();

    let roster_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Expedition"));
    frame.render_widget(roster_widget, area);
}
