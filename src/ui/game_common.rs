//! Shared UI pieces for the hunt screens.

use crate::game::{LogEntry, LogTone};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Layout areas returned by `create_hunt_layout`.
pub struct HuntLayout {
    /// Stage prompt and input widget - top left
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left
    pub status_bar: Rect,
    /// Player card and roster - right side
    pub side_panel: Rect,
    /// Event log - bottom, full width
    pub log: Rect,
}

/// Split the screen for the play phase.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Side ──────┐
/// │   [content area]                │  [player]   │
/// │ [status bar - 2 lines]          │  [roster]   │
/// ├─ Log ───────────────────────────┴─────────────┤
/// │ [event log]                                   │
/// └───────────────────────────────────────────────┘
/// ```
pub fn create_hunt_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    side_panel_width: u16,
    log_height: u16,
) -> HuntLayout {
    frame.render_widget(Clear, area);

    let v_outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(log_height)])
        .split(area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(v_outer[0]);
    frame.render_widget(block, v_outer[0]);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(side_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(h_chunks[0]);

    HuntLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        side_panel: h_chunks[1],
        log: v_outer[1],
    }
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Enter]", "Submit")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

pub fn tone_color(tone: LogTone) -> Color {
    match tone {
        LogTone::Info => Color::Gray,
        LogTone::Good => Color::Green,
        LogTone::Bad => Color::LightRed,
    }
}

/// Render the event log, newest entry at the bottom.
pub fn render_event_log(frame: &mut Frame, area: Rect, entries: &[LogEntry]) {
    let block = Block::default()
        .title(" Expedition Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let skip = entries.len().saturating_sub(visible);
    let lines: Vec<Line> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(Span::styled(
                entry.message.as_str(),
                Style::default().fg(tone_color(entry.tone)),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
