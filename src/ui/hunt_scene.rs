//! Play-phase rendering: stage prompt, input widget, player card, log.

use super::game_common::{create_hunt_layout, render_event_log, render_status_bar};
use super::stage_form::{StageForm, VaultField};
use super::stats_panel::draw_stats_panel;
use crate::constants::{VAULT_DIAL_MAX, VAULT_DIAL_MIN};
use crate::game::Game;
use crate::hunt::{BridgeChoice, PathChoice, Player, Stage};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the play phase for the active player.
pub fn render_hunt(frame: &mut Frame, area: Rect, game: &Game, form: &StageForm) {
    let Some(player) = game.active_player() else {
        return;
    };

    let title = format!(" The Hunt Continues - {}'s Turn ", player.name);
    let layout = create_hunt_layout(frame, area, &title, Color::Green, 30, 9);

    render_stage(frame, layout.content, player, form);
    render_controls(frame, layout.status_bar, player.stage, form);
    draw_stats_panel(frame, layout.side_panel, player, &game.players);
    render_event_log(frame, layout.log, game.log.recent());
}

fn option_lines<'a>(names: &[&'a str], selected: usize) -> Vec<Line<'a>> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == selected {
                Line::from(Span::styled(
                    format!(" (•) {}", name),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!(" ( ) {}", name),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect()
}

fn text_field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{}{}", value, cursor), style),
    ])
}

fn render_stage(frame: &mut Frame, area: Rect, player: &Player, form: &StageForm) {
    let stage = player.stage;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Stage {}: {}", stage.number().unwrap_or(5), stage.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            stage.prompt(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    match stage {
        Stage::Stage1 => {
            let names: Vec<&str> = PathChoice::ALL.iter().map(|p| p.name()).collect();
            lines.extend(option_lines(&names, form.selected));
        }
        Stage::Stage2 | Stage::Stage3 => {
            lines.push(text_field_line("Your answer", &form.answer, true));
        }
        Stage::Stage4 => {
            let names: Vec<&str> = BridgeChoice::ALL.iter().map(|c| c.name()).collect();
            lines.extend(option_lines(&names, form.selected));
        }
        Stage::Stage5 => {
            lines.push(text_field_line(
                "Inscription",
                &form.answer,
                form.vault_field == VaultField::Answer,
            ));
            let dial_focused = form.vault_field == VaultField::Dial;
            let dial_style = if dial_focused {
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            lines.push(Line::from(vec![
                Span::styled("Dial: ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("◀ {} ▶", form.dial), dial_style),
                Span::styled(
                    format!("  ({}-{})", VAULT_DIAL_MIN, VAULT_DIAL_MAX),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        Stage::Done => {
            lines.push(Line::from(Span::styled(
                "✅ Turn complete.",
                Style::default().fg(Color::Green),
            )));
        }
    }

    let text = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}

fn render_controls(frame: &mut Frame, area: Rect, stage: Stage, form: &StageForm) {
    let (status, color) = match &form.reject_message {
        Some(msg) => (msg.as_str(), Color::LightRed),
        None => ("One answer per stage. Choose wisely.", Color::Yellow),
    };

    let controls: &[(&str, &str)] = match stage {
        Stage::Stage1 | Stage::Stage4 => &[("[↑↓]", "Choose"), ("[Enter]", "Confirm")],
        Stage::Stage5 => &[
            ("[Tab]", "Field"),
            ("[←→]", "Dial"),
            ("[Enter]", "Open the vault"),
        ],
        _ => &[("[Type]", "Answer"), ("[Enter]", "Submit")],
    };

    render_status_bar(frame, area, status, color, controls);
}
