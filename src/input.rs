//! Key handling for every screen.
//!
//! Keys are turned into `GameEvent`s here; all rule changes still go through
//! `game::update`.

use crate::game::{update, Game, GameEvent, Phase, UpdateResult};
use crate::hunt::Stage;
use crate::ui::setup_scene::SetupScreen;
use crate::ui::stage_form::StageForm;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Screen-local widget state that lives outside the game aggregate.
pub struct Screens {
    pub setup: SetupScreen,
    pub form: StageForm,
}

impl Screens {
    pub fn new() -> Self {
        Self {
            setup: SetupScreen::new(),
            form: StageForm::new(),
        }
    }
}

impl Default for Screens {
    fn default() -> Self {
        Self::new()
    }
}

/// Main dispatcher. Picks the handler for the current phase.
///
/// Esc quits from setup and from the results screen, never mid-hunt.
pub fn handle_key<R: Rng>(
    key: KeyEvent,
    game: &mut Game,
    screens: &mut Screens,
    rng: &mut R,
) -> InputResult {
    if matches!(key.code, KeyCode::Esc) && matches!(game.phase, Phase::Setup | Phase::End) {
        return InputResult::Quit;
    }

    match game.phase {
        Phase::Setup => handle_setup_key(key, game, &mut screens.setup, rng),
        Phase::Play => handle_play_key(key, game, &mut screens.form, rng),
        Phase::End => {
            if matches!(key.code, KeyCode::Enter) {
                update(game, GameEvent::PlayAgain, rng);
                *screens = Screens::new();
            }
        }
    }
    InputResult::Continue
}

fn handle_setup_key<R: Rng>(
    key: KeyEvent,
    game: &mut Game,
    setup: &mut SetupScreen,
    rng: &mut R,
) {
    match key.code {
        KeyCode::Char(c) => setup.handle_char_input(c),
        KeyCode::Backspace => setup.handle_backspace(),
        KeyCode::Tab | KeyCode::Down => setup.focus_next(),
        KeyCode::BackTab | KeyCode::Up => setup.focus_prev(),
        KeyCode::Enter => {
            for name in setup.entered_names() {
                update(game, GameEvent::AddPlayer(name), rng);
            }
            update(game, GameEvent::StartGame, rng);
        }
        _ => {}
    }
}

fn handle_play_key<R: Rng>(key: KeyEvent, game: &mut Game, form: &mut StageForm, rng: &mut R) {
    let Some(stage) = game.active_player().map(|p| p.stage) else {
        return;
    };

    match key.code {
        KeyCode::Enter => {
            let Some(action) = form.to_action(stage) else {
                return;
            };
            match update(game, GameEvent::Submit(action), rng) {
                UpdateResult::Committed(_) => form.clear(),
                UpdateResult::Rejected(reason) => form.reject_message = Some(reason.to_string()),
                UpdateResult::Applied | UpdateResult::Ignored => {}
            }
        }
        KeyCode::Tab | KeyCode::BackTab if stage == Stage::Stage5 => form.toggle_vault_field(),
        KeyCode::Right if stage == Stage::Stage5 => form.dial_up(),
        KeyCode::Left if stage == Stage::Stage5 => form.dial_down(),
        KeyCode::Down => form.select_next(stage),
        KeyCode::Up => form.select_prev(stage),
        KeyCode::Char(c) if form.accepts_text(stage) => form.handle_char_input(c),
        KeyCode::Backspace if form.accepts_text(stage) => form.handle_backspace(),
        _ => {}
    }
}
