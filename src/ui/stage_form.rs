//! Input widget state for the active player's stage.
//!
//! One form is reused for every turn; it is cleared after each commit so the
//! next player starts with an empty field.

use crate::constants::{VAULT_DIAL_MAX, VAULT_DIAL_MIN};
use crate::hunt::{Action, BridgeChoice, PathChoice, Stage};

/// Which part of the vault form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultField {
    Answer,
    Dial,
}

#[derive(Debug, Clone)]
pub struct StageForm {
    /// Highlighted option for choice stages.
    pub selected: usize,
    pub answer: String,
    pub dial: u8,
    pub vault_field: VaultField,
    pub reject_message: Option<String>,
}

impl StageForm {
    pub fn new() -> Self {
        Self {
            selected: 0,
            answer: String::new(),
            dial: VAULT_DIAL_MIN,
            vault_field: VaultField::Answer,
            reject_message: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn option_count(stage: Stage) -> usize {
        match stage {
            Stage::Stage1 => PathChoice::ALL.len(),
            Stage::Stage4 => BridgeChoice::ALL.len(),
            _ => 0,
        }
    }

    pub fn select_next(&mut self, stage: Stage) {
        let count = Self::option_count(stage);
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self, stage: Stage) {
        let count = Self::option_count(stage);
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    pub fn dial_up(&mut self) {
        self.reject_message = None;
        if self.dial < VAULT_DIAL_MAX {
            self.dial += 1;
        }
    }

    pub fn dial_down(&mut self) {
        self.reject_message = None;
        if self.dial > VAULT_DIAL_MIN {
            self.dial -= 1;
        }
    }

    pub fn toggle_vault_field(&mut self) {
        self.vault_field = match self.vault_field {
            VaultField::Answer => VaultField::Dial,
            VaultField::Dial => VaultField::Answer,
        };
    }

    pub fn handle_char_input(&mut self, c: char) {
        self.reject_message = None;
        self.answer.push(c);
    }

    pub fn handle_backspace(&mut self) {
        self.answer.pop();
    }

    /// Whether the current stage takes typed text.
    pub fn accepts_text(&self, stage: Stage) -> bool {
        match stage {
            Stage::Stage2 | Stage::Stage3 => true,
            Stage::Stage5 => self.vault_field == VaultField::Answer,
            _ => false,
        }
    }

    /// Build the action the form currently describes for `stage`.
    pub fn to_action(&self, stage: Stage) -> Option<Action> {
        match stage {
            Stage::Stage1 => Some(Action::Path(PathChoice::from_index(self.selected))),
            Stage::Stage2 | Stage::Stage3 => Some(Action::Answer(self.answer.clone())),
            Stage::Stage4 => Some(Action::Bridge(BridgeChoice::from_index(self.selected))),
            Stage::Stage5 => Some(Action::Vault {
                answer: self.answer.clone(),
                dial: self.dial,
            }),
            Stage::Done => None,
        }
    }
}

impl Default for StageForm {
    fn default() -> Self {
        Self::new()
    }
}
