//! Modal layer: task form, delete confirmation and help.
//!
//! While a modal is open it owns the keyboard; the controller routes keys
//! here before any other component sees them.

use crate::icons::IconService;
use crate::ui::components::dialogs;
use crate::ui::core::{actions::Action, Component};
use crate::ui::state::{AppState, FormInput, MutationState, PendingMutation};
use crate::ui::view::{Modal, PageView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub icons: IconService,
}

impl DialogComponent {
    pub fn new(icons: IconService) -> Self {
        Self { icons }
    }

    /// Whether keys should be routed here. A form being saved stays on screen.
    pub fn is_visible(state: &AppState) -> bool {
        state.modal_open() || matches!(state.mutation, MutationState::Submitting(PendingMutation::Save(_)))
    }

    fn handle_form_key(key: KeyEvent) -> Action {
        let input = match key.code {
            KeyCode::Esc => FormInput::Cancel,
            KeyCode::Enter => FormInput::Submit,
            KeyCode::Tab => FormInput::NextField,
            KeyCode::BackTab => FormInput::PreviousField,
            KeyCode::Backspace => FormInput::Backspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => FormInput::Char(c),
            _ => return Action::None,
        };
        Action::Form(input)
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent, state: &AppState) -> Action {
        if state.show_help {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::ShowHelp(false),
                _ => Action::None,
            };
        }

        match &state.mutation {
            MutationState::Editing(_) => Self::handle_form_key(key),
            MutationState::ConfirmingDelete { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmDelete,
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => Action::CancelMutation,
                _ => Action::None,
            },
            // Nothing to do until the store answers
            MutationState::Submitting(_) | MutationState::Idle => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, page: &PageView) {
        match &page.modal {
            Some(Modal::Form(form)) => dialogs::render_task_form_dialog(f, rect, &self.icons, form),
            Some(Modal::ConfirmDelete { title }) => {
                dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, title)
            }
            Some(Modal::Help) => dialogs::render_help_dialog(f, rect, &self.icons),
            None => {}
        }
    }
}
