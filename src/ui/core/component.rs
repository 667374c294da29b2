use super::actions::Action;
use crate::ui::state::AppState;
use crate::ui::view::PageView;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// A piece of the screen.
///
/// Components read keys against the current [`AppState`] and paint from a
/// [`PageView`]. They never mutate the state directly; they return an
/// [`Action`] that the controller applies.
pub trait Component {
    fn handle_events(&mut self, event: Option<Event>, state: &AppState) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key, state)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent, state: &AppState) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, page: &PageView);
}
