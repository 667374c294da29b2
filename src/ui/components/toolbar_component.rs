//! Page header and toolbar: title, sort order, view mode and the search box.

use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::ui::state::AppState;
use crate::ui::view::PageView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct ToolbarComponent {
    pub icons: IconService,
}

impl ToolbarComponent {
    pub fn new(icons: IconService) -> Self {
        Self { icons }
    }

    /// Keys while the search box has focus. Everything printable goes into the term.
    fn handle_search_key(key: KeyEvent, state: &AppState) -> Action {
        match key.code {
            KeyCode::Enter => Action::FocusSearch(false),
            KeyCode::Esc if state.query.search.is_empty() => Action::FocusSearch(false),
            KeyCode::Esc => Action::ClearSearch,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::SearchInput(c),
            _ => Action::None,
        }
    }
}

impl Component for ToolbarComponent {
    fn handle_key_events(&mut self, key: KeyEvent, state: &AppState) -> Action {
        if state.search_focused {
            return Self::handle_search_key(key, state);
        }

        match key.code {
            KeyCode::Char('/') => Action::FocusSearch(true),
            KeyCode::Char('s') => Action::CycleSort,
            KeyCode::Char('v') => Action::ToggleView,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, page: &PageView) {
        let [title_area, tools_area] = Layout::horizontal([Constraint::Min(20), Constraint::Length(48)]).areas(rect);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                page.header.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(page.header.subtitle, Style::default().fg(Color::DarkGray))),
        ])
        .block(Block::default().borders(Borders::NONE));
        f.render_widget(header, title_area);

        let toolbar = &page.toolbar;
        let search_style = if toolbar.search_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let cursor = if toolbar.search_focused { "▏" } else { "" };

        let search = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", self.icons.icons().ui.search), search_style),
            Span::styled(format!("{}{}", toolbar.search, cursor), Style::default().fg(Color::White)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(search_style)
                .title(format!("{} · {}", toolbar.sort_label, toolbar.view_mode.label())),
        );
        f.render_widget(search, tools_area);
    }
}
