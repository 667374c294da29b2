//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::view::{Body, PageView};

/// Text for the status bar: progress while something is pending, key hints otherwise
pub fn status_text(page: &PageView) -> &'static str {
    if page.busy {
        "Saving changes..."
    } else if page.toolbar.search_focused {
        "Type to search • Enter: done • Esc: clear/leave"
    } else if matches!(page.body, Body::Loading) {
        "Loading tasks..."
    } else {
        "a: add • e: edit • d: delete • Space: toggle • r: reload • ?: help • q: quit"
    }
}

/// Render the status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, page: &PageView) {
    let color = if page.busy || matches!(page.body, Body::Loading) {
        Color::Yellow
    } else if matches!(page.body, Body::Error { .. }) {
        Color::Red
    } else {
        Color::Gray
    };

    let status_bar = Paragraph::new(status_text(page))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));

    f.render_widget(status_bar, area);
}
