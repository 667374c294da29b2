//! Delete confirmation dialog

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;

const PREVIEW_CHARS: usize = 40;

/// Shorten long titles to fit the dialog, on a character boundary.
pub fn title_preview(title: &str) -> String {
    if title.chars().count() > PREVIEW_CHARS {
        let cut: String = title.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let heading = format!("{} Confirm Delete", icons.warning());
    let block = common::create_dialog_block(&heading, Color::Red).title_alignment(Alignment::Center);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [text_area, _, instructions_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    let text = Paragraph::new(vec![
        Line::from("Delete task?"),
        Line::from(Span::styled(
            format!("\"{}\"", title_preview(title)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from("This action cannot be undone!"),
    ])
    .style(Style::default().fg(Color::Red))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(text, text_area);

    f.render_widget(
        common::instructions(&[shortcuts::CONFIRM_DELETE, shortcuts::KEEP]),
        instructions_area,
    );
}
