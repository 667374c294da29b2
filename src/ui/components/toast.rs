//! Transient notification in the top-right corner.

use crate::icons::IconService;
use crate::ui::state::ToastKind;
use crate::ui::view::ToastView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 44;

/// Area for the toast: top-right corner of `area`, tall enough for the wrapped message.
pub fn toast_area(area: Rect, message: &str) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let text_width = width.saturating_sub(4).max(1) as usize;
    let lines = message.chars().count().div_ceil(text_width).max(1) as u16;
    let height = (lines + 2).min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    }
}

pub fn render_toast(f: &mut Frame, area: Rect, icons: &IconService, toast: &ToastView) {
    let (icon, color) = match toast.kind {
        ToastKind::Success => (icons.success(), Color::Green),
        ToastKind::Error => (icons.error(), Color::Red),
    };

    let rect = toast_area(area, &toast.message);
    f.render_widget(Clear, rect);
    let widget = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::raw(toast.message.clone()),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(" x to dismiss ")
            .title_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, rect);
}
