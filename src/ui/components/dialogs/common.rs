use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Rounded, bold-titled frame shared by every modal.
pub fn create_dialog_block<'a>(title: &'a str, accent: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(accent))
}

/// One form field. Only the focused field shows a cursor and a highlighted border.
pub fn create_input_paragraph<'a>(value: &str, label: &str, focused: bool) -> Paragraph<'a> {
    let (text, border) = if focused {
        (format!("{}█", value), Color::Cyan)
    } else {
        (value.to_string(), Color::Gray)
    };

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", label))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border));

    Paragraph::new(text).block(frame).style(Style::default().fg(Color::White))
}

/// A key hint shown at the bottom of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub color: Color,
    pub label: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, color: Color, label: &'static str) -> Self {
        Self { key, color, label }
    }
}

/// Centered hint line; shortcuts are separated with bullets.
pub fn instructions<'a>(hints: &[Shortcut]) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", hint.label), Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

pub mod shortcuts {
    use super::Shortcut;
    use ratatui::style::Color;

    pub const SAVE: Shortcut = Shortcut::new("Enter", Color::Green, "Save");
    pub const NEXT_FIELD: Shortcut = Shortcut::new("Tab", Color::Cyan, "Next field");
    pub const CANCEL: Shortcut = Shortcut::new("Esc", Color::Red, "Cancel");
    pub const CONFIRM_DELETE: Shortcut = Shortcut::new("y/Enter", Color::Green, "Delete");
    pub const KEEP: Shortcut = Shortcut::new("n/Esc", Color::Red, "Keep");
}

