use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Key bindings listed in the help dialog, grouped by section.
pub const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "VIEW",
        &[
            ("1-4 / Tab", "All, Today, Pending, Completed / next filter"),
            ("s", "Cycle sort order"),
            ("v", "Toggle list / grid"),
            ("/", "Search (Enter or Esc to leave)"),
            ("j/k ↑/↓", "Move selection"),
        ],
    ),
    (
        "TASKS",
        &[
            ("a", "New task"),
            ("e", "Edit selected task"),
            ("d", "Delete selected task"),
            ("Space", "Toggle completed"),
        ],
    ),
    (
        "APP",
        &[
            ("r", "Reload tasks"),
            ("H", "Check API health"),
            ("x", "Dismiss notification"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

pub fn render_help_dialog(f: &mut Frame, area: Rect, icons: &IconService) {
    let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
    let help_area = LayoutManager::centered_rect(width, height, area);
    f.render_widget(Clear, help_area);

    let mut lines = Vec::new();
    for (section, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            *section,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<12}", icons.task_status(false)), Style::default().fg(Color::Gray)),
        Span::raw("Pending task"),
    ]));
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<12}", icons.task_status(true)), Style::default().fg(Color::Green)),
        Span::raw("Completed task"),
    ]));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Help (Esc to close) ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(help, help_area);
}
