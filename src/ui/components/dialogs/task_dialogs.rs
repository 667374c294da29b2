use super::common::{self, shortcuts};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use crate::ui::state::FormField;
use crate::ui::view::FormView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Create/edit form: title, description, completed checkbox and instructions.
pub fn render_task_form_dialog(f: &mut Frame, area: Rect, icons: &IconService, form: &FormView) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 16, area);
    f.render_widget(Clear, dialog_area);

    let title = if form.editing { "Edit Task" } else { "New Task" };
    let main_block = common::create_dialog_block(title, Color::Cyan);

    let inner_area = main_block.inner(dialog_area);
    f.render_widget(main_block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Description
            Constraint::Length(1), // Completed
            Constraint::Length(1), // Validation error or progress
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    f.render_widget(
        common::create_input_paragraph(&form.title, "Title", form.focus == FormField::Title),
        chunks[0],
    );
    f.render_widget(
        common::create_input_paragraph(&form.description, "Description", form.focus == FormField::Description)
            .wrap(ratatui::widgets::Wrap { trim: false }),
        chunks[1],
    );

    let checkbox_style = if form.focus == FormField::Completed {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", icons.task_status(form.completed)), checkbox_style),
            Span::styled("Completed", checkbox_style),
        ])),
        chunks[2],
    );

    let status = if form.submitting {
        Line::from(Span::styled(" Saving...", Style::default().fg(Color::Yellow)))
    } else if let Some(error) = &form.error {
        Line::from(Span::styled(
            format!(" {} {}", icons.warning(), error),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(status), chunks[3]);

    f.render_widget(
        common::instructions(&[shortcuts::SAVE, shortcuts::NEXT_FIELD, shortcuts::CANCEL]),
        chunks[5],
    );
}
