//! Task list area: placeholders, list mode and grid mode.

use crate::constants::{GRID_CARD_HEIGHT, GRID_CARD_MIN_WIDTH, PLACEHOLDER_EMPTY, PLACEHOLDER_LOADING, PLACEHOLDER_RETRY};
use crate::icons::IconService;
use crate::pipeline::ViewMode;
use crate::ui::components::badge::create_tag_badges;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::state::AppState;
use crate::ui::view::{Body, PageView, TaskCard};
use crate::utils::datetime::today_utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub struct TaskListComponent {
    pub icons: IconService,
    list_state: ListState,
    /// First visible grid row
    grid_offset: usize,
    scrollbar_helper: ScrollbarHelper,
}

impl TaskListComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            icons,
            list_state: ListState::default(),
            grid_offset: 0,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    fn title_style(card: &TaskCard, selected: bool) -> Style {
        let style = if card.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };
        if selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn card_lines(&self, card: &TaskCard, selected: bool) -> Vec<Line<'static>> {
        let status_color = if card.completed { Color::Green } else { Color::Gray };
        let mut title = vec![
            Span::styled(
                format!("{} ", self.icons.task_status(card.completed)),
                Style::default().fg(status_color),
            ),
            Span::styled(card.title.clone(), Self::title_style(card, selected)),
        ];
        if let Some(tag) = card.tag {
            title.push(Span::raw("  "));
            title.extend(create_tag_badges(tag));
        }

        let mut lines = vec![Line::from(title)];
        if let Some(description) = &card.description {
            for text in description.lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", text),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        let dates = if card.created == card.updated {
            format!("    Created {}", card.created)
        } else {
            format!("    Created {} · Updated {}", card.created, card.updated)
        };
        lines.push(Line::from(Span::styled(dates, Style::default().fg(Color::DarkGray))));
        lines
    }

    fn render_placeholder(f: &mut Frame, rect: Rect, lines: Vec<Line<'static>>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let height = lines.len() as u16;
        let [_, middle, _] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(height), Constraint::Min(0)]).areas(inner);
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            middle,
        );
    }

    fn render_list(&mut self, f: &mut Frame, rect: Rect, cards: &[TaskCard], selected: usize) {
        let items: Vec<ListItem> = cards
            .iter()
            .enumerate()
            .map(|(index, card)| ListItem::new(self.card_lines(card, index == selected)))
            .collect();

        // Items are several lines tall; approximate the viewport in items
        let viewport_items = (rect.height.saturating_sub(2) / 3).max(1) as usize;
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, cards.len(), viewport_items);
        self.scrollbar_helper.update_state(cards.len(), selected, viewport_items);
        self.list_state.select(Some(selected));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
            .highlight_symbol("▌");

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn render_grid(&mut self, f: &mut Frame, rect: Rect, cards: &[TaskCard], selected: usize) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let columns = (inner.width / GRID_CARD_MIN_WIDTH).max(1) as usize;
        let visible_rows = (inner.height / GRID_CARD_HEIGHT).max(1) as usize;
        let total_rows = cards.len().div_ceil(columns);
        let selected_row = selected / columns;

        if selected_row < self.grid_offset {
            self.grid_offset = selected_row;
        } else if selected_row >= self.grid_offset + visible_rows {
            self.grid_offset = selected_row + 1 - visible_rows;
        }
        self.grid_offset = self.grid_offset.min(total_rows.saturating_sub(visible_rows));

        let row_areas = Layout::vertical(vec![Constraint::Length(GRID_CARD_HEIGHT); visible_rows]).split(inner);
        for (row_slot, row_area) in row_areas.iter().enumerate() {
            let row = self.grid_offset + row_slot;
            let col_areas = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
            for (col, card_area) in col_areas.iter().enumerate() {
                let index = row * columns + col;
                let Some(card) = cards.get(index) else {
                    return;
                };
                let is_selected = index == selected;
                let border = if is_selected { Color::Cyan } else { Color::DarkGray };
                let widget = Paragraph::new(self.card_lines(card, is_selected))
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(border)),
                    );
                f.render_widget(widget, *card_area);
            }
        }
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent, state: &AppState) -> Action {
        let selected_id = || state.selected_task(today_utc()).map(|task| task.id.clone());

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char('a') => Action::OpenCreateForm,
            KeyCode::Char('e') => selected_id().map_or(Action::None, Action::RequestEdit),
            KeyCode::Char('d') => selected_id().map_or(Action::None, Action::RequestDelete),
            KeyCode::Char(' ') => selected_id().map_or(Action::None, Action::ToggleTask),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, page: &PageView) {
        match &page.body {
            Body::Loading => Self::render_placeholder(
                f,
                rect,
                vec![Line::from(Span::styled(PLACEHOLDER_LOADING, Style::default().fg(Color::Yellow)))],
            ),
            Body::Error { message } => Self::render_placeholder(
                f,
                rect,
                vec![
                    Line::from(Span::styled(
                        format!("{} {}", self.icons.error(), message),
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(Span::styled(PLACEHOLDER_RETRY, Style::default().fg(Color::DarkGray))),
                ],
            ),
            Body::Empty => Self::render_placeholder(
                f,
                rect,
                vec![Line::from(Span::styled(PLACEHOLDER_EMPTY, Style::default().fg(Color::DarkGray)))],
            ),
            Body::Tasks {
                mode: ViewMode::List,
                cards,
                selected,
            } => self.render_list(f, rect, cards, *selected),
            Body::Tasks {
                mode: ViewMode::Grid,
                cards,
                selected,
            } => self.render_grid(f, rect, cards, *selected),
        }
    }
}
