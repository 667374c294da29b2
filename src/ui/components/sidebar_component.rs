//! Sidebar navigation component.
//!
//! Shows one entry per filter with its task count, a small stats panel and
//! the API health indicator. Number keys and `Tab` switch the filter.

use crate::icons::IconService;
use crate::pipeline::Filter;
use crate::ui::components::badge::{create_paren_badge, health_color};
use crate::ui::core::{actions::Action, Component};
use crate::ui::state::{AppState, HealthState};
use crate::ui::view::PageView;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct SidebarComponent {
    pub icons: IconService,
    list_state: ListState,
}

impl SidebarComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            icons,
            list_state: ListState::default(),
        }
    }

    fn health_icon(&self, state: HealthState) -> &'static str {
        let icons = self.icons.icons().health;
        match state {
            HealthState::Healthy => icons.healthy,
            HealthState::Unhealthy | HealthState::Offline => icons.unhealthy,
            HealthState::Checking => icons.checking,
        }
    }

    fn render_navigation(&mut self, f: &mut Frame, rect: Rect, page: &PageView) {
        let items: Vec<ListItem> = page
            .nav
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let style = if entry.active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.label, style),
                    Span::raw(" "),
                    create_paren_badge(&entry.count.to_string()),
                ]))
            })
            .collect();

        self.list_state
            .select(page.nav.iter().position(|entry| entry.active));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!("{} Tasks", self.icons.icons().ui.tasks_title))
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn render_stats(&self, f: &mut Frame, rect: Rect, page: &PageView) {
        let stats = page.stats;
        let lines = vec![
            Line::from(format!("Total      {}", stats.total)),
            Line::from(format!("Completed  {}", stats.completed)),
            Line::from(format!("Pending    {}", stats.pending)),
            Line::from(Span::styled(
                format!("{} {}", self.health_icon(page.health.state), page.health.label),
                Style::default().fg(health_color(page.health.state)),
            )),
        ];

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Stats")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(panel, rect);
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent, _state: &AppState) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Action::SetFilter(Filter::ALL[index])
            }
            KeyCode::Tab => Action::CycleFilter,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, page: &PageView) {
        let [nav_area, stats_area] = Layout::vertical([Constraint::Min(6), Constraint::Length(6)]).areas(rect);
        self.render_navigation(f, nav_area, page);
        self.render_stats(f, stats_area, page);
    }
}
