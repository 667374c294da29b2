use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::ui::state::HealthState;
use crate::ui::view::{Category, DecorativeTag, Priority};

fn category_color(category: Category) -> Color {
    match category {
        Category::Work => Color::LightBlue,
        Category::Personal => Color::LightMagenta,
        Category::Shopping => Color::LightYellow,
        Category::Health => Color::LightGreen,
    }
}

/// Create a category badge
#[must_use]
pub fn create_category_badge(category: Category) -> Span<'static> {
    Span::styled(
        format!(" {} ", category.label()),
        Style::default()
            .fg(Color::Black)
            .bg(category_color(category))
            .add_modifier(Modifier::BOLD),
    )
}

/// Create priority badges with flag symbols
#[must_use]
pub fn create_priority_badge(priority: Priority) -> Span<'static> {
    let style = match priority {
        Priority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Priority::Medium => Style::default().fg(Color::Rgb(255, 165, 0)).add_modifier(Modifier::BOLD),
        Priority::Low => Style::default().fg(Color::Gray),
    };
    Span::styled(format!("⚑ {}", priority.label()), style)
}

/// Both halves of a decorative tag, separated by a space.
#[must_use]
pub fn create_tag_badges(tag: DecorativeTag) -> Vec<Span<'static>> {
    vec![
        create_category_badge(tag.category),
        Span::raw(" "),
        create_priority_badge(tag.priority),
    ]
}

#[must_use]
pub fn health_color(state: HealthState) -> Color {
    match state {
        HealthState::Healthy => Color::Green,
        HealthState::Unhealthy => Color::Red,
        HealthState::Offline => Color::Red,
        HealthState::Checking => Color::Yellow,
    }
}

/// Create badges with parentheses, used for counts
#[must_use]
pub fn create_paren_badge(text: &str) -> Span<'static> {
    Span::styled(format!("({text})"), Style::default().fg(Color::DarkGray))
}
