use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use todoterm::config::{Config, DisplayConfig};
use todoterm::constants::{HEALTH_CHECKING, HEALTH_OFFLINE, TITLE_PENDING};
use todoterm::pipeline::{Filter, ViewMode};
use todoterm::task::TaskId;
use todoterm::ui::state::{AppState, HealthState, LoadState, MutationState, PendingMutation, TaskForm};
use todoterm::ui::view::{render_page, Body, DecorativeTag, Modal};

use crate::common::{at, sample_tasks, task, with_description};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
}

fn loaded_state() -> AppState {
    let mut state = AppState::new(&Config::default().ui);
    state.replace_tasks(sample_tasks(at("2024-03-02T12:00:00Z")), today());
    state
}

#[test]
fn test_initial_page_is_loading() {
    let state = AppState::new(&Config::default().ui);
    let page = render_page(&state, today(), &DisplayConfig::default());

    assert_eq!(page.body, Body::Loading);
    assert_eq!(page.health.label, HEALTH_CHECKING);
    assert_eq!(page.modal, None);
    assert!(!page.busy);
}

#[test]
fn test_nav_counts_and_header_follow_filter() {
    let mut state = loaded_state();
    state.query.filter = Filter::Pending;
    let page = render_page(&state, today(), &DisplayConfig::default());

    let counts: Vec<(Filter, usize, bool)> = page.nav.iter().map(|n| (n.filter, n.count, n.active)).collect();
    assert_eq!(
        counts,
        vec![
            (Filter::All, 4, false),
            (Filter::Today, 2, false),
            (Filter::Pending, 2, true),
            (Filter::Completed, 2, false),
        ]
    );
    assert_eq!(page.header.title, TITLE_PENDING);
}

#[test]
fn test_empty_and_error_bodies() {
    let mut state = loaded_state();
    state.query.search = "no such task".to_string();
    assert_eq!(render_page(&state, today(), &DisplayConfig::default()).body, Body::Empty);

    state.load = LoadState::Failed("Network error: \u{1b}[31mrefused".to_string());
    state.health = HealthState::Offline;
    let page = render_page(&state, today(), &DisplayConfig::default());
    assert_eq!(
        page.body,
        Body::Error {
            message: "Network error: refused".to_string()
        }
    );
    assert_eq!(page.health.label, HEALTH_OFFLINE);
}

#[test]
fn test_cards_are_sanitized() {
    let mut state = AppState::new(&Config::default().ui);
    let created = Utc::now();
    state.replace_tasks(
        vec![with_description(
            task(1, "Evil\u{1b}]0;title\u{07} task\n", false, created),
            "line one\r\nline\u{202e} two",
        )],
        today(),
    );

    match render_page(&state, today(), &DisplayConfig::default()).body {
        Body::Tasks { cards, .. } => {
            assert_eq!(cards[0].title, "Evil task ");
            assert_eq!(cards[0].description.as_deref(), Some("line one\nline two"));
        }
        other => panic!("expected tasks, got {other:?}"),
    }
}

#[test]
fn test_display_options() {
    let state = loaded_state();

    let page = render_page(&state, today(), &DisplayConfig::default());
    let Body::Tasks { cards, mode, selected } = page.body else {
        panic!("expected tasks");
    };
    assert_eq!(mode, ViewMode::List);
    assert_eq!(selected, 0);
    assert!(cards.iter().all(|c| c.tag.is_some()));
    let report = cards.iter().find(|c| c.title == "write report").unwrap();
    assert_eq!(report.description.as_deref(), Some("Quarterly numbers"));
    assert_eq!(report.tag, Some(DecorativeTag::for_task(&TaskId::from(3))));

    let display = DisplayConfig {
        show_descriptions: false,
        show_tags: false,
        ..DisplayConfig::default()
    };
    let Body::Tasks { cards, .. } = render_page(&state, today(), &display).body else {
        panic!("expected tasks");
    };
    assert!(cards.iter().all(|c| c.tag.is_none() && c.description.is_none()));
}

#[test]
fn test_decorative_tag_is_stable_per_id() {
    let a = DecorativeTag::for_task(&TaskId::from(42));
    assert_eq!(a, DecorativeTag::for_task(&TaskId::from("42")));

    // Across many ids every category and priority shows up
    let tags: Vec<DecorativeTag> = (0..200u64).map(|i| DecorativeTag::for_task(&TaskId::from(i))).collect();
    let categories: std::collections::HashSet<&str> = tags.iter().map(|t| t.category.label()).collect();
    let priorities: std::collections::HashSet<&str> = tags.iter().map(|t| t.priority.label()).collect();
    assert_eq!(categories.len(), 4);
    assert_eq!(priorities.len(), 3);
}

#[test]
fn test_modals() {
    let mut state = loaded_state();

    state.mutation = MutationState::ConfirmingDelete {
        id: TaskId::from(1),
        title: "Buy\nmilk".to_string(),
    };
    assert_eq!(
        render_page(&state, today(), &DisplayConfig::default()).modal,
        Some(Modal::ConfirmDelete {
            title: "Buy milk".to_string()
        })
    );

    state.mutation = MutationState::Submitting(PendingMutation::Save(TaskForm::create()));
    let page = render_page(&state, today(), &DisplayConfig::default());
    assert!(page.busy);
    assert!(matches!(page.modal, Some(Modal::Form(ref form)) if form.submitting && !form.editing));

    // Toggle and delete run without a dialog
    state.mutation = MutationState::Submitting(PendingMutation::Toggle(TaskId::from(1)));
    let page = render_page(&state, today(), &DisplayConfig::default());
    assert!(page.busy);
    assert_eq!(page.modal, None);

    state.show_help = true;
    assert_eq!(render_page(&state, today(), &DisplayConfig::default()).modal, Some(Modal::Help));
}
