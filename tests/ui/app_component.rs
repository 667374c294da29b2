use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use todoterm::config::Config;
use todoterm::constants::{
    ERROR_API_UNREACHABLE, ERROR_LOAD_FAILED, ERROR_TASK_DELETE_FAILED, ERROR_TASK_SAVE_FAILED, ERROR_TITLE_REQUIRED,
    SUCCESS_API_CONNECTED, SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED,
};
use todoterm::pipeline::{Filter, SortOrder, ViewMode};
use todoterm::task::TaskId;
use todoterm::ui::app_component::AppComponent;
use todoterm::ui::core::{Action, EventType};
use todoterm::ui::state::{FormMode, HealthState, LoadState, MutationState, PendingMutation, ToastKind};
use todoterm::ui::view::{Body, Modal};

use crate::common::sample_tasks;
use crate::fake_store::FakeStore;

fn new_app() -> (AppComponent, Arc<FakeStore>) {
    let store = Arc::new(FakeStore::with_tasks(sample_tasks(Utc::now())));
    let app = AppComponent::new(store.clone(), Config::default());
    (app, store)
}

/// Wait for one background job and apply its result.
async fn pump(app: &mut AppComponent) {
    let action = tokio::time::timeout(Duration::from_secs(5), app.recv_background_action())
        .await
        .expect("background job did not finish")
        .expect("background channel closed");
    app.dispatch(action);
}

async fn loaded_app() -> (AppComponent, Arc<FakeStore>) {
    let (mut app, store) = new_app();
    app.dispatch(Action::LoadTasks);
    pump(&mut app).await;
    assert_eq!(app.state().load, LoadState::Loaded);
    (app, store)
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn visible_titles(app: &AppComponent) -> Vec<String> {
    match app.page().body {
        Body::Tasks { cards, .. } => cards.into_iter().map(|c| c.title).collect(),
        _ => Vec::new(),
    }
}

fn toast(app: &AppComponent) -> Option<(ToastKind, String)> {
    app.state().toast.as_ref().map(|t| (t.kind, t.message.clone()))
}

#[tokio::test]
async fn test_startup_loads_tasks_and_announces_health() {
    let (mut app, _store) = new_app();
    assert_eq!(app.page().body, Body::Loading);

    app.start();
    pump(&mut app).await;
    pump(&mut app).await;

    assert_eq!(app.state().load, LoadState::Loaded);
    assert_eq!(app.state().health, HealthState::Healthy);
    assert_eq!(toast(&app), Some((ToastKind::Success, SUCCESS_API_CONNECTED.to_string())));
    // Newest first; equal timestamps keep store order
    assert_eq!(visible_titles(&app), vec!["write report", "Call mom", "Pay bills", "Buy milk"]);
}

#[tokio::test]
async fn test_blank_title_is_rejected_without_calling_the_store() {
    let (mut app, store) = loaded_app().await;

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    match &app.state().mutation {
        MutationState::Editing(form) => assert_eq!(form.error.as_deref(), Some(ERROR_TITLE_REQUIRED)),
        other => panic!("form should stay open, got {other:?}"),
    }
    match app.page().modal {
        Some(Modal::Form(form)) => assert_eq!(form.error.as_deref(), Some(ERROR_TITLE_REQUIRED)),
        other => panic!("expected form modal, got {other:?}"),
    }
    assert_eq!(store.writes(), 0);
    assert_eq!(app.state().tasks.len(), 4);
}

#[tokio::test]
async fn test_create_submits_then_reloads() {
    let (mut app, store) = loaded_app().await;

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Walk dog");
    press(&mut app, KeyCode::Enter);

    assert!(matches!(
        app.state().mutation,
        MutationState::Submitting(PendingMutation::Save(_))
    ));
    let page = app.page();
    assert!(page.busy);
    assert!(matches!(page.modal, Some(Modal::Form(ref form)) if form.submitting));

    // Keys are swallowed while the save is in flight
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    pump(&mut app).await;
    assert_eq!(app.state().mutation, MutationState::Idle);
    assert_eq!(toast(&app), Some((ToastKind::Success, SUCCESS_TASK_CREATED.to_string())));
    assert_eq!(app.state().load, LoadState::Loading);

    pump(&mut app).await;
    assert_eq!(app.state().tasks.len(), 5);
    assert!(visible_titles(&app).contains(&"Walk dog".to_string()));
    // The reload itself is silent
    assert_eq!(toast(&app), Some((ToastKind::Success, SUCCESS_TASK_CREATED.to_string())));
    assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_failed_save_reopens_form_unchanged() {
    let (mut app, store) = loaded_app().await;
    store.set(&store.fail_writes, true);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Walk");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "the dog");
    press(&mut app, KeyCode::Enter);
    pump(&mut app).await;

    match &app.state().mutation {
        MutationState::Editing(form) => {
            assert_eq!(form.title, "Walk");
            assert_eq!(form.description, "the dog");
            assert_eq!(form.mode, FormMode::Create);
        }
        other => panic!("form should be back, got {other:?}"),
    }
    let (kind, message) = toast(&app).unwrap();
    assert_eq!(kind, ToastKind::Error);
    assert!(message.starts_with(ERROR_TASK_SAVE_FAILED), "got {message}");
    assert_eq!(app.state().tasks.len(), 4);
}

#[tokio::test]
async fn test_failed_delete_leaves_list_untouched() {
    let (mut app, store) = loaded_app().await;
    store.set(&store.fail_writes, true);
    let before = app.page().body;

    press(&mut app, KeyCode::Char('d'));
    match app.page().modal {
        Some(Modal::ConfirmDelete { title }) => assert_eq!(title, "write report"),
        other => panic!("expected delete confirmation, got {other:?}"),
    }

    press(&mut app, KeyCode::Char('y'));
    assert!(app.state().is_submitting());
    pump(&mut app).await;

    assert_eq!(app.state().mutation, MutationState::Idle);
    assert_eq!(app.page().body, before);
    assert_eq!(store.tasks().len(), 4);
    let (kind, message) = toast(&app).unwrap();
    assert_eq!(kind, ToastKind::Error);
    assert!(message.starts_with(ERROR_TASK_DELETE_FAILED), "got {message}");
}

#[tokio::test]
async fn test_delete_after_confirmation() {
    let (mut app, _store) = loaded_app().await;

    // Declining closes the dialog without a request
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.state().mutation, MutationState::Idle);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    pump(&mut app).await;
    pump(&mut app).await;

    assert_eq!(toast(&app), Some((ToastKind::Success, SUCCESS_TASK_DELETED.to_string())));
    assert_eq!(visible_titles(&app), vec!["Call mom", "Pay bills", "Buy milk"]);
}

#[tokio::test]
async fn test_toggle_moves_task_between_filters() {
    let (mut app, _store) = loaded_app().await;

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().query.filter, Filter::Pending);
    assert_eq!(visible_titles(&app), vec!["write report", "Buy milk"]);

    press(&mut app, KeyCode::Char(' '));
    assert!(matches!(
        app.state().mutation,
        MutationState::Submitting(PendingMutation::Toggle(ref id)) if *id == TaskId::from(3)
    ));
    pump(&mut app).await;
    pump(&mut app).await;

    assert_eq!(visible_titles(&app), vec!["Buy milk"]);
    assert_eq!(toast(&app), None);

    press(&mut app, KeyCode::Char('4'));
    assert!(visible_titles(&app).contains(&"write report".to_string()));
}

#[tokio::test]
async fn test_one_mutation_at_a_time() {
    let (mut app, store) = loaded_app().await;

    press(&mut app, KeyCode::Char(' '));
    // Navigation still works, new mutations are ignored
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('a'));

    assert_eq!(app.state().selected, 1);
    assert!(matches!(
        app.state().mutation,
        MutationState::Submitting(PendingMutation::Toggle(_))
    ));

    pump(&mut app).await;
    pump(&mut app).await;
    assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_load_failure_keeps_cached_tasks() {
    let (mut app, store) = loaded_app().await;
    store.set(&store.fail_list, true);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.page().body, Body::Loading);
    pump(&mut app).await;

    match app.page().body {
        Body::Error { message } => assert!(message.contains("connection refused"), "got {message}"),
        other => panic!("expected error body, got {other:?}"),
    }
    assert_eq!(app.state().tasks.len(), 4);
    assert_eq!(app.page().stats.total, 4);
    let (kind, message) = toast(&app).unwrap();
    assert_eq!(kind, ToastKind::Error);
    assert!(message.starts_with(ERROR_LOAD_FAILED));

    // Retry once the store is back
    store.set(&store.fail_list, false);
    press(&mut app, KeyCode::Char('r'));
    pump(&mut app).await;
    assert_eq!(visible_titles(&app).len(), 4);
}

#[tokio::test]
async fn test_superseded_load_result_is_dropped() {
    let (mut app, _store) = loaded_app().await;

    // Loads #2 and #3 in flight
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('r'));

    // Late answers to #2 must not replace anything
    app.dispatch(Action::TasksLoaded {
        generation: 2,
        tasks: Vec::new(),
    });
    app.dispatch(Action::LoadFailed {
        generation: 2,
        error: "connection reset".to_string(),
    });
    assert_eq!(app.state().load, LoadState::Loading);
    assert_eq!(app.state().tasks.len(), 4);
    assert_eq!(toast(&app), None);

    pump(&mut app).await;
    pump(&mut app).await;
    assert_eq!(app.state().load, LoadState::Loaded);
    assert_eq!(visible_titles(&app).len(), 4);
}

#[tokio::test]
async fn test_edit_prefills_form_from_store() {
    let (mut app, store) = loaded_app().await;

    press(&mut app, KeyCode::Char('e'));
    // The form opens only once the task has been fetched
    assert_eq!(app.state().mutation, MutationState::Idle);
    pump(&mut app).await;

    match &app.state().mutation {
        MutationState::Editing(form) => {
            assert_eq!(form.mode, FormMode::Edit(TaskId::from(3)));
            assert_eq!(form.title, "write report");
            assert_eq!(form.description, "Quarterly numbers");
            assert!(!form.completed);
        }
        other => panic!("expected edit form, got {other:?}"),
    }

    type_text(&mut app, "!");
    press(&mut app, KeyCode::Enter);
    pump(&mut app).await;
    assert_eq!(toast(&app), Some((ToastKind::Success, SUCCESS_TASK_UPDATED.to_string())));
    pump(&mut app).await;

    assert!(store.tasks().iter().any(|t| t.title == "write report!"));
    assert!(visible_titles(&app).contains(&"write report!".to_string()));
}

#[tokio::test]
async fn test_edit_of_missing_task_reports_error() {
    let (mut app, _store) = loaded_app().await;

    app.dispatch(Action::RequestEdit(TaskId::from(999)));
    pump(&mut app).await;

    assert_eq!(app.state().mutation, MutationState::Idle);
    let (kind, message) = toast(&app).unwrap();
    assert_eq!(kind, ToastKind::Error);
    assert!(message.contains("Todo not found"), "got {message}");
}

#[tokio::test]
async fn test_health_toast_on_request_or_change_only() {
    let (mut app, store) = new_app();
    store.set(&store.offline, true);

    app.dispatch(Action::CheckHealth);
    assert_eq!(app.state().health, HealthState::Checking);
    pump(&mut app).await;
    assert_eq!(app.state().health, HealthState::Offline);
    let (kind, message) = toast(&app).unwrap();
    assert_eq!(kind, ToastKind::Error);
    assert!(message.starts_with(ERROR_API_UNREACHABLE));

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(toast(&app), None);

    // Periodic check with the same outcome stays quiet
    let start = Instant::now();
    app.on_tick(start + Duration::from_secs(61));
    pump(&mut app).await;
    assert_eq!(app.state().health, HealthState::Offline);
    assert_eq!(toast(&app), None);

    // A change is announced
    store.set(&store.offline, false);
    app.on_tick(start + Duration::from_secs(200));
    pump(&mut app).await;
    assert_eq!(app.state().health, HealthState::Healthy);
    assert_eq!(toast(&app), Some((ToastKind::Success, SUCCESS_API_CONNECTED.to_string())));
}

#[tokio::test]
async fn test_toast_expires_on_tick() {
    let (mut app, _store) = loaded_app().await;
    app.dispatch(Action::MutationFailed {
        kind: todoterm::ui::state::MutationKind::Toggle,
        error: "boom".to_string(),
    });
    assert!(toast(&app).is_some());

    let ttl = Duration::from_secs(Config::default().ui.toast_seconds);
    assert!(app.on_tick(Instant::now() + ttl + Duration::from_secs(1)));
    assert_eq!(toast(&app), None);
}

#[tokio::test]
async fn test_search_box_captures_keys() {
    let (mut app, _store) = loaded_app().await;

    press(&mut app, KeyCode::Char('/'));
    assert!(app.state().search_focused);
    type_text(&mut app, "MILK");
    assert!(!app.should_quit());
    assert_eq!(visible_titles(&app), vec!["Buy milk"]);

    // First Esc clears, second leaves the box
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state().query.search, "");
    assert!(app.state().search_focused);
    press(&mut app, KeyCode::Esc);
    assert!(!app.state().search_focused);

    type_text(&mut app, "/zz");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().query.search, "zz");
    assert!(!app.state().search_focused);
    assert_eq!(app.page().body, Body::Empty);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_view_and_sort_keys() {
    let (mut app, _store) = loaded_app().await;

    press(&mut app, KeyCode::Char('v'));
    assert_eq!(app.state().view_mode, ViewMode::Grid);
    assert!(matches!(app.page().body, Body::Tasks { mode: ViewMode::Grid, .. }));

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.state().query.sort, SortOrder::Oldest);
    assert_eq!(visible_titles(&app)[0], "Buy milk");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().query.filter, Filter::Today);
}

#[tokio::test]
async fn test_help_overlay_and_quit_keys() {
    let (mut app, _store) = new_app();

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.page().modal, Some(Modal::Help));
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.page().modal, None);
    assert!(!app.should_quit());

    // Ctrl+C works even with a form open
    press(&mut app, KeyCode::Char('a'));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}
