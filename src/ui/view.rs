//! Pure description of what the screen shows.
//!
//! [`render_page`] turns an [`AppState`] into a [`PageView`]. Components only
//! paint a `PageView`, so everything that decides *what* is visible (counts,
//! placeholders, sanitized text, dates, tags) lives here and can be tested
//! without a terminal.

use chrono::NaiveDate;

use crate::config::DisplayConfig;
use crate::constants::{
    page_subtitle, page_title, HEALTH_API_ERROR, HEALTH_CHECKING, HEALTH_CONNECTED, HEALTH_OFFLINE,
};
use crate::pipeline::{Filter, TaskStats, ViewMode};
use crate::task::{Task, TaskId};
use crate::ui::state::{
    AppState, FormField, FormMode, HealthState, LoadState, MutationState, PendingMutation, TaskForm, ToastKind,
};
use crate::utils::datetime::format_local_date;
use crate::utils::text::{sanitize_inline, sanitize_multiline};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub header: Header,
    pub nav: Vec<NavEntry>,
    pub stats: TaskStats,
    pub health: HealthIndicator,
    pub toolbar: Toolbar,
    pub body: Body,
    pub modal: Option<Modal>,
    pub toast: Option<ToastView>,
    /// A store write is in flight
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub filter: Filter,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthIndicator {
    pub state: HealthState,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub sort_label: &'static str,
    pub view_mode: ViewMode,
    pub search: String,
    pub search_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    /// The last fetch failed; the list area shows the message and a retry hint.
    Error {
        message: String,
    },
    Empty,
    Tasks {
        mode: ViewMode,
        cards: Vec<TaskCard>,
        selected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created: String,
    pub updated: String,
    pub tag: Option<DecorativeTag>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Form(FormView),
    ConfirmDelete { title: String },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub editing: bool,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub focus: FormField,
    pub error: Option<String>,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    Personal,
    Shopping,
    Health,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Shopping => "shopping",
            Self::Health => "health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Cosmetic category/priority pair. Never sent to or read from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorativeTag {
    pub category: Category,
    pub priority: Priority,
}

impl DecorativeTag {
    /// Same id, same tag, on every run.
    pub fn for_task(id: &TaskId) -> Self {
        // FNV-1a
        let hash = id
            .as_str()
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325_u64, |h, b| (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3));

        let category = match hash % 4 {
            0 => Category::Work,
            1 => Category::Personal,
            2 => Category::Shopping,
            _ => Category::Health,
        };
        let priority = match (hash / 4) % 3 {
            0 => Priority::Low,
            1 => Priority::Medium,
            _ => Priority::High,
        };

        Self { category, priority }
    }
}

fn health_indicator(state: HealthState) -> HealthIndicator {
    let label = match state {
        HealthState::Checking => HEALTH_CHECKING,
        HealthState::Healthy => HEALTH_CONNECTED,
        HealthState::Unhealthy => HEALTH_API_ERROR,
        HealthState::Offline => HEALTH_OFFLINE,
    };
    HealthIndicator { state, label }
}

fn task_card(task: &Task, display: &DisplayConfig) -> TaskCard {
    TaskCard {
        id: task.id.clone(),
        title: sanitize_inline(&task.title),
        description: if display.show_descriptions {
            task.description.as_deref().map(sanitize_multiline)
        } else {
            None
        },
        completed: task.completed,
        created: format_local_date(&task.created_at, &display.date_format),
        updated: format_local_date(&task.updated_at, &display.date_format),
        tag: display.show_tags.then(|| DecorativeTag::for_task(&task.id)),
    }
}

fn form_view(form: &TaskForm, submitting: bool) -> FormView {
    FormView {
        editing: matches!(form.mode, FormMode::Edit(_)),
        title: sanitize_inline(&form.title),
        description: sanitize_multiline(&form.description),
        completed: form.completed,
        focus: form.focus,
        error: form.error.clone(),
        submitting,
    }
}

fn body(state: &AppState, today: NaiveDate, display: &DisplayConfig) -> Body {
    match &state.load {
        LoadState::Loading => Body::Loading,
        LoadState::Failed(message) => Body::Error {
            message: sanitize_inline(message),
        },
        LoadState::Loaded => {
            let visible = state.visible_tasks(today);
            if visible.is_empty() {
                return Body::Empty;
            }
            Body::Tasks {
                mode: state.view_mode,
                selected: state.selected.min(visible.len() - 1),
                cards: visible.into_iter().map(|task| task_card(task, display)).collect(),
            }
        }
    }
}

fn modal(state: &AppState) -> Option<Modal> {
    if state.show_help {
        return Some(Modal::Help);
    }
    match &state.mutation {
        MutationState::Editing(form) => Some(Modal::Form(form_view(form, false))),
        MutationState::ConfirmingDelete { title, .. } => Some(Modal::ConfirmDelete {
            title: sanitize_inline(title),
        }),
        MutationState::Submitting(PendingMutation::Save(form)) => Some(Modal::Form(form_view(form, true))),
        MutationState::Idle | MutationState::Submitting(_) => None,
    }
}

/// Describe the whole screen for `state` as of `today` (UTC).
pub fn render_page(state: &AppState, today: NaiveDate, display: &DisplayConfig) -> PageView {
    let filter = state.query.filter;
    let stats = TaskStats::compute(&state.tasks, today);

    PageView {
        header: Header {
            title: page_title(filter),
            subtitle: page_subtitle(filter),
        },
        nav: Filter::ALL
            .iter()
            .map(|&f| NavEntry {
                filter: f,
                label: f.label(),
                count: stats.count_for(f),
                active: f == filter,
            })
            .collect(),
        stats,
        health: health_indicator(state.health),
        toolbar: Toolbar {
            sort_label: state.query.sort.label(),
            view_mode: state.view_mode,
            search: sanitize_inline(&state.query.search),
            search_focused: state.search_focused,
        },
        body: body(state, today, display),
        modal: modal(state),
        toast: state.toast.as_ref().map(|toast| ToastView {
            kind: toast.kind,
            message: sanitize_inline(&toast.message),
        }),
        busy: state.is_submitting(),
    }
}
