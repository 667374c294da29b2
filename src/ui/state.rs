//! Session state owned by the controller.
//!
//! `AppState` is the single source for everything the screen shows. It is
//! created once per session and mutated only by
//! [`AppComponent`](crate::ui::app_component::AppComponent).

use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::config::UiConfig;
use crate::constants::ERROR_TITLE_REQUIRED;
use crate::pipeline::{self, ViewMode, ViewQuery};
use crate::task::{Task, TaskDraft, TaskId};

/// Progress of the most recent list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Last known result of the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Checking,
    Healthy,
    /// The API answered but did not report `OK`.
    Unhealthy,
    /// The API could not be reached.
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Completed,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Completed,
            Self::Completed => Self::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Title => Self::Completed,
            Self::Description => Self::Title,
            Self::Completed => Self::Description,
        }
    }
}

/// Edits the form dialog translates key presses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    NextField,
    PreviousField,
    Submit,
    Cancel,
}

/// Contents of the create/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub mode: FormMode,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub focus: FormField,
    /// Validation message shown under the fields
    pub error: Option<String>,
}

impl TaskForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            completed: false,
            focus: FormField::Title,
            error: None,
        }
    }

    pub fn edit(task: &Task) -> Self {
        let draft = TaskDraft::from(task);
        Self {
            mode: FormMode::Edit(task.id.clone()),
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            focus: FormField::Title,
            error: None,
        }
    }

    /// Apply an editing input. `Submit` and `Cancel` are handled by the controller.
    pub fn apply(&mut self, input: FormInput) {
        match input {
            FormInput::Char(c) => match self.focus {
                FormField::Title => self.title.push(c),
                FormField::Description => self.description.push(c),
                FormField::Completed => {
                    if c == ' ' || c == 'x' {
                        self.completed = !self.completed;
                    }
                }
            },
            FormInput::Backspace => match self.focus {
                FormField::Title => {
                    self.title.pop();
                }
                FormField::Description => {
                    self.description.pop();
                }
                FormField::Completed => {}
            },
            FormInput::NextField => self.focus = self.focus.next(),
            FormInput::PreviousField => self.focus = self.focus.previous(),
            FormInput::Submit | FormInput::Cancel => {}
        }
    }

    /// Build the request body, rejecting a blank title.
    ///
    /// This is the only validation the client performs; everything else is
    /// left to the store.
    pub fn to_draft(&self) -> Result<TaskDraft, &'static str> {
        if self.title.trim().is_empty() {
            return Err(ERROR_TITLE_REQUIRED);
        }
        Ok(TaskDraft::new(self.title.clone(), self.description.clone(), self.completed))
    }
}

/// A store mutation that has been issued and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingMutation {
    /// Create or update, depending on the form mode. The form is kept so a
    /// failure can reopen it unchanged.
    Save(TaskForm),
    Delete(TaskId),
    Toggle(TaskId),
}

/// Which kind of mutation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Toggle,
}

impl PendingMutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::Save(form) => match form.mode {
                FormMode::Create => MutationKind::Create,
                FormMode::Edit(_) => MutationKind::Update,
            },
            Self::Delete(_) => MutationKind::Delete,
            Self::Toggle(_) => MutationKind::Toggle,
        }
    }
}

/// Where the create/edit/delete/toggle flow currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Editing(TaskForm),
    ConfirmingDelete {
        id: TaskId,
        title: String,
    },
    Submitting(PendingMutation),
}

/// Everything the UI shows, owned by one session.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cached copy of the store's list; only replaced wholesale
    pub tasks: Vec<Task>,
    pub query: ViewQuery,
    pub view_mode: ViewMode,
    /// Index into the derived (visible) list
    pub selected: usize,
    pub search_focused: bool,
    pub load: LoadState,
    pub health: HealthState,
    pub mutation: MutationState,
    pub toast: Option<Toast>,
    pub show_help: bool,
}

impl AppState {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            tasks: Vec::new(),
            query: ViewQuery {
                filter: ui.default_filter,
                sort: ui.default_sort,
                search: String::new(),
            },
            view_mode: ui.default_view,
            selected: 0,
            search_focused: false,
            load: LoadState::Loading,
            health: HealthState::Checking,
            mutation: MutationState::Idle,
            toast: None,
            show_help: false,
        }
    }

    /// Swap in a freshly fetched list.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>, today: NaiveDate) {
        self.tasks = tasks;
        self.load = LoadState::Loaded;
        self.clamp_selection(today);
    }

    pub fn visible_tasks(&self, today: NaiveDate) -> Vec<&Task> {
        pipeline::derive(&self.tasks, &self.query, today)
    }

    pub fn selected_task(&self, today: NaiveDate) -> Option<&Task> {
        self.visible_tasks(today).get(self.selected).copied()
    }

    pub fn clamp_selection(&mut self, today: NaiveDate) {
        let len = self.visible_tasks(today).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self, today: NaiveDate) {
        let len = self.visible_tasks(today).len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.mutation, MutationState::Submitting(_))
    }

    pub fn modal_open(&self) -> bool {
        self.show_help || matches!(self.mutation, MutationState::Editing(_) | MutationState::ConfirmingDelete { .. })
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible for `ttl`. Returns whether it was dropped.
    pub fn expire_toast(&mut self, now: Instant, ttl: Duration) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now, ttl)) {
            self.toast = None;
            return true;
        }
        false
    }
}
