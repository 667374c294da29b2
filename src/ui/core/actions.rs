use crate::pipeline::Filter;
use crate::task::{HealthReport, Task, TaskId};
use crate::ui::state::{FormInput, MutationKind};

/// Outcome of a `GET /health` round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthOutcome {
    Reported(HealthReport),
    Unreachable(String),
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SetFilter(Filter),
    CycleFilter,
    CycleSort,
    ToggleView,
    NextTask,
    PreviousTask,

    // Search
    FocusSearch(bool),
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // Loading
    LoadTasks,
    /// `generation` identifies the `LoadTasks` that produced the result.
    TasksLoaded {
        generation: u64,
        tasks: Vec<Task>,
    },
    LoadFailed {
        generation: u64,
        error: String,
    },

    // Health
    CheckHealth,
    HealthChecked(HealthOutcome),

    // Task operations
    OpenCreateForm,
    RequestEdit(TaskId),
    TaskFetched(Task),
    TaskFetchFailed(String),
    Form(FormInput),
    RequestDelete(TaskId),
    ConfirmDelete,
    CancelMutation,
    ToggleTask(TaskId),
    MutationSucceeded(MutationKind),
    MutationFailed {
        kind: MutationKind,
        error: String,
    },

    // UI operations
    ShowHelp(bool),
    DismissToast,

    // App control
    Quit,
    None,
}
