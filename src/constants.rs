//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

use crate::pipeline::Filter;

// API
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const API_URL_ENV: &str = "TODOTERM_API_URL";

// Page headers
pub const TITLE_ALL: &str = "All tasks";
pub const TITLE_TODAY: &str = "Today's tasks";
pub const TITLE_PENDING: &str = "Pending tasks";
pub const TITLE_COMPLETED: &str = "Completed tasks";
pub const SUBTITLE_ALL: &str = "All your tasks in one place";
pub const SUBTITLE_TODAY: &str = "Tasks created today";
pub const SUBTITLE_PENDING: &str = "Tasks waiting for your attention";
pub const SUBTITLE_COMPLETED: &str = "Tasks you have already finished";

// Success Messages
pub const SUCCESS_API_CONNECTED: &str = "API connected";
pub const SUCCESS_TASK_CREATED: &str = "Task created";
pub const SUCCESS_TASK_UPDATED: &str = "Task updated";
pub const SUCCESS_TASK_DELETED: &str = "Task deleted";

// Error Messages
pub const ERROR_API_UNHEALTHY: &str = "The API reported a problem";
pub const ERROR_API_UNREACHABLE: &str = "Could not reach the API";
pub const ERROR_LOAD_FAILED: &str = "Failed to load tasks";
pub const ERROR_TASK_FETCH_FAILED: &str = "Failed to load task";
pub const ERROR_TASK_SAVE_FAILED: &str = "Failed to save task";
pub const ERROR_TASK_DELETE_FAILED: &str = "Failed to delete task";
pub const ERROR_TASK_TOGGLE_FAILED: &str = "Failed to change task status";

// Validation Error Messages
pub const ERROR_TITLE_REQUIRED: &str = "Title is required";

// Placeholders
pub const PLACEHOLDER_LOADING: &str = "Loading tasks...";
pub const PLACEHOLDER_EMPTY: &str = "No tasks here. Press 'a' to add one.";
pub const PLACEHOLDER_RETRY: &str = "Press 'r' to try again";

// Health indicator
pub const HEALTH_CONNECTED: &str = "Connected";
pub const HEALTH_API_ERROR: &str = "API error";
pub const HEALTH_OFFLINE: &str = "Offline";
pub const HEALTH_CHECKING: &str = "Checking...";

// Limits
pub const MIN_TOAST_SECONDS: u64 = 1;
pub const MAX_TOAST_SECONDS: u64 = 60;
pub const MAX_HEALTH_INTERVAL_SECONDS: u64 = 86_400;

// UI Layout Constants
/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 28;
/// Minimum width of one card in grid view
pub const GRID_CARD_MIN_WIDTH: u16 = 32;
/// Height of one card in grid view
pub const GRID_CARD_HEIGHT: u16 = 6;

pub fn page_title(filter: Filter) -> &'static str {
    match filter {
        Filter::All => TITLE_ALL,
        Filter::Today => TITLE_TODAY,
        Filter::Pending => TITLE_PENDING,
        Filter::Completed => TITLE_COMPLETED,
    }
}

pub fn page_subtitle(filter: Filter) -> &'static str {
    match filter {
        Filter::All => SUBTITLE_ALL,
        Filter::Today => SUBTITLE_TODAY,
        Filter::Pending => SUBTITLE_PENDING,
        Filter::Completed => SUBTITLE_COMPLETED,
    }
}
