//! Dialog rendering functions

pub mod common;
mod delete_confirmation_dialog;
mod system_dialogs;
mod task_dialogs;

pub use delete_confirmation_dialog::{render_delete_confirmation_dialog, title_preview};
pub use system_dialogs::{render_help_dialog, HELP_SECTIONS};
pub use task_dialogs::render_task_form_dialog;
