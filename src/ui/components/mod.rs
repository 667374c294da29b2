//! Reusable UI components

pub mod badge;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod toast;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod sidebar_component;
pub mod task_list_component;
pub mod toolbar_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use sidebar_component::SidebarComponent;
pub use task_list_component::TaskListComponent;
pub use toolbar_component::ToolbarComponent;
