//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Task completion markers
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// API health indicator
#[derive(Debug, Clone)]
pub struct HealthIcons {
    pub healthy: &'static str,
    pub unhealthy: &'static str,
    pub checking: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub search: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub health: HealthIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                task_status: TaskStatusIcons {
                    pending: "🔳",
                    completed: "✅",
                },
                health: HealthIcons {
                    healthy: "🟢",
                    unhealthy: "🔴",
                    checking: "🟡",
                },
                ui: UiIcons {
                    tasks_title: "📝",
                    search: "🔍",
                    error: "❌",
                    warning: "⚠️",
                    success: "✅",
                },
            },
            IconTheme::Unicode => IconSet {
                task_status: TaskStatusIcons {
                    pending: "□",
                    completed: "✓",
                },
                health: HealthIcons {
                    healthy: "●",
                    unhealthy: "●",
                    checking: "○",
                },
                ui: UiIcons {
                    tasks_title: "▶",
                    search: "⌕",
                    error: "✗",
                    warning: "⚠",
                    success: "✓",
                },
            },
            IconTheme::Ascii => IconSet {
                task_status: TaskStatusIcons {
                    pending: "[ ]",
                    completed: "[X]",
                },
                health: HealthIcons {
                    healthy: "(+)",
                    unhealthy: "(x)",
                    checking: "(.)",
                },
                ui: UiIcons {
                    tasks_title: ">",
                    search: "/",
                    error: "X",
                    warning: "!",
                    success: "+",
                },
            },
        }
    }

    #[must_use]
    pub fn task_status(&self, completed: bool) -> &'static str {
        let icons = self.icons().task_status;
        if completed {
            icons.completed
        } else {
            icons.pending
        }
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Unicode);
    }

    #[test]
    fn test_task_status_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.task_status(false), "[ ]");
        assert_eq!(service.task_status(true), "[X]");

        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.task_status(true), "✅");
    }

    #[test]
    fn test_theme_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: IconTheme,
        }
        let parsed: Wrapper = toml::from_str("theme = \"ascii\"").unwrap();
        assert_eq!(parsed.theme, IconTheme::Ascii);
    }
}
