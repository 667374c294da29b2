//! Layout management and calculations

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::constants::SIDEBAR_WIDTH;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub toolbar: Rect,
    pub tasks: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Sidebar on the left; toolbar, task area and a one-line status bar on the right.
    #[must_use]
    pub fn main_layout(area: Rect) -> ScreenAreas {
        // Fixed width, but never more than a third of the screen
        let sidebar_width = SIDEBAR_WIDTH.min(area.width / 3);
        let [sidebar, right] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
        let [toolbar, tasks, status] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).areas(right);

        ScreenAreas {
            sidebar,
            toolbar,
            tasks,
            status,
        }
    }

    fn center(area: Rect, width: Constraint, height: Constraint) -> Rect {
        let [row] = Layout::vertical([height]).flex(Flex::Center).areas(area);
        let [cell] = Layout::horizontal([width]).flex(Flex::Center).areas(row);
        cell
    }

    /// Centered popup sized in percent of `area`.
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Percentage(percent_y))
    }

    /// Centered popup with a percentage width and a fixed number of lines.
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, lines: u16, area: Rect) -> Rect {
        Self::center(area, Constraint::Percentage(percent_x), Constraint::Length(lines.min(area.height)))
    }

    /// Help panel size in percent of the screen; small terminals get a larger share.
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let width = if screen_width < 80 { 90 } else { 60 };
        let height = if screen_height < 30 { 90 } else { 70 };
        (width, height)
    }
}
