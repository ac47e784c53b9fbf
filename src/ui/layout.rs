//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
    /// Footer with the copyright line.
    pub footer_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
    /// Profile dropdown area, under the right end of the status bar.
    pub menu_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, show_status_bar: bool) -> Self {
        let status_height = if show_status_bar { 1 } else { 0 };
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(status_height), // Status bar
                Constraint::Length(1),             // Tab bar
                Constraint::Min(0),                // Main content
                Constraint::Length(1),             // Footer
            ])
            .split(area);

        // Notification area sits at the bottom of the main area
        let notification_height = 3.min(chunks[2].height);
        let notification_area = Rect {
            x: area.x + area.width / 4,
            y: (chunks[2].y + chunks[2].height).saturating_sub(notification_height),
            width: area.width / 2,
            height: notification_height,
        };

        let menu_width = 26.min(area.width);
        let menu_area = Rect {
            x: area.x + area.width - menu_width,
            y: chunks[2].y,
            width: menu_width,
            height: 5.min(chunks[2].height),
        };

        Self {
            status_area: chunks[0],
            tab_area: chunks[1],
            main_area: chunks[2],
            footer_area: chunks[3],
            notification_area,
            menu_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlays_stay_inside_main_area() {
        let layout = Layout::new(Rect::new(0, 0, 100, 40), true);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.main_area.height, 37);
        let bottom = layout.notification_area.y + layout.notification_area.height;
        assert_eq!(bottom, layout.main_area.y + layout.main_area.height);
        assert_eq!(layout.menu_area.x + layout.menu_area.width, 100);
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let layout = Layout::new(Rect::new(0, 0, 10, 2), false);
        assert_eq!(layout.status_area.height, 0);
        assert!(layout.notification_area.height <= layout.main_area.height);
    }
}
