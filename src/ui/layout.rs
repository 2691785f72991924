use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculated layout regions for the app
#[derive(Debug, Clone)]
pub struct AppLayout {
    pub shell_bar: Rect,
    pub counter: Rect,
    pub catalog: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from terminal area
    pub fn calculate(area: Rect) -> Self {
        // Vertical split: shell bar | counter | catalog | status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Shell bar (title + theme button)
                Constraint::Length(4), // Counter panel
                Constraint::Min(8),    // Catalog
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            shell_bar: vertical[0],
            counter: vertical[1],
            catalog: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Whether a terminal cell lies inside a rect
pub fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Helper to create a centered rect for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
