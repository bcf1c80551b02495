use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical layout of the search screen
pub struct AppLayout {
    pub input_area: Rect,
    pub chips_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the layout:
    /// - Input box: 3 rows (bordered single-line field)
    /// - Bang chips: 3 rows
    /// - Suggestion/history list: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input box
                Constraint::Length(3), // Bang chips
                Constraint::Min(3),    // Suggestions / history
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            input_area: chunks[0],
            chips_area: chunks[1],
            list_area: chunks[2],
            status_area: chunks[3],
        }
    }
}
