use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the nav bar: items plus a bottom rule, or items only once scrolled
pub fn nav_bar_height(compact: bool) -> u16 {
    if compact {
        1
    } else {
        2
    }
}

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top navigation bar
    pub nav_area: Rect,
    /// Scrollable page content
    pub content_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, compact: bool, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_bar_height(compact)), // Nav bar (shrinks when scrolled)
            Constraint::Min(3),                          // Content area
            Constraint::Length(legend_height),           // Legend area (dynamic height)
            Constraint::Length(1),                       // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        nav_area: chunks[0],
        content_area: chunks[1],
        legend_area: chunks[2],
        status_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_full_bar() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24), false, 3);
        assert_eq!(info.nav_area.height, 2);
        assert_eq!(info.legend_area.height, 3);
        assert_eq!(info.status_area.height, 1);
        assert_eq!(info.content_area.height, 18);
        assert_eq!(info.status_area.y, 23);
    }

    #[test]
    fn test_layout_compact_bar_gives_row_to_content() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24), true, 3);
        assert_eq!(info.nav_area.height, 1);
        assert_eq!(info.content_area.height, 19);
        // Horizontal extent is the same either way
        assert_eq!(info.nav_area.width, 80);
    }
}
