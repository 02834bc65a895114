use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Where the toast box goes inside `area`
pub fn toast_rect(area: Rect, message: &str) -> Rect {
    let max_width = area.width.min(80);
    // Icon, padding and borders
    let width = (message.width() as u16).saturating_add(6).min(max_width);
    let height = 4.min(area.height);
    let x = area.width.saturating_sub(width) / 2;
    let y = 3.min(area.height.saturating_sub(height));

    Rect {
        x: area.x + x,
        y: area.y + y,
        width,
        height,
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str, glyphs_unicode: bool) {
    let toast_area = toast_rect(area, message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = match (is_error, glyphs_unicode) {
        (true, true) => ("✗ ", Color::Red),
        (true, false) => ("x ", Color::Red),
        (false, true) => ("✓ ", Color::Green),
        (false, false) => ("* ", Color::Green),
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), Style::default()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_centered() {
        let rect = toast_rect(Rect::new(0, 0, 80, 24), "Glyphs: unicode");
        assert_eq!(rect.width, 21);
        assert_eq!(rect.x, 29);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn test_toast_fits_tiny_terminal() {
        let rect = toast_rect(Rect::new(0, 0, 10, 2), "a long message that will not fit");
        assert!(rect.width <= 10);
        assert!(rect.height <= 2);
    }
}
