use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use navfold::logic::scroll::wrap_lines;
use navfold::model::ContentModel;

/// Build the pre-wrapped lines of every section
///
/// Wrapping here uses the same routine as the section offsets, so a scroll to
/// an anchor lands exactly on its heading.
pub fn build_content_lines(content: &ContentModel, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in &content.sections {
        lines.push(Line::from(Span::styled(
            section.label.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        for row in wrap_lines(&section.body, width) {
            lines.push(Line::from(row));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Inner text area of the content pane (left/right padding of one cell)
pub fn content_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

/// Render the scrollable content pane
pub fn render_content(f: &mut Frame, area: Rect, content: &ContentModel) {
    let inner = content_inner(area);
    let lines = build_content_lines(content, inner.width);
    let offset = content.scroll_offset.min(u16::MAX as usize) as u16;

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .scroll((offset, 0));
    f.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use navfold::model::Section;

    #[test]
    fn test_content_lines_match_section_offsets() {
        let sections = vec![
            Section {
                id: "about".to_string(),
                label: "About".to_string(),
                body: "one two three four".to_string(),
            },
            Section {
                id: "work".to_string(),
                label: "Work".to_string(),
                body: "five".to_string(),
            },
        ];
        let mut content = ContentModel::new(sections);
        content.relayout(9, 3);
        let lines = build_content_lines(&content, 9);

        assert!(content.scroll_to_section("work"));
        let target = content.scroll_target.unwrap_or(0);
        let heading: String = lines[target].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(heading, "Work");
    }
}
