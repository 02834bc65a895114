use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the legend needs to know about the current state
#[derive(Clone, Copy, Debug, Default)]
pub struct LegendState {
    /// Overflow menu is open and has keyboard control
    pub menu_open: bool,
    /// The bar currently shows a More trigger
    pub has_overflow: bool,
    /// A secondary link is configured
    pub has_secondary: bool,
    /// Keyboard focus is on the bar
    pub bar_focused: bool,
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(state: LegendState) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut hotkey_spans = vec![];

    if state.menu_open {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Select  "),
            key("Enter"),
            Span::raw(":Go  "),
            key("Esc"),
            Span::raw(":Close  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("←/→"),
            Span::raw(":Focus  "),
            key("↑/↓"),
            Span::raw(":Scroll  "),
        ]);
        if state.bar_focused {
            hotkey_spans.extend(vec![key("Enter"), Span::raw(":Go  ")]);
        }
    }

    // Only offered while something is folded away
    if state.has_overflow && !state.menu_open {
        hotkey_spans.extend(vec![key("m"), Span::raw(":More  ")]);
    }

    hotkey_spans.extend(vec![key("g"), Span::raw(":Glyphs  ")]);

    if state.has_secondary {
        hotkey_spans.extend(vec![key("s"), Span::raw(":Link  ")]);
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(state: LegendState) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(state))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, state: LegendState) {
    f.render_widget(build_legend_paragraph(state), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, state: LegendState) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(state))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
