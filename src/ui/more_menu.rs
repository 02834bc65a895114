use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use navfold::logic::layout::BarSlot;
use navfold::model::ui::MenuHit;
use navfold::model::NavBarModel;
use navfold::utils::truncate_to_width;
use navfold::GlyphSet;

/// Placement of the menu box (border included) below its trigger
///
/// The box is kept inside `screen`, sliding left when the trigger sits near
/// the right edge and shrinking when the screen is too small.
pub fn menu_rect(trigger: &BarSlot, below_row: u16, labels: &[&str], screen: Rect) -> Rect {
    let widest = labels.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    // Cursor + space, label, trailing space, borders
    let width = (widest + 3 + 2).min(screen.width);
    let height = (labels.len() as u16 + 2).min(screen.bottom().saturating_sub(below_row));
    let x = trigger.x.min(screen.right().saturating_sub(width));
    Rect::new(x, below_row, width, height)
}

/// Build the entry lines of the menu
pub fn build_menu_lines(
    labels: &[&str],
    selected: usize,
    glyphs: GlyphSet,
    inner_width: u16,
) -> Vec<Line<'static>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let is_selected = i == selected;
            let cursor = if is_selected { glyphs.menu_cursor() } else { " " };
            let text = truncate_to_width(label, inner_width.saturating_sub(2) as usize);
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{} ", cursor), style),
                Span::styled(format!("{} ", text), style),
            ])
        })
        .collect()
}

/// Render the overflow menu under its trigger and return its hit area
pub fn render_more_menu(
    f: &mut Frame,
    screen: Rect,
    nav: &NavBarModel,
    trigger: &BarSlot,
    below_row: u16,
) -> Option<MenuHit> {
    let glyphs = nav.glyphs()?;
    let labels: Vec<&str> = nav.overflow_items().iter().map(|i| i.label.as_str()).collect();
    if labels.is_empty() {
        return None;
    }

    let area = menu_rect(trigger, below_row, &labels, screen);
    if area.width < 3 || area.height < 3 {
        return None;
    }

    let inner_width = area.width - 2;
    let lines = build_menu_lines(&labels, nav.disclosure.selected(), glyphs, inner_width);

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, area);
    f.render_widget(menu, area);

    Some(MenuHit {
        x: area.x + 1,
        y: area.y + 1,
        width: inner_width,
        entries: (area.height - 2).min(labels.len() as u16),
    })
}
