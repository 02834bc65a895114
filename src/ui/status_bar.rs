use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use navfold::model::{NavBarModel, NavPhase};

/// Single-line summary of the engine's current decision
pub fn build_status_line(nav: &NavBarModel, current_section: Option<&str>) -> String {
    let phase = match nav.phase() {
        NavPhase::Unmeasured => "measuring".to_string(),
        NavPhase::Measured { visible_count } => {
            format!("{}/{} inline", visible_count, nav.items().len())
        }
        NavPhase::Disposed => "disposed".to_string(),
    };
    let glyphs = nav.glyphs().map(|g| g.as_str()).unwrap_or("-");
    let section = current_section.unwrap_or("-");

    format!(
        "{:<16} │ {:>14} │ {:>10} │ {:>14}",
        format!("Nav: {}", phase),
        format!("Width: {}", nav.container_width()),
        format!("Glyphs: {}", glyphs),
        format!("At: {}", section),
    )
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    nav: &NavBarModel,
    current_section: Option<&str>,
) {
    let line = build_status_line(nav, current_section);
    let status = Paragraph::new(Line::from(Span::raw(line)))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
