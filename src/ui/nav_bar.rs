use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};

use navfold::logic::layout::{bar_slots, BarSlot, SlotKind, BAR_INSET};
use navfold::model::{BarFocus, NavBarModel};

/// Everything the bar needs besides the engine state
pub struct NavBarProps<'a> {
    pub title: &'a str,
    pub container_x: u16,
    pub focus: Option<BarFocus>,
    /// Section currently at the top of the content pane
    pub active_item: Option<usize>,
    pub compact: bool,
}

/// Text drawn for a slot, styled exactly as it was measured
pub fn slot_text(nav: &NavBarModel, kind: SlotKind) -> String {
    let style = nav.style();
    let Some(glyphs) = nav.glyphs() else {
        return String::new();
    };
    match kind {
        SlotKind::Item(i) => nav
            .items()
            .get(i)
            .map(|item| style.render_label(&item.label))
            .unwrap_or_default(),
        SlotKind::More => style.render_label(glyphs.more_label()),
        SlotKind::Secondary => nav
            .secondary()
            .map(|link| style.render_label(&link.display_text(glyphs)))
            .unwrap_or_default(),
    }
}

fn slot_style(nav: &NavBarModel, kind: SlotKind, props: &NavBarProps) -> Style {
    let base = nav.style().cell_style();
    let mut style = match kind {
        SlotKind::Item(i) if props.active_item == Some(i) => base.fg(Color::Yellow),
        SlotKind::Item(_) => base.fg(Color::White),
        SlotKind::More if nav.disclosure.is_open() => base.fg(Color::Black).bg(Color::Cyan),
        SlotKind::More => base.fg(Color::Cyan),
        SlotKind::Secondary => base.fg(Color::Magenta),
    };

    let focused = match (kind, props.focus) {
        (SlotKind::Item(i), Some(BarFocus::Item(f))) => i == f,
        (SlotKind::More, Some(BarFocus::More)) => true,
        (SlotKind::Secondary, Some(BarFocus::Secondary)) => true,
        _ => false,
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Draw the bar into `buf` and return the slots that were drawn
///
/// While the engine is unmeasured only the title is drawn, so a
/// not-yet-collapsed layout never flashes on screen.
pub fn draw_nav_bar(
    buf: &mut Buffer,
    area: Rect,
    nav: &NavBarModel,
    props: &NavBarProps,
) -> Vec<BarSlot> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    if !props.compact {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);
    }

    let row = area.y;
    let right = area.right();
    let brand_x = area.x + BAR_INSET;
    if brand_x < right {
        buf.set_stringn(
            brand_x,
            row,
            props.title,
            (right - brand_x) as usize,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
    }

    let layout = nav.layout();
    if !layout.measured {
        return Vec::new();
    }

    let slots = bar_slots(
        nav.widths(),
        layout.visible_count,
        nav.gap(),
        nav.more_width(),
        area.x + props.container_x,
        nav.container_width(),
        nav.secondary_width(),
    );

    for slot in &slots {
        if slot.x >= right {
            continue;
        }
        let text = slot_text(nav, slot.kind);
        let max_width = (right - slot.x).min(slot.width) as usize;
        buf.set_stringn(slot.x, row, &text, max_width, slot_style(nav, slot.kind, props));
    }

    slots
}

/// Render the nav bar and return its hit slots
pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    nav: &NavBarModel,
    props: &NavBarProps,
) -> Vec<BarSlot> {
    draw_nav_bar(f.buffer_mut(), area, nav, props)
}
