//! Mouse Input Handler
//!
//! Hit-tests the areas recorded by the last render. Leaving the open
//! overflow menu arms a delayed close; coming back cancels it.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use crate::App;
use navfold::logic::layout::{slot_at, SlotKind};

/// Rows moved by one wheel notch
const WHEEL_ROWS: isize = 3;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    let hit_map = &app.model.ui.hit_map;
    let on_bar = row == hit_map.bar_row;
    let bar_slot = if on_bar {
        slot_at(&hit_map.slots, column)
    } else {
        None
    };
    let menu = hit_map.menu;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(entry) = menu.and_then(|m| m.entry_at(column, row)) {
                app.model.nav.disclosure.select(entry);
                app.activate_overflow_selection();
            } else if let Some(kind) = bar_slot {
                app.activate_slot(kind);
            } else if menu.is_some_and(|m| !m.contains(column, row)) {
                // Click outside the open menu dismisses it
                app.model.nav.disclosure.close();
            }
        }
        MouseEventKind::Moved => {
            if !app.model.nav.disclosure.is_open() {
                return;
            }
            let over_menu = menu.is_some_and(|m| m.contains(column, row));
            let over_trigger = bar_slot == Some(SlotKind::More);
            if over_menu || over_trigger {
                if let Some(entry) = menu.and_then(|m| m.entry_at(column, row)) {
                    app.model.nav.disclosure.select(entry);
                }
                app.model.nav.disclosure.cancel_close();
            } else {
                app.model.nav.disclosure.schedule_close(Instant::now());
            }
        }
        MouseEventKind::ScrollDown => app.model.content.scroll_by(WHEEL_ROWS),
        MouseEventKind::ScrollUp => app.model.content.scroll_by(-WHEEL_ROWS),
        _ => {}
    }
}
