//! Keyboard Input Handler
//!
//! Handles keyboard input for the bar, the overflow menu and the content pane.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

/// Rows moved by one PageUp/PageDown
const PAGE_ROWS: isize = 10;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Quit works everywhere
    if key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Overflow menu keys take priority while it is open
    if app.model.nav.disclosure.is_open() {
        let overflow_len = app.model.nav.overflow_items().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                app.model.nav.disclosure.select_prev(overflow_len);
                return Ok(());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.model.nav.disclosure.select_next(overflow_len);
                return Ok(());
            }
            KeyCode::Enter => {
                app.activate_overflow_selection();
                return Ok(());
            }
            KeyCode::Esc => {
                app.model.nav.disclosure.close();
                return Ok(());
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                // Leaving the trigger closes the menu, then focus moves as usual
                app.model.nav.disclosure.close();
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.focus_next(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.focus_prev(),
        KeyCode::Enter => app.activate_focus(),
        KeyCode::Esc => app.model.ui.focus = None,
        KeyCode::Char('m') => app.toggle_more(),
        KeyCode::Char('g') => app.cycle_glyphs(),
        KeyCode::Char('s') => app.toggle_secondary(),
        KeyCode::Down | KeyCode::Char('j') => app.model.content.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.model.content.scroll_by(-1),
        KeyCode::PageDown => app.model.content.scroll_by(PAGE_ROWS),
        KeyCode::PageUp => app.model.content.scroll_by(-PAGE_ROWS),
        KeyCode::Home => app.model.content.scroll_target = Some(0),
        _ => {}
    }

    Ok(())
}
