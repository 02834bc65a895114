//! Message types for the Elm Architecture pattern
//!
//! Every event that reaches the update loop is a `Msg`:
//! - User input (keyboard and mouse events)
//! - Terminal resizes
//! - Readiness signals from background services (glyph detection)
//! - Frame ticks (timers, smooth scrolling, toast dismissal)

use crossterm::event::{KeyEvent, MouseEvent};

use navfold::model::Readiness;

/// Unified message type for all application events
#[derive(Debug)]
pub enum Msg {
    /// User pressed a key
    KeyPress(KeyEvent),

    /// Mouse click, movement or wheel
    Mouse(MouseEvent),

    /// Terminal was resized to (columns, rows)
    Resize(u16, u16),

    /// Readiness signal produced off the input path
    Readiness(Readiness),

    /// One frame elapsed
    Tick,
}
