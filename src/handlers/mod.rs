//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - mouse: Clicks, pointer movement and wheel scrolling
//!
//! `update` is the single entry point of the Elm loop: every `Msg` goes
//! through it.

pub mod keyboard;
pub mod mouse;

use anyhow::Result;
use std::time::Instant;

use crate::messages::Msg;
use crate::App;
use navfold::log_debug;

pub use keyboard::handle_key;
pub use mouse::handle_mouse;

/// Apply one message to the app
pub fn update(app: &mut App, msg: Msg) -> Result<()> {
    match msg {
        Msg::KeyPress(key) => handle_key(app, key)?,
        Msg::Mouse(mouse) => handle_mouse(app, mouse),
        Msg::Resize(width, height) => app.handle_resize(width, height),
        Msg::Readiness(signal) => {
            app.apply_readiness(signal);
        }
        Msg::Tick => {
            if app.model.nav.tick(Instant::now()) {
                log_debug("nav: delayed close fired");
            }
            app.model.content.tick();
            if app.model.should_dismiss_toast() {
                app.model.ui.dismiss_toast();
            }
        }
    }
    Ok(())
}
