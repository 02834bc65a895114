//! UI Model
//!
//! This sub-model contains state related to the user interface around the
//! nav bar: keyboard focus, hit areas from the last frame, toast, quit flag.

use std::time::Instant;

use super::types::BarFocus;
use crate::logic::layout::BarSlot;

/// Hit area of the open overflow menu, in terminal coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuHit {
    pub x: u16,
    /// Row of the first entry
    pub y: u16,
    pub width: u16,
    pub entries: u16,
}

impl MenuHit {
    /// Entry index under (column, row), if any
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let inside_x = column >= self.x && column < self.x.saturating_add(self.width);
        let inside_y = row >= self.y && row < self.y.saturating_add(self.entries);
        if inside_x && inside_y {
            Some((row - self.y) as usize)
        } else {
            None
        }
    }

    /// Whether (column, row) is inside the menu, border included
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let left = self.x.saturating_sub(1);
        let right = self.x.saturating_add(self.width).saturating_add(1);
        let top = self.y.saturating_sub(1);
        let bottom = self.y.saturating_add(self.entries).saturating_add(1);
        column >= left && column < right && row >= top && row < bottom
    }
}

/// Where clickable things were drawn on the last frame
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    pub bar_row: u16,
    pub slots: Vec<BarSlot>,
    pub menu: Option<MenuHit>,
}

/// UI state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Keyboard focus on the bar (None = content has focus)
    pub focus: Option<BarFocus>,

    /// Whether the secondary link is shown
    pub show_secondary: bool,

    /// Hit areas recorded by the last render
    pub hit_map: HitMap,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(show_secondary: bool) -> Self {
        Self {
            focus: None,
            show_secondary,
            hit_map: HitMap::default(),
            toast_message: None,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
