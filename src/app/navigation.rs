//! Navigation methods
//!
//! Focus movement on the bar and activation of nav entries.

use crate::App;
use navfold::log_debug;
use navfold::logic::layout::SlotKind;
use navfold::logic::navigation::{focus_left, focus_right};
use navfold::model::{BarFocus, NavTarget};

impl App {
    fn focus_context(&self) -> (usize, bool, bool) {
        let layout = self.model.nav.layout();
        (
            if layout.measured { layout.visible_count } else { 0 },
            self.model.nav.has_overflow(),
            self.model.nav.secondary().is_some(),
        )
    }

    pub(crate) fn focus_next(&mut self) {
        let (visible, has_more, has_secondary) = self.focus_context();
        self.model.ui.focus = focus_right(self.model.ui.focus, visible, has_more, has_secondary);
    }

    pub(crate) fn focus_prev(&mut self) {
        let (visible, has_more, has_secondary) = self.focus_context();
        self.model.ui.focus = focus_left(self.model.ui.focus, visible, has_more, has_secondary);
    }

    /// Scroll the content pane to a nav target
    pub(crate) fn navigate_to(&mut self, target: NavTarget) {
        log_debug(&format!("navigate: {}", target.id));
        if !self.model.navigate(&target) {
            self.model
                .ui
                .show_toast(format!("Error: no section '{}'", target.id));
        }
    }

    /// Activate item `index`, inline or overflowed
    pub(crate) fn activate_item(&mut self, index: usize) {
        if let Some(target) = self.model.nav.activate(index) {
            self.navigate_to(target);
        }
    }

    /// Activate the highlighted overflow entry
    pub(crate) fn activate_overflow_selection(&mut self) {
        if let Some(target) = self.model.nav.activate_selected_overflow() {
            self.model.ui.focus = Some(BarFocus::More);
            self.navigate_to(target);
        }
    }

    /// Toggle the overflow menu and move focus to its trigger
    pub(crate) fn toggle_more(&mut self) {
        if self.model.nav.toggle_more() {
            self.model.ui.focus = Some(BarFocus::More);
        }
    }

    pub(crate) fn open_secondary(&mut self) {
        if let Some(link) = self.model.nav.secondary() {
            let message = format!("Open {}", link.href);
            self.model.nav.disclosure.close();
            self.model.ui.show_toast(message);
        }
    }

    /// Activate whatever has keyboard focus
    pub(crate) fn activate_focus(&mut self) {
        match self.model.ui.focus {
            Some(BarFocus::Item(i)) => self.activate_item(i),
            Some(BarFocus::More) => self.toggle_more(),
            Some(BarFocus::Secondary) => self.open_secondary(),
            None => {}
        }
    }

    /// Activate a bar slot hit by the pointer
    pub(crate) fn activate_slot(&mut self, kind: SlotKind) {
        match kind {
            SlotKind::Item(i) => {
                self.model.ui.focus = Some(BarFocus::Item(i));
                self.activate_item(i);
            }
            SlotKind::More => self.toggle_more(),
            SlotKind::Secondary => {
                self.model.ui.focus = Some(BarFocus::Secondary);
                self.open_secondary();
            }
        }
    }
}
