//! Readiness methods
//!
//! Everything that can change the bar's layout decision funnels through
//! here: terminal resizes, glyph readiness/switches, and the secondary link
//! appearing or disappearing.

use unicode_width::UnicodeWidthStr;

use crate::App;
use navfold::log_debug;
use navfold::logic::{layout, ui as ui_logic};
use navfold::model::{LayoutResult, Readiness};

impl App {
    /// Columns left for nav entries at the current terminal width
    pub(crate) fn nav_container_width(&self) -> u16 {
        layout::nav_container_width(self.terminal_size.0, self.title.width() as u16)
    }

    /// First column of the nav container
    pub(crate) fn nav_container_x(&self) -> u16 {
        let brand = self.title.width() as u16;
        if brand > 0 {
            layout::BAR_INSET + brand + layout::BRAND_GAP
        } else {
            layout::BAR_INSET
        }
    }

    /// Forward a readiness signal to the model and log the decision
    pub(crate) fn apply_readiness(&mut self, signal: Readiness) -> Option<LayoutResult> {
        let before = self.model.nav.layout();
        let result = self.model.apply_readiness(signal, &self.measurer)?;
        if result != before {
            log_debug(&format!(
                "layout: {:?} -> {:?} (container {}, more {}, secondary {})",
                before,
                result,
                self.model.nav.container_width(),
                self.model.nav.more_width(),
                self.model.nav.secondary_width()
            ));
        }
        Some(result)
    }

    /// Terminal resized: recompute against the new container width
    pub(crate) fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        let container = self.nav_container_width();
        self.apply_readiness(Readiness::Resize { width: container });
    }

    /// Switch to the next glyph set; cached widths become stale
    pub(crate) fn cycle_glyphs(&mut self) {
        let Some(current) = self.model.nav.glyphs() else {
            // Still waiting for the first resolution
            return;
        };
        let next = ui_logic::cycle_glyph_set(current);
        self.apply_readiness(Readiness::GlyphsReady(next));
        self.model.ui.show_toast(format!("Glyphs: {}", next.as_str()));
    }

    /// Show or hide the secondary link
    pub(crate) fn toggle_secondary(&mut self) {
        if self.secondary_link.is_none() {
            self.model.ui.show_toast("Error: no secondary link configured".to_string());
            return;
        }
        self.model.ui.show_secondary = !self.model.ui.show_secondary;
        let link = if self.model.ui.show_secondary {
            self.secondary_link.clone()
        } else {
            None
        };
        self.apply_readiness(Readiness::SecondaryChanged(link));
    }
}
