//! Navigation Bar Model
//!
//! Owns one bar's overflow state: the item list, cached label widths, the
//! container width, and the phase of the measure/recompute lifecycle.
//!
//! Lifecycle:
//! - `Unmeasured`: glyphs not resolved yet, or the container has no width.
//!   Nothing interactive is drawn.
//! - `Measured { visible_count }`: every readiness signal triggers a full
//!   synchronous recompute; the latest signal wins.
//! - `Disposed`: teardown. Signals are ignored from here on.

use std::time::Instant;

use super::disclosure::Disclosure;
use super::types::{LayoutResult, MeasureKey, MeasuredWidths, NavItem, NavTarget, SecondaryLink};
use crate::log_debug;
use crate::logic::layout::split_items;
use crate::logic::overflow::compute_visible_count;
use crate::measure::{NavStyle, TextMeasurer};
use crate::GlyphSet;

/// Phase of the measure/recompute lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    Unmeasured,
    Measured { visible_count: usize },
    Disposed,
}

impl NavPhase {
    pub fn visible_count(&self) -> Option<usize> {
        match self {
            NavPhase::Measured { visible_count } => Some(*visible_count),
            _ => None,
        }
    }
}

/// Events that can change the layout decision
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Readiness {
    /// The nav container was laid out at a new width
    Resize { width: u16 },
    /// Glyph set resolved (startup) or switched (runtime)
    GlyphsReady(GlyphSet),
    /// The secondary link appeared, disappeared or changed
    SecondaryChanged(Option<SecondaryLink>),
    /// The item list was replaced
    ItemsChanged(Vec<NavItem>),
}

/// Overflow state of a single navigation bar
#[derive(Clone, Debug)]
pub struct NavBarModel {
    items: Vec<NavItem>,
    secondary: Option<SecondaryLink>,
    style: NavStyle,
    gap: u16,

    /// None until the glyph set is resolved
    glyphs: Option<GlyphSet>,

    container_width: u16,

    /// Label widths for the current (items, glyphs, style)
    widths: Option<MeasuredWidths>,

    more_width: u16,
    secondary_width: u16,

    phase: NavPhase,

    pub disclosure: Disclosure,
}

impl NavBarModel {
    pub fn new(
        items: Vec<NavItem>,
        secondary: Option<SecondaryLink>,
        style: NavStyle,
        gap: u16,
    ) -> Self {
        Self {
            items,
            secondary,
            style,
            gap,
            glyphs: None,
            container_width: 0,
            widths: None,
            more_width: 0,
            secondary_width: 0,
            phase: NavPhase::Unmeasured,
            disclosure: Disclosure::new(),
        }
    }

    // ============================================
    // READINESS
    // ============================================

    /// Feed a readiness signal and recompute
    ///
    /// Returns `None` once the bar is disposed.
    pub fn apply(
        &mut self,
        signal: Readiness,
        measurer: &dyn TextMeasurer,
    ) -> Option<LayoutResult> {
        if self.is_disposed() {
            log_debug(&format!("nav: ignoring {:?} after dispose", signal));
            return None;
        }

        match signal {
            Readiness::Resize { width } => {
                self.container_width = width;
            }
            Readiness::GlyphsReady(glyphs) => {
                self.glyphs = Some(glyphs);
            }
            Readiness::SecondaryChanged(secondary) => {
                self.secondary = secondary;
            }
            Readiness::ItemsChanged(items) => {
                if items != self.items {
                    // Menu entries and the selection index refer to the old list
                    self.disclosure.close();
                }
                self.items = items;
            }
        }

        Some(self.recompute(measurer))
    }

    /// Full synchronous recompute from the current inputs
    ///
    /// Calling this again without changing inputs yields the same result.
    pub fn recompute(&mut self, measurer: &dyn TextMeasurer) -> LayoutResult {
        if self.is_disposed() {
            return LayoutResult::unmeasured();
        }

        let Some(glyphs) = self.glyphs else {
            self.set_phase(NavPhase::Unmeasured);
            return self.layout();
        };

        if self.container_width == 0 {
            // Container not laid out yet: defer rather than guess
            self.set_phase(NavPhase::Unmeasured);
            return self.layout();
        }

        self.ensure_widths(glyphs, measurer);
        self.more_width = measurer.measure_text(glyphs.more_label(), &self.style);
        self.secondary_width = self
            .secondary
            .as_ref()
            .map(|link| measurer.measure_text(&link.display_text(glyphs), &self.style))
            .unwrap_or(0);

        let visible_count = compute_visible_count(
            self.widths(),
            self.container_width,
            self.secondary_width,
            self.gap,
            self.more_width,
        );

        self.set_phase(NavPhase::Measured { visible_count });
        self.layout()
    }

    /// Re-measure item labels only when the measurement key changed
    fn ensure_widths(&mut self, glyphs: GlyphSet, measurer: &dyn TextMeasurer) {
        let key = MeasureKey::new(&self.items, glyphs, self.style);
        if self.widths.as_ref().is_some_and(|cached| cached.key == key) {
            return;
        }

        let widths = measurer.measure_widths(&self.items, &self.style);
        log_debug(&format!(
            "nav: measured {} labels with {} glyphs: {:?}",
            self.items.len(),
            glyphs.as_str(),
            widths
        ));
        self.widths = Some(MeasuredWidths { key, widths });
    }

    fn set_phase(&mut self, next: NavPhase) {
        if self.phase.visible_count() != next.visible_count() {
            // An open menu may list entries that are now inline
            if self.disclosure.is_open() {
                log_debug("nav: visible count changed, closing overflow menu");
            }
            self.disclosure.close();
        }
        self.phase = next;
    }

    /// Teardown: close the menu, drop timers and cached widths, stop reacting
    pub fn dispose(&mut self) {
        self.disclosure.close();
        self.widths = None;
        self.phase = NavPhase::Disposed;
        log_debug("nav: disposed");
    }

    // ============================================
    // DISCLOSURE
    // ============================================

    /// Toggle the overflow menu; only possible when something overflowed
    pub fn toggle_more(&mut self) -> bool {
        if !self.has_overflow() {
            return false;
        }
        self.disclosure.toggle();
        true
    }

    pub fn open_more(&mut self) -> bool {
        if !self.has_overflow() {
            return false;
        }
        if !self.disclosure.is_open() {
            self.disclosure.open();
        }
        true
    }

    /// Advance timers (delayed menu close)
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_disposed() {
            return false;
        }
        self.disclosure.tick(now)
    }

    // ============================================
    // ACTIVATION
    // ============================================

    /// Activate item `index` (inline or overflowed); closes the menu
    pub fn activate(&mut self, index: usize) -> Option<NavTarget> {
        if !self.layout().measured {
            return None;
        }
        let item = self.items.get(index)?;
        let target = NavTarget {
            id: item.id.clone(),
        };
        self.disclosure.close();
        Some(target)
    }

    /// Activate the highlighted entry of the open overflow menu
    pub fn activate_selected_overflow(&mut self) -> Option<NavTarget> {
        if !self.disclosure.is_open() {
            return None;
        }
        let index = self.layout().visible_count + self.disclosure.selected();
        self.activate(index)
    }

    // ============================================
    // ACCESSORS
    // ============================================

    pub fn layout(&self) -> LayoutResult {
        match self.phase {
            NavPhase::Measured { visible_count } => LayoutResult {
                visible_count,
                measured: true,
            },
            _ => LayoutResult::unmeasured(),
        }
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == NavPhase::Disposed
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn visible_items(&self) -> &[NavItem] {
        let (inline, _) = split_items(self.items.len(), self.layout().visible_count);
        &self.items[inline]
    }

    /// Items behind the trigger (empty while unmeasured)
    pub fn overflow_items(&self) -> &[NavItem] {
        let layout = self.layout();
        if !layout.measured {
            return &[];
        }
        let (_, overflow) = split_items(self.items.len(), layout.visible_count);
        &self.items[overflow]
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow_items().is_empty()
    }

    pub fn widths(&self) -> &[u16] {
        self.widths.as_ref().map(|m| m.widths.as_slice()).unwrap_or(&[])
    }

    pub fn secondary(&self) -> Option<&SecondaryLink> {
        self.secondary.as_ref()
    }

    pub fn glyphs(&self) -> Option<GlyphSet> {
        self.glyphs
    }

    pub fn style(&self) -> &NavStyle {
        &self.style
    }

    pub fn gap(&self) -> u16 {
        self.gap
    }

    pub fn container_width(&self) -> u16 {
        self.container_width
    }

    pub fn more_width(&self) -> u16 {
        self.more_width
    }

    pub fn secondary_width(&self) -> u16 {
        self.secondary_width
    }
}
