//! Overflow Disclosure Model
//!
//! Open/closed state of the "More" menu, the highlighted overflow entry,
//! and the delayed close armed when the pointer leaves the menu.

use std::time::{Duration, Instant};

use crate::logic::navigation::{next_selection, prev_selection};

/// Grace period between the pointer leaving the menu and the menu closing
pub const CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Overflow menu state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,

    /// Highlighted entry, relative to the overflow list
    selected: usize,

    /// Deadline of an armed delayed close
    pending_close: Option<Instant>,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_some()
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
        self.pending_close = None;
    }

    /// Close immediately and disarm any delayed close
    pub fn close(&mut self) {
        self.open = false;
        self.selected = 0;
        self.pending_close = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn select_next(&mut self, overflow_len: usize) {
        self.clamp_selection(overflow_len);
        if let Some(next) = next_selection(Some(self.selected), overflow_len) {
            self.selected = next;
        }
    }

    pub fn select_prev(&mut self, overflow_len: usize) {
        self.clamp_selection(overflow_len);
        if let Some(prev) = prev_selection(Some(self.selected), overflow_len) {
            self.selected = prev;
        }
    }

    /// Keep the highlighted entry inside an overflow list of `overflow_len`
    pub fn clamp_selection(&mut self, overflow_len: usize) {
        self.selected = self.selected.min(overflow_len.saturating_sub(1));
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Arm a delayed close (pointer left the menu)
    pub fn schedule_close(&mut self, now: Instant) {
        if self.open && self.pending_close.is_none() {
            self.pending_close = Some(now + CLOSE_DELAY);
        }
    }

    /// Disarm a delayed close (pointer came back)
    pub fn cancel_close(&mut self) {
        self.pending_close = None;
    }

    /// Fire the delayed close once its deadline has passed; returns true if it closed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_close {
            Some(deadline) if now >= deadline => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure_starts_closed() {
        let d = Disclosure::new();
        assert!(!d.is_open());
        assert!(!d.has_pending_close());
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut d = Disclosure::new();
        d.toggle();
        assert!(d.is_open());
        d.toggle();
        assert!(!d.is_open());
    }

    #[test]
    fn test_selection_wraps() {
        let mut d = Disclosure::new();
        d.open();
        d.select_prev(3);
        assert_eq!(d.selected(), 2);
        d.select_next(3);
        assert_eq!(d.selected(), 0);
    }

    #[test]
    fn test_delayed_close_fires_after_deadline() {
        let mut d = Disclosure::new();
        d.open();
        let now = Instant::now();
        d.schedule_close(now);
        assert!(!d.tick(now + Duration::from_millis(100)));
        assert!(d.is_open());
        assert!(d.tick(now + CLOSE_DELAY));
        assert!(!d.is_open());
        assert!(!d.has_pending_close());
    }

    #[test]
    fn test_cancel_close_keeps_menu_open() {
        let mut d = Disclosure::new();
        d.open();
        let now = Instant::now();
        d.schedule_close(now);
        d.cancel_close();
        assert!(!d.tick(now + Duration::from_secs(1)));
        assert!(d.is_open());
    }

    #[test]
    fn test_schedule_close_ignored_when_closed() {
        let mut d = Disclosure::new();
        d.schedule_close(Instant::now());
        assert!(!d.has_pending_close());
    }

    #[test]
    fn test_close_clears_pending_timer() {
        let mut d = Disclosure::new();
        d.open();
        d.schedule_close(Instant::now());
        d.close();
        assert!(!d.has_pending_close());
    }

    #[test]
    fn test_selection_clamped_to_shorter_list() {
        let mut d = Disclosure::new();
        d.open();
        d.select(4);
        // List shrank to two entries: moving down wraps from the last one
        d.select_next(2);
        assert_eq!(d.selected(), 0);

        d.select(4);
        d.select_prev(2);
        assert_eq!(d.selected(), 0);

        d.select(4);
        d.clamp_selection(0);
        assert_eq!(d.selected(), 0);
    }
}
