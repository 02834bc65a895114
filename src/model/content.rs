//! Content Model
//!
//! Page sections behind the nav anchors, plus the scroll position of the
//! content pane and the target of an in-flight smooth scroll.

use serde::{Deserialize, Serialize};

use super::types::NavItem;
use crate::logic::scroll;

/// One anchored section of the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub body: String,
}

/// Content pane state
#[derive(Clone, Debug)]
pub struct ContentModel {
    pub sections: Vec<Section>,

    /// First visible row
    pub scroll_offset: usize,

    /// Row a smooth scroll is heading to
    pub scroll_target: Option<usize>,

    /// Starting row of each section at the current width
    section_offsets: Vec<usize>,

    content_height: usize,
    viewport_height: usize,
}

impl ContentModel {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            scroll_offset: 0,
            scroll_target: None,
            section_offsets: Vec::new(),
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Nav entries, one per section, in page order
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.sections
            .iter()
            .map(|s| NavItem {
                id: s.id.clone(),
                label: s.label.clone(),
            })
            .collect()
    }

    /// Recompute section offsets for a new pane size
    pub fn relayout(&mut self, width: u16, viewport_height: u16) {
        // Heading row + body + blank separator
        let heights: Vec<usize> = self
            .sections
            .iter()
            .map(|s| 1 + scroll::wrapped_height(&s.body, width) + 1)
            .collect();
        self.section_offsets = scroll::section_offsets(&heights);
        self.content_height = heights.iter().sum();
        self.viewport_height = viewport_height as usize;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
        if let Some(target) = self.scroll_target {
            self.scroll_target = Some(target.min(self.max_offset()));
        }
    }

    pub fn max_offset(&self) -> usize {
        scroll::max_offset(self.content_height, self.viewport_height)
    }

    /// Start a smooth scroll to the section with `id`; false if there is none
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return false;
        };
        let offset = self.section_offsets.get(index).copied().unwrap_or(0);
        self.scroll_target = Some(offset.min(self.max_offset()));
        true
    }

    /// Scroll by a signed number of rows, cancelling any smooth scroll
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_target = None;
        let next = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = next.min(self.max_offset());
    }

    /// Advance an in-flight smooth scroll by one frame
    pub fn tick(&mut self) {
        if let Some(target) = self.scroll_target {
            self.scroll_offset = scroll::smooth_scroll_step(self.scroll_offset, target);
            if self.scroll_offset == target {
                self.scroll_target = None;
            }
        }
    }

    pub fn is_scrolled(&self) -> bool {
        scroll::is_scrolled(self.scroll_offset)
    }

    /// Index of the section at the top of the viewport
    pub fn current_section(&self) -> Option<usize> {
        if self.sections.is_empty() {
            return None;
        }
        let index = self
            .section_offsets
            .iter()
            .rposition(|&start| start <= self.scroll_offset)
            .unwrap_or(0);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        ["about", "work", "contact"]
            .iter()
            .map(|id| Section {
                id: id.to_string(),
                label: id.to_string(),
                body: "one two three four five six seven eight nine ten".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_nav_items_follow_sections() {
        let content = ContentModel::new(sections());
        let ids: Vec<String> = content.nav_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["about", "work", "contact"]);
    }

    #[test]
    fn test_scroll_to_section_sets_target() {
        let mut content = ContentModel::new(sections());
        // Each body wraps to one row at width 80: heading + body + blank = 3 rows
        content.relayout(80, 2);
        assert!(content.scroll_to_section("work"));
        assert_eq!(content.scroll_target, Some(3));
    }

    #[test]
    fn test_scroll_to_unknown_section() {
        let mut content = ContentModel::new(sections());
        content.relayout(80, 2);
        assert!(!content.scroll_to_section("missing"));
        assert_eq!(content.scroll_target, None);
    }

    #[test]
    fn test_tick_reaches_target() {
        let mut content = ContentModel::new(sections());
        content.relayout(80, 2);
        content.scroll_to_section("contact");
        for _ in 0..20 {
            content.tick();
        }
        assert_eq!(content.scroll_offset, 6);
        assert_eq!(content.scroll_target, None);
        assert!(content.is_scrolled());
        assert_eq!(content.current_section(), Some(2));
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut content = ContentModel::new(sections());
        content.relayout(80, 2);
        content.scroll_by(-5);
        assert_eq!(content.scroll_offset, 0);
        content.scroll_by(100);
        assert_eq!(content.scroll_offset, content.max_offset());
    }
}
