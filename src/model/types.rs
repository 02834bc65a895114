//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::measure::NavStyle;
use crate::GlyphSet;

/// A single navigation entry; list order is priority order
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

/// Optional right-aligned link that shares the bar with the items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryLink {
    pub href: String,
    pub label: String,
}

impl SecondaryLink {
    /// Text drawn in the bar for this link
    pub fn display_text(&self, glyphs: GlyphSet) -> String {
        format!("{} {}", self.label, glyphs.link_marker())
    }
}

/// Outcome of a layout pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    /// Items rendered inline; the rest go behind the trigger
    pub visible_count: usize,
    /// False until widths and container width are both known
    pub measured: bool,
}

impl LayoutResult {
    pub fn unmeasured() -> Self {
        Self {
            visible_count: 0,
            measured: false,
        }
    }
}

/// Identity of one measurement: the same key means the cached widths are valid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureKey {
    pub items_fingerprint: u64,
    pub glyphs: GlyphSet,
    pub style: NavStyle,
}

impl MeasureKey {
    pub fn new(items: &[NavItem], glyphs: GlyphSet, style: NavStyle) -> Self {
        let mut hasher = DefaultHasher::new();
        items.hash(&mut hasher);
        Self {
            items_fingerprint: hasher.finish(),
            glyphs,
            style,
        }
    }
}

/// Cached label widths (cells), one per item in display order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasuredWidths {
    pub key: MeasureKey,
    pub widths: Vec<u16>,
}

/// Target handed to the host when a nav entry is activated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub id: String,
}

/// Which part of the bar has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarFocus {
    Item(usize),
    More,
    Secondary,
}
