//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - layout: Item split, container width and slot positions on the bar
//! - navigation: Focus and selection movement with wrapping
//! - overflow: Greedy fit of nav labels with trigger reservation
//! - scroll: Section offsets and smooth scrolling
//! - ui: UI state transitions and glyph detection

pub mod layout;
pub mod navigation;
pub mod overflow;
pub mod scroll;
pub mod ui;
