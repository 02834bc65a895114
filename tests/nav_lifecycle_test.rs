//! Integration tests for the nav bar lifecycle
//!
//! Drives `Model`/`NavBarModel` through readiness signals the way the app
//! does: glyph resolution, resizes, secondary link changes, teardown.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use navfold::measure::{BufferMeasurer, NavStyle, TextMeasurer};
use navfold::model::{
    BarFocus, Model, NavBarModel, NavItem, NavPhase, NavTarget, Readiness, SecondaryLink, Section,
};
use navfold::GlyphSet;

/// Measures labels from a fixed table so widths match the documented scenario
struct TableMeasurer {
    widths: HashMap<String, u16>,
}

impl TableMeasurer {
    fn scenario() -> Self {
        let mut widths: HashMap<String, u16> = LABELS
            .iter()
            .map(|(label, width)| (label.to_string(), *width))
            .collect();
        widths.insert(GlyphSet::Ascii.more_label().to_string(), 80);
        widths.insert(resume().display_text(GlyphSet::Ascii), 30);
        Self { widths }
    }
}

impl TextMeasurer for TableMeasurer {
    fn measure_text(&self, text: &str, _style: &NavStyle) -> u16 {
        self.widths.get(text).copied().unwrap_or(0)
    }
}

const LABELS: [(&str, u16); 6] = [
    ("About", 40),
    ("Experience", 50),
    ("Projects", 45),
    ("Personality", 60),
    ("Recipes", 38),
    ("Contact", 52),
];

fn items() -> Vec<NavItem> {
    LABELS
        .iter()
        .map(|(label, _)| NavItem {
            id: label.to_lowercase(),
            label: label.to_string(),
        })
        .collect()
}

fn resume() -> SecondaryLink {
    SecondaryLink {
        href: "https://example.com/resume.pdf".to_string(),
        label: "Resume".to_string(),
    }
}

fn nav() -> NavBarModel {
    NavBarModel::new(items(), None, NavStyle::default(), 20)
}

#[test]
fn test_unmeasured_until_glyphs_ready() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();

    let result = nav.apply(Readiness::Resize { width: 260 }, &measurer);
    assert_eq!(result.map(|r| r.measured), Some(false));
    assert_eq!(nav.phase(), NavPhase::Unmeasured);
    assert!(nav.overflow_items().is_empty());

    let result = nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    assert_eq!(result.map(|r| r.visible_count), Some(3));
    assert_eq!(nav.phase(), NavPhase::Measured { visible_count: 3 });
}

#[test]
fn test_narrow_scenario_splits_items() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 260 }, &measurer);

    let visible: Vec<&str> = nav.visible_items().iter().map(|i| i.id.as_str()).collect();
    let overflow: Vec<&str> = nav.overflow_items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(visible, vec!["about", "experience", "projects"]);
    assert_eq!(overflow, vec!["personality", "recipes", "contact"]);
    assert!(nav.has_overflow());
}

#[test]
fn test_zero_width_container_defers() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 0 }, &measurer);
    assert_eq!(nav.phase(), NavPhase::Unmeasured);
    assert!(!nav.has_overflow());
}

#[test]
fn test_resize_that_changes_count_closes_menu() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 260 }, &measurer);
    assert!(nav.open_more());

    // Same count: menu stays open
    nav.apply(Readiness::Resize { width: 270 }, &measurer);
    assert!(nav.disclosure.is_open());

    // Everything fits now: menu must not list inline items
    nav.apply(Readiness::Resize { width: 500 }, &measurer);
    assert_eq!(nav.layout().visible_count, 6);
    assert!(!nav.disclosure.is_open());
    assert!(!nav.toggle_more());
}

#[test]
fn test_secondary_link_takes_width() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 413 }, &measurer);
    assert_eq!(nav.layout().visible_count, 6);

    nav.apply(Readiness::SecondaryChanged(Some(resume())), &measurer);
    assert_eq!(nav.secondary_width(), 30);
    assert_eq!(nav.layout().visible_count, 4);

    nav.apply(Readiness::SecondaryChanged(None), &measurer);
    assert_eq!(nav.layout().visible_count, 6);
}

#[test]
fn test_recompute_is_idempotent() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    let first = nav.apply(Readiness::Resize { width: 300 }, &measurer);
    let second = nav.recompute(&measurer);
    assert_eq!(first, Some(second));
}

#[test]
fn test_empty_list_has_no_trigger() {
    let measurer = BufferMeasurer::new();
    let mut nav = NavBarModel::new(Vec::new(), None, NavStyle::default(), 1);
    nav.apply(Readiness::GlyphsReady(GlyphSet::Unicode), &measurer);
    nav.apply(Readiness::Resize { width: 80 }, &measurer);

    assert_eq!(nav.phase(), NavPhase::Measured { visible_count: 0 });
    assert!(!nav.has_overflow());
    assert!(!nav.toggle_more());
    assert_eq!(measurer.probe_host().live_probes(), 0);
}

#[test]
fn test_items_changed_remeasures() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 260 }, &measurer);

    let short: Vec<NavItem> = items().into_iter().take(2).collect();
    nav.apply(Readiness::ItemsChanged(short), &measurer);
    assert_eq!(nav.widths(), &[40, 50]);
    assert_eq!(nav.layout().visible_count, 2);
}

#[test]
fn test_dispose_ignores_later_signals() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 260 }, &measurer);
    nav.open_more();
    nav.disclosure.schedule_close(Instant::now());

    nav.dispose();
    assert!(nav.is_disposed());
    assert!(!nav.disclosure.is_open());
    assert!(!nav.disclosure.has_pending_close());
    assert_eq!(nav.apply(Readiness::Resize { width: 500 }, &measurer), None);
    assert_eq!(nav.phase(), NavPhase::Disposed);
    assert!(!nav.tick(Instant::now() + Duration::from_secs(1)));
}

#[test]
fn test_delayed_close_after_pointer_leaves() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 260 }, &measurer);
    nav.open_more();

    let left_at = Instant::now();
    nav.disclosure.schedule_close(left_at);
    assert!(!nav.tick(left_at + Duration::from_millis(100)));
    assert!(nav.disclosure.is_open());
    assert!(nav.tick(left_at + Duration::from_millis(150)));
    assert!(!nav.disclosure.is_open());
}

#[test]
fn test_activate_overflow_entry_targets_section() {
    let measurer = TableMeasurer::scenario();
    let sections = LABELS
        .iter()
        .map(|(label, _)| Section {
            id: label.to_lowercase(),
            label: label.to_string(),
            body: "Some body text".to_string(),
        })
        .collect();
    let mut model = Model::new(sections, None, NavStyle::default(), 20);
    model.content.relayout(60, 4);
    model.apply_readiness(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    model.apply_readiness(Readiness::Resize { width: 260 }, &measurer);

    assert!(model.nav.open_more());
    model.nav.disclosure.select_next(model.nav.overflow_items().len());
    let target = model.nav.activate_selected_overflow();
    assert_eq!(target, Some(NavTarget { id: "recipes".to_string() }));
    assert!(!model.nav.disclosure.is_open());

    let target = target.unwrap_or_else(|| NavTarget { id: String::new() });
    assert!(model.navigate(&target));
    assert!(model.content.scroll_target.is_some());
}

#[test]
fn test_focus_leaves_trigger_when_overflow_disappears() {
    let measurer = TableMeasurer::scenario();
    let sections = LABELS
        .iter()
        .map(|(label, _)| Section {
            id: label.to_lowercase(),
            label: label.to_string(),
            body: String::new(),
        })
        .collect();
    let mut model = Model::new(sections, None, NavStyle::default(), 20);
    model.apply_readiness(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    model.apply_readiness(Readiness::Resize { width: 260 }, &measurer);
    model.ui.focus = Some(BarFocus::More);

    model.apply_readiness(Readiness::Resize { width: 500 }, &measurer);
    assert_ne!(model.ui.focus, Some(BarFocus::More));
}

#[test]
fn test_buffer_measurer_releases_probes_through_lifecycle() {
    let measurer = BufferMeasurer::new();
    let mut nav = NavBarModel::new(items(), Some(resume()), NavStyle::default(), 1);
    nav.apply(Readiness::GlyphsReady(GlyphSet::Unicode), &measurer);
    nav.apply(Readiness::Resize { width: 40 }, &measurer);
    nav.apply(Readiness::GlyphsReady(GlyphSet::NerdFont), &measurer);

    assert_eq!(measurer.probe_host().live_probes(), 0);
    // Default style pads each label by one cell on both sides
    assert_eq!(nav.widths()[0], 7);
}

#[test]
fn test_items_changed_closes_open_menu() {
    let measurer = BufferMeasurer::new();
    let style = NavStyle {
        padding: 0,
        letter_spacing: 0,
        uppercase: false,
        bold: false,
    };
    let ten_cells = |id: &str| NavItem {
        id: id.to_string(),
        label: id.repeat(10),
    };
    let initial = ["a", "b", "c", "d", "e", "f"].map(ten_cells).to_vec();
    let mut nav = NavBarModel::new(initial, None, style, 0);
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 20 }, &measurer);
    assert_eq!(nav.layout().visible_count, 3);

    assert!(nav.open_more());
    nav.disclosure.select(2);
    assert_eq!(nav.overflow_items()[2].id, "f");

    // Same visible count, different list: "d" moves inline
    let reordered = ["d", "a", "b", "c", "e"].map(ten_cells).to_vec();
    nav.apply(Readiness::ItemsChanged(reordered), &measurer);
    assert_eq!(nav.layout().visible_count, 3);
    assert!(!nav.disclosure.is_open());
    assert_eq!(nav.disclosure.selected(), 0);

    // Reopened menu activates from the new overflow list
    assert!(nav.open_more());
    assert_eq!(
        nav.activate_selected_overflow(),
        Some(NavTarget {
            id: "c".to_string()
        })
    );
}

#[test]
fn test_identical_items_keep_menu_open() {
    let measurer = TableMeasurer::scenario();
    let mut nav = nav();
    nav.apply(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
    nav.apply(Readiness::Resize { width: 260 }, &measurer);
    assert!(nav.open_more());
    nav.disclosure.select(1);

    nav.apply(Readiness::ItemsChanged(items()), &measurer);
    assert!(nav.disclosure.is_open());
    assert_eq!(nav.disclosure.selected(), 1);
}
