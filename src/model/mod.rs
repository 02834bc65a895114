//! Pure Application Model - Elm Architecture
//!
//! This module defines the state for one navigation bar and the page it
//! sits on. The Model is organized into focused sub-models:
//!
//! - **NavBarModel**: Overflow engine state (widths, phase, disclosure)
//! - **ContentModel**: Page sections and scroll position
//! - **UiModel**: Focus, hit areas, toast
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: Terminal I/O lives in the binary
//! - Measurement is injected through `TextMeasurer`

pub mod content;
pub mod disclosure;
pub mod nav;
pub mod types;
pub mod ui;

pub use content::{ContentModel, Section};
pub use disclosure::Disclosure;
pub use nav::{NavBarModel, NavPhase, Readiness};
pub use types::*;
pub use ui::UiModel;

use crate::logic::navigation::clamp_focus;
use crate::measure::{NavStyle, TextMeasurer};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub nav: NavBarModel,
    pub content: ContentModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(
        sections: Vec<Section>,
        secondary: Option<SecondaryLink>,
        style: NavStyle,
        gap: u16,
    ) -> Self {
        let content = ContentModel::new(sections);
        let show_secondary = secondary.is_some();
        Self {
            nav: NavBarModel::new(content.nav_items(), secondary, style, gap),
            content,
            ui: UiModel::new(show_secondary),
        }
    }

    /// Route a readiness signal to the bar and keep focus valid afterwards
    pub fn apply_readiness(
        &mut self,
        signal: Readiness,
        measurer: &dyn TextMeasurer,
    ) -> Option<LayoutResult> {
        let result = self.nav.apply(signal, measurer)?;
        self.ui.focus = if result.measured {
            clamp_focus(
                self.ui.focus,
                result.visible_count,
                self.nav.has_overflow(),
                self.nav.secondary().is_some(),
            )
        } else {
            None
        };
        Some(result)
    }

    /// Navigate to a target: close the menu and start the smooth scroll
    pub fn navigate(&mut self, target: &NavTarget) -> bool {
        self.nav.disclosure.close();
        self.content.scroll_to_section(&target.id)
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::BufferMeasurer;
    use crate::GlyphSet;

    fn model() -> Model {
        let sections = ["About", "Work", "Projects", "Recipes", "Writing"]
            .iter()
            .map(|l| Section {
                id: l.to_lowercase(),
                label: l.to_string(),
                body: String::new(),
            })
            .collect();
        Model::new(sections, None, NavStyle::default(), 1)
    }

    #[test]
    fn test_model_creation() {
        let model = model();
        assert_eq!(model.nav.items().len(), 5);
        assert!(!model.ui.show_secondary);
        assert_eq!(model.nav.phase(), NavPhase::Unmeasured);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = model();
        let _cloned = model.clone();
    }

    #[test]
    fn test_focus_moves_to_trigger_when_item_overflows() {
        let measurer = BufferMeasurer::new();
        let mut model = model();
        model.apply_readiness(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
        model.apply_readiness(Readiness::Resize { width: 200 }, &measurer);
        model.ui.focus = Some(BarFocus::Item(4));
        model.apply_readiness(Readiness::Resize { width: 30 }, &measurer);
        assert_eq!(model.ui.focus, Some(BarFocus::More));
    }

    #[test]
    fn test_navigate_closes_menu() {
        let measurer = BufferMeasurer::new();
        let mut model = model();
        model.apply_readiness(Readiness::GlyphsReady(GlyphSet::Ascii), &measurer);
        model.apply_readiness(Readiness::Resize { width: 30 }, &measurer);
        model.content.relayout(80, 4);
        assert!(model.nav.toggle_more());
        let target = NavTarget { id: "writing".to_string() };
        assert!(model.navigate(&target));
        assert!(!model.nav.disclosure.is_open());
        assert!(model.content.scroll_target.is_some());
    }
}
