use crate::App;
use ratatui::Frame;

use super::{
    content, layout,
    legend::{self, LegendState},
    more_menu,
    nav_bar::{self, NavBarProps},
    status_bar, toast,
};
use navfold::logic::layout::SlotKind;
use navfold::model::ui::HitMap;
use navfold::GlyphSet;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let legend_state = LegendState {
        menu_open: app.model.nav.disclosure.is_open(),
        has_overflow: app.model.nav.has_overflow(),
        has_secondary: app.secondary_link.is_some(),
        bar_focused: app.model.ui.focus.is_some(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_state);

    // The bar drops its rule once the page is scrolled; its width stays the same
    let compact = app.model.content.is_scrolled();
    let layout_info = layout::calculate_layout(size, compact, legend_height);

    let inner = content::content_inner(layout_info.content_area);
    if (inner.width, inner.height) != app.content_dims {
        app.content_dims = (inner.width, inner.height);
        app.model.content.relayout(inner.width, inner.height);
    }

    content::render_content(f, layout_info.content_area, &app.model.content);

    let active_item = app.model.content.current_section();
    let props = NavBarProps {
        title: &app.title,
        container_x: app.nav_container_x(),
        focus: app.model.ui.focus,
        active_item,
        compact,
    };
    let slots = nav_bar::render_nav_bar(f, layout_info.nav_area, &app.model.nav, &props);

    legend::render_legend(f, layout_info.legend_area, legend_state);

    let current = active_item
        .and_then(|i| app.model.content.sections.get(i))
        .map(|s| s.id.as_str());
    status_bar::render_status_bar(f, layout_info.status_area, &app.model.nav, current);

    // The menu overlays the content pane, so it is drawn after it
    let bar_row = layout_info.nav_area.y;
    let menu = if app.model.nav.disclosure.is_open() {
        slots
            .iter()
            .find(|slot| slot.kind == SlotKind::More)
            .and_then(|trigger| {
                more_menu::render_more_menu(f, size, &app.model.nav, trigger, bar_row + 1)
            })
    } else {
        None
    };

    if let Some((message, _)) = &app.model.ui.toast_message {
        let unicode = app.model.nav.glyphs().is_some_and(|g| g != GlyphSet::Ascii);
        toast::render_toast(f, size, message, unicode);
    }

    app.model.ui.hit_map = HitMap {
        bar_row,
        slots,
        menu,
    };
}
