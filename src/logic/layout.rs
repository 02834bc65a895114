//! Layout calculation logic
//!
//! Pure functions for splitting the item list and positioning entries on the bar.

use std::ops::Range;

/// Cells left blank at each edge of the bar
pub const BAR_INSET: u16 = 1;

/// Cells between the brand title and the first nav entry
pub const BRAND_GAP: u16 = 2;

/// What occupies a slot on the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Item(usize),
    More,
    Secondary,
}

/// A horizontal span of the bar, in absolute terminal columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSlot {
    pub kind: SlotKind,
    pub x: u16,
    pub width: u16,
}

impl BarSlot {
    pub fn contains(&self, column: u16) -> bool {
        column >= self.x && column < self.x.saturating_add(self.width)
    }
}

/// Split `0..total` into the inline range and the overflow range
///
/// # Examples
/// ```
/// use navfold::logic::layout::split_items;
///
/// assert_eq!(split_items(6, 3), (0..3, 3..6));
/// assert_eq!(split_items(2, 5), (0..2, 2..2));
/// ```
pub fn split_items(total: usize, visible_count: usize) -> (Range<usize>, Range<usize>) {
    let cut = visible_count.min(total);
    (0..cut, cut..total)
}

/// Width available to nav entries once the insets and brand title are taken
///
/// # Examples
/// ```
/// use navfold::logic::layout::nav_container_width;
///
/// // 80 columns, brand "Ada" (3 cells): 80 - 2 insets - 3 - 2 gap
/// assert_eq!(nav_container_width(80, 3), 73);
/// assert_eq!(nav_container_width(4, 3), 0);
/// ```
pub fn nav_container_width(terminal_width: u16, brand_width: u16) -> u16 {
    let brand = if brand_width > 0 {
        brand_width + BRAND_GAP
    } else {
        0
    };
    terminal_width
        .saturating_sub(BAR_INSET * 2)
        .saturating_sub(brand)
}

/// Position every rendered entry of the bar
///
/// Inline items run left to right from `container_x` separated by `gap`; the
/// trigger follows the last inline item when anything overflowed; the
/// secondary link is right-aligned in the container.
pub fn bar_slots(
    widths: &[u16],
    visible_count: usize,
    gap: u16,
    more_width: u16,
    container_x: u16,
    container_width: u16,
    secondary_width: u16,
) -> Vec<BarSlot> {
    let (inline, overflow) = split_items(widths.len(), visible_count);
    let mut slots = Vec::with_capacity(inline.len() + 2);
    let mut x = container_x;

    for i in inline {
        if i > 0 {
            x = x.saturating_add(gap);
        }
        slots.push(BarSlot {
            kind: SlotKind::Item(i),
            x,
            width: widths[i],
        });
        x = x.saturating_add(widths[i]);
    }

    if !overflow.is_empty() {
        if !slots.is_empty() {
            x = x.saturating_add(gap);
        }
        slots.push(BarSlot {
            kind: SlotKind::More,
            x,
            width: more_width,
        });
    }

    if secondary_width > 0 {
        let right = container_x.saturating_add(container_width);
        slots.push(BarSlot {
            kind: SlotKind::Secondary,
            x: right.saturating_sub(secondary_width),
            width: secondary_width,
        });
    }

    slots
}

/// Find the slot under a terminal column
pub fn slot_at(slots: &[BarSlot], column: u16) -> Option<SlotKind> {
    slots.iter().find(|slot| slot.contains(column)).map(|slot| slot.kind)
}
