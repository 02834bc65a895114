//! Navigation selection logic
//!
//! Pure functions for moving keyboard focus across the bar and the overflow
//! menu, with wrapping behavior.

use crate::model::types::BarFocus;

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use navfold::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use navfold::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i - 1,
    })
}

/// Focus stops on the bar, left to right: inline items, trigger, secondary link
pub fn focus_stops(visible_count: usize, has_more: bool, has_secondary: bool) -> Vec<BarFocus> {
    let mut stops: Vec<BarFocus> = (0..visible_count).map(BarFocus::Item).collect();
    if has_more {
        stops.push(BarFocus::More);
    }
    if has_secondary {
        stops.push(BarFocus::Secondary);
    }
    stops
}

/// Move focus one stop right (wrapping)
///
/// # Examples
/// ```
/// use navfold::logic::navigation::focus_right;
/// use navfold::model::types::BarFocus;
///
/// assert_eq!(focus_right(Some(BarFocus::Item(0)), 3, true, false), Some(BarFocus::Item(1)));
/// assert_eq!(focus_right(Some(BarFocus::Item(2)), 3, true, false), Some(BarFocus::More));
/// assert_eq!(focus_right(Some(BarFocus::More), 3, true, false), Some(BarFocus::Item(0)));
/// ```
pub fn focus_right(
    current: Option<BarFocus>,
    visible_count: usize,
    has_more: bool,
    has_secondary: bool,
) -> Option<BarFocus> {
    let stops = focus_stops(visible_count, has_more, has_secondary);
    let index = current.and_then(|focus| stops.iter().position(|&s| s == focus));
    next_selection(index, stops.len()).map(|i| stops[i])
}

/// Move focus one stop left (wrapping)
pub fn focus_left(
    current: Option<BarFocus>,
    visible_count: usize,
    has_more: bool,
    has_secondary: bool,
) -> Option<BarFocus> {
    let stops = focus_stops(visible_count, has_more, has_secondary);
    let index = current.and_then(|focus| stops.iter().position(|&s| s == focus));
    prev_selection(index, stops.len()).map(|i| stops[i])
}

/// Re-validate focus after a layout change
///
/// An item that moved into the overflow list hands focus to the trigger; a
/// trigger that disappeared hands it to the last inline item.
pub fn clamp_focus(
    current: Option<BarFocus>,
    visible_count: usize,
    has_more: bool,
    has_secondary: bool,
) -> Option<BarFocus> {
    match current? {
        BarFocus::Item(i) if i < visible_count => Some(BarFocus::Item(i)),
        BarFocus::Item(_) if has_more => Some(BarFocus::More),
        BarFocus::Item(_) => visible_count.checked_sub(1).map(BarFocus::Item),
        BarFocus::More if has_more => Some(BarFocus::More),
        BarFocus::More => visible_count.checked_sub(1).map(BarFocus::Item),
        BarFocus::Secondary if has_secondary => Some(BarFocus::Secondary),
        BarFocus::Secondary => None,
    }
}
