//! Overflow fitting logic
//!
//! Greedy 1-D packing of nav labels into the bar, left to right in priority
//! order, reserving room for the "More" trigger while items remain.

/// The bar never collapses below this many inline items
pub const MIN_VISIBLE_ITEMS: usize = 3;

/// Lower bound on the visible count for a list of `total` items
pub fn visible_floor(total: usize) -> usize {
    MIN_VISIBLE_ITEMS.min(total)
}

/// Number of leading items that fit, before the floor is applied
///
/// Candidate `i` occupies the widths of items `0..=i` plus one `gap` between
/// each pair. If any item would remain after it, the candidate must also leave
/// room for one more `gap` and the trigger. The final item may use the room
/// that would otherwise be reserved for the trigger.
pub fn raw_fit_count(
    widths: &[u16],
    container_width: u16,
    secondary_width: u16,
    gap: u16,
    more_width: u16,
) -> usize {
    let available = u32::from(container_width.saturating_sub(secondary_width));
    let total = widths.len();
    let mut used: u32 = 0;

    for (i, &width) in widths.iter().enumerate() {
        let gap_before = if i > 0 { u32::from(gap) } else { 0 };
        let candidate = used + gap_before + u32::from(width);

        let remaining = total - i - 1;
        let reserve = if remaining > 0 {
            u32::from(gap) + u32::from(more_width)
        } else {
            0
        };

        if candidate + reserve > available {
            return i;
        }
        used = candidate;
    }

    total
}

/// Calculate how many items render inline
///
/// # Arguments
/// * `widths` - Measured label widths in display order
/// * `container_width` - Width of the nav container in cells
/// * `secondary_width` - Width taken by the secondary link (0 if none)
/// * `gap` - Space between adjacent entries
/// * `more_width` - Width of the overflow trigger
///
/// # Returns
/// `max(raw fit, min(3, len))`, or 0 for an empty list
///
/// # Examples
/// ```
/// use navfold::logic::overflow::compute_visible_count;
///
/// // Everything fits: no trigger needed
/// assert_eq!(compute_visible_count(&[10, 10, 10, 10], 100, 0, 2, 8), 4);
///
/// // Narrow: raw fit is 2, floor lifts it to 3
/// assert_eq!(compute_visible_count(&[40, 50, 45, 60, 38, 52], 260, 0, 20, 80), 3);
///
/// // Empty list
/// assert_eq!(compute_visible_count(&[], 100, 0, 2, 8), 0);
/// ```
pub fn compute_visible_count(
    widths: &[u16],
    container_width: u16,
    secondary_width: u16,
    gap: u16,
    more_width: u16,
) -> usize {
    if widths.is_empty() {
        return 0;
    }

    let raw = raw_fit_count(widths, container_width, secondary_width, gap, more_width);
    raw.max(visible_floor(widths.len()))
}

/// Cells occupied by the first `count` items plus the trigger when items remain
pub fn required_width(widths: &[u16], count: usize, gap: u16, more_width: u16) -> u32 {
    let count = count.min(widths.len());
    let items: u32 = widths[..count].iter().map(|&w| u32::from(w)).sum();
    let gaps = u32::from(gap) * count.saturating_sub(1) as u32;
    let trigger = if count < widths.len() {
        let gap_before = if count > 0 { u32::from(gap) } else { 0 };
        gap_before + u32::from(more_width)
    } else {
        0
    };
    items + gaps + trigger
}
