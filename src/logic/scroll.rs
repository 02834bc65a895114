//! Content scrolling logic
//!
//! Pure functions for section offsets and the eased scroll toward an anchor.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap text to `width` cells, one string per row
///
/// Each paragraph line wraps independently and an empty line still takes a
/// row. Words longer than a row are broken between characters.
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut used = 0;

        for word in line.split_whitespace() {
            let w = word.width();
            if used > 0 && used + 1 + w <= width {
                current.push(' ');
                current.push_str(word);
                used += 1 + w;
                continue;
            }
            if used == 0 && w <= width {
                current.push_str(word);
                used = w;
                continue;
            }
            if used > 0 {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
            for ch in word.chars() {
                let cw = ch.width().unwrap_or(0);
                if used > 0 && used + cw > width {
                    rows.push(std::mem::take(&mut current));
                    used = 0;
                }
                current.push(ch);
                used += cw;
            }
        }
        rows.push(current);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Rows a block of text occupies when wrapped to `width` cells
pub fn wrapped_height(text: &str, width: u16) -> usize {
    wrap_lines(text, width).len()
}

/// Starting row of every section, given each section's height
///
/// # Examples
/// ```
/// use navfold::logic::scroll::section_offsets;
///
/// assert_eq!(section_offsets(&[3, 5, 2]), vec![0, 3, 8]);
/// ```
pub fn section_offsets(heights: &[usize]) -> Vec<usize> {
    let mut offset = 0;
    heights
        .iter()
        .map(|h| {
            let start = offset;
            offset += h;
            start
        })
        .collect()
}

/// Largest useful scroll offset
pub fn max_offset(content_height: usize, viewport_height: usize) -> usize {
    content_height.saturating_sub(viewport_height)
}

/// Next offset of a smooth scroll: one third of the remaining distance, at least one row
///
/// # Examples
/// ```
/// use navfold::logic::scroll::smooth_scroll_step;
///
/// assert_eq!(smooth_scroll_step(0, 30), 10);
/// assert_eq!(smooth_scroll_step(29, 30), 30);
/// assert_eq!(smooth_scroll_step(30, 0), 20);
/// assert_eq!(smooth_scroll_step(5, 5), 5);
/// ```
pub fn smooth_scroll_step(current: usize, target: usize) -> usize {
    if current == target {
        return current;
    }
    let distance = current.abs_diff(target);
    let step = (distance / 3).max(1);
    if target > current {
        current + step
    } else {
        current - step
    }
}

/// Whether the page counts as scrolled (compacts the nav bar)
pub fn is_scrolled(offset: usize) -> bool {
    offset > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height_single_line() {
        assert_eq!(wrapped_height("hello world", 20), 1);
    }

    #[test]
    fn test_wrapped_height_wraps_words() {
        // "hello" fits, "world" moves to the next row
        assert_eq!(wrapped_height("hello world", 8), 2);
    }

    #[test]
    fn test_wrapped_height_counts_blank_lines() {
        assert_eq!(wrapped_height("a\n\nb", 10), 3);
    }

    #[test]
    fn test_wrapped_height_long_word() {
        // 25 cells in a 10-cell line: three rows
        assert_eq!(wrapped_height(&"x".repeat(25), 10), 3);
    }

    #[test]
    fn test_wrap_lines_content() {
        assert_eq!(wrap_lines("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_lines("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrapped_height_empty_text() {
        assert_eq!(wrapped_height("", 10), 1);
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let mut offset = 0;
        let mut steps = 0;
        while offset != 40 {
            offset = smooth_scroll_step(offset, 40);
            steps += 1;
            assert!(steps < 50);
        }
        assert_eq!(offset, 40);
    }

    #[test]
    fn test_max_offset() {
        assert_eq!(max_offset(100, 20), 80);
        assert_eq!(max_offset(10, 20), 0);
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0));
        assert!(is_scrolled(1));
    }
}
