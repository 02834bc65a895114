//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::GlyphSet;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Cycle to the next glyph set: Ascii → Unicode → NerdFont → Ascii
///
/// # Examples
/// ```
/// use navfold::GlyphSet;
/// use navfold::logic::ui::cycle_glyph_set;
///
/// assert_eq!(cycle_glyph_set(GlyphSet::Ascii), GlyphSet::Unicode);
/// assert_eq!(cycle_glyph_set(GlyphSet::Unicode), GlyphSet::NerdFont);
/// assert_eq!(cycle_glyph_set(GlyphSet::NerdFont), GlyphSet::Ascii);
/// ```
pub fn cycle_glyph_set(current: GlyphSet) -> GlyphSet {
    match current {
        GlyphSet::Ascii => GlyphSet::Unicode,
        GlyphSet::Unicode => GlyphSet::NerdFont,
        GlyphSet::NerdFont => GlyphSet::Ascii,
    }
}

/// Check if a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Pick a glyph set from locale and terminal hints
///
/// An explicit choice wins; otherwise a UTF-8 locale gets Unicode and
/// anything else falls back to ASCII. Nerd Font icons are never guessed.
pub fn detect_glyph_set(explicit: Option<GlyphSet>, locale: Option<&str>) -> GlyphSet {
    if let Some(glyphs) = explicit {
        return glyphs;
    }
    match locale {
        Some(l) if l.to_lowercase().contains("utf-8") || l.to_lowercase().contains("utf8") => {
            GlyphSet::Unicode
        }
        _ => GlyphSet::Ascii,
    }
}
