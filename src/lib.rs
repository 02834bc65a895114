//! navfold Library
//!
//! Responsive navigation bar engine: measures nav labels on an off-screen
//! buffer, decides how many fit inline, and folds the rest into a "More"
//! disclosure. Exposes modules for the binary and for testing.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

pub mod logic;
pub mod measure;
pub mod model;
pub mod utils;

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable the debug log
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// Append a timestamped line to the debug log (no-op unless debug mode is on)
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let now = chrono::Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", now, msg);
    }
}

/// Glyph set used to decorate the bar chrome (trigger, link marker)
///
/// This is the terminal's "font set": widths are only trustworthy once the
/// glyph set is resolved, and switching it invalidates every measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    Ascii,    // Plain ASCII, safe everywhere
    Unicode,  // Box drawing and arrows (▾, ↗)
    NerdFont, // Nerd Fonts private-use icons
}

impl GlyphSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphSet::Ascii => "ascii",
            GlyphSet::Unicode => "unicode",
            GlyphSet::NerdFont => "nerdfont",
        }
    }

    /// Label of the overflow trigger
    pub fn more_label(&self) -> &'static str {
        match self {
            GlyphSet::Ascii => "More v",
            GlyphSet::Unicode => "More ▾",
            GlyphSet::NerdFont => "More \u{f078}",
        }
    }

    /// Marker appended to the secondary (external) link
    pub fn link_marker(&self) -> &'static str {
        match self {
            GlyphSet::Ascii => "->",
            GlyphSet::Unicode => "↗",
            GlyphSet::NerdFont => "\u{f08e}",
        }
    }

    /// Marker drawn before the focused entry of the overflow menu
    pub fn menu_cursor(&self) -> &'static str {
        match self {
            GlyphSet::Ascii => ">",
            GlyphSet::Unicode => "▸",
            GlyphSet::NerdFont => "\u{f054}",
        }
    }
}

impl std::str::FromStr for GlyphSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(GlyphSet::Ascii),
            "unicode" => Ok(GlyphSet::Unicode),
            "nerdfont" | "nerd" => Ok(GlyphSet::NerdFont),
            other => Err(format!("unknown glyph set: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_set_from_str() {
        assert_eq!("ascii".parse::<GlyphSet>(), Ok(GlyphSet::Ascii));
        assert_eq!("Unicode".parse::<GlyphSet>(), Ok(GlyphSet::Unicode));
        assert_eq!("nerd".parse::<GlyphSet>(), Ok(GlyphSet::NerdFont));
        assert!("emoji".parse::<GlyphSet>().is_err());
    }

    #[test]
    fn test_glyph_name_outlives_the_value() {
        let name: Option<&'static str> = Some(GlyphSet::NerdFont).map(|g| g.as_str());
        assert_eq!(name, Some("nerdfont"));
    }

    #[test]
    fn test_glyph_set_round_trips_through_as_str() {
        for glyphs in [GlyphSet::Ascii, GlyphSet::Unicode, GlyphSet::NerdFont] {
            assert_eq!(glyphs.as_str().parse::<GlyphSet>(), Ok(glyphs));
        }
    }
}
