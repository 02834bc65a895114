// Services - background tasks that feed the update loop
//
// - glyphs: Resolves the glyph set once at startup and reports readiness

pub mod glyphs;
