//! Glyph readiness service
//!
//! Label widths are meaningless until the glyph set is known, so the bar
//! stays unmeasured until this one-shot task reports it.

use tokio::sync::mpsc::UnboundedSender;

use navfold::logic::ui::detect_glyph_set;
use navfold::model::Readiness;
use navfold::{log_debug, GlyphSet};

/// First locale variable that is set, in POSIX precedence order
pub(crate) fn current_locale() -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
}

/// Spawn the one-shot glyph detection task
///
/// Sends exactly one `Readiness::GlyphsReady` on `tx`. If the receiver is
/// already gone (app torn down) the result is dropped.
pub fn spawn_glyph_detection(
    explicit: Option<GlyphSet>,
    tx: UnboundedSender<Readiness>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let locale = current_locale();
        let glyphs = detect_glyph_set(explicit, locale.as_deref());
        log_debug(&format!(
            "glyphs: resolved {} (explicit: {:?}, locale: {:?})",
            glyphs.as_str(),
            explicit,
            locale
        ));

        if tx.send(Readiness::GlyphsReady(glyphs)).is_err() {
            log_debug("glyphs: receiver closed before readiness was delivered");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explicit_glyphs_are_reported() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        spawn_glyph_detection(Some(GlyphSet::NerdFont), tx)
            .await
            .unwrap();
        assert_eq!(rx.recv().await, Some(Readiness::GlyphsReady(GlyphSet::NerdFont)));
        // One-shot: the sender is dropped with the task
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_closed_receiver_does_not_panic() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        drop(rx);
        let handle = spawn_glyph_detection(Some(GlyphSet::Ascii), tx);
        assert!(handle.await.is_ok());
    }
}
