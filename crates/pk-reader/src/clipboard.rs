//! Copy-to-clipboard fallback chain and the per-block "Copied" indicator.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Clipboard write failure.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is available in this environment.
    #[error("clipboard unavailable")]
    Unavailable,
    /// The environment refused the write.
    #[error("clipboard write denied: {0}")]
    Denied(String),
}

/// Host-provided clipboard primitive.
///
/// The host supplies two of these to [`copy_with_fallback`]: the modern
/// async clipboard API and the legacy select-and-copy technique.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Write `text` to the clipboard, falling back from `primary` to
/// `legacy`. Returns whether either write succeeded.
///
/// Total failure is deliberately silent toward the user; the failures
/// are traced for diagnostics only.
pub fn copy_with_fallback(
    primary: &mut dyn ClipboardWriter,
    legacy: &mut dyn ClipboardWriter,
    text: &str,
) -> bool {
    match primary.write_text(text) {
        Ok(()) => true,
        Err(primary_err) => {
            tracing::debug!(error = %primary_err, "primary clipboard write failed, trying legacy path");
            match legacy.write_text(text) {
                Ok(()) => true,
                Err(legacy_err) => {
                    tracing::debug!(error = %legacy_err, "legacy clipboard write failed, dropping copy action");
                    false
                }
            }
        }
    }
}

/// Per-block "Copied" indicator with a fixed hold time.
///
/// One code block at a time shows the indicator; copying a different
/// block moves it. Time is injected so the host drives expiry from its
/// own clock (and tests need no sleeping).
#[derive(Debug)]
pub struct CopyFeedback {
    copied: Option<(usize, Instant)>,
    hold: Duration,
}

impl CopyFeedback {
    /// How long the indicator stays on after a successful copy.
    pub const DEFAULT_HOLD: Duration = Duration::from_millis(1200);

    #[must_use]
    pub fn new() -> Self {
        Self::with_hold(Self::DEFAULT_HOLD)
    }

    #[must_use]
    pub fn with_hold(hold: Duration) -> Self {
        Self { copied: None, hold }
    }

    /// Record a successful copy of the given block.
    pub fn mark(&mut self, block: usize, now: Instant) {
        self.copied = Some((block, now));
    }

    /// Whether the given block should show the indicator at `now`.
    #[must_use]
    pub fn is_copied(&self, block: usize, now: Instant) -> bool {
        match self.copied {
            Some((marked, at)) => marked == block && now.duration_since(at) < self.hold,
            None => false,
        }
    }

    /// Drop the indicator immediately, e.g. on unmount.
    pub fn clear(&mut self) {
        self.copied = None;
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OkWriter {
        written: Vec<String>,
    }

    impl ClipboardWriter for OkWriter {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.written.push(text.to_owned());
            Ok(())
        }
    }

    struct FailWriter;

    impl ClipboardWriter for FailWriter {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

    #[test]
    fn test_primary_success_skips_legacy() {
        let mut primary = OkWriter { written: vec![] };
        let mut legacy = OkWriter { written: vec![] };
        assert!(copy_with_fallback(&mut primary, &mut legacy, "code"));
        assert_eq!(primary.written, vec!["code".to_owned()]);
        assert!(legacy.written.is_empty());
    }

    #[test]
    fn test_falls_back_to_legacy() {
        let mut primary = FailWriter;
        let mut legacy = OkWriter { written: vec![] };
        assert!(copy_with_fallback(&mut primary, &mut legacy, "code"));
        assert_eq!(legacy.written, vec!["code".to_owned()]);
    }

    #[test]
    fn test_total_failure_is_silent() {
        let mut primary = FailWriter;
        let mut legacy = FailWriter;
        assert!(!copy_with_fallback(&mut primary, &mut legacy, "code"));
    }

    #[test]
    fn test_indicator_holds_then_expires() {
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();
        feedback.mark(0, start);

        assert!(feedback.is_copied(0, start));
        assert!(feedback.is_copied(0, start + Duration::from_millis(1100)));
        assert!(!feedback.is_copied(0, start + Duration::from_millis(1200)));
    }

    #[test]
    fn test_indicator_is_per_block() {
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();
        feedback.mark(2, start);

        assert!(feedback.is_copied(2, start));
        assert!(!feedback.is_copied(0, start));
    }

    #[test]
    fn test_new_copy_moves_indicator() {
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();
        feedback.mark(0, start);
        feedback.mark(1, start + Duration::from_millis(100));

        assert!(!feedback.is_copied(0, start + Duration::from_millis(200)));
        assert!(feedback.is_copied(1, start + Duration::from_millis(200)));
    }

    #[test]
    fn test_clear_drops_indicator() {
        let mut feedback = CopyFeedback::new();
        let now = Instant::now();
        feedback.mark(0, now);
        feedback.clear();
        assert!(!feedback.is_copied(0, now));
    }

    #[test]
    fn test_custom_hold() {
        let mut feedback = CopyFeedback::with_hold(Duration::from_millis(50));
        let start = Instant::now();
        feedback.mark(0, start);
        assert!(!feedback.is_copied(0, start + Duration::from_millis(60)));
    }
}
