//! Scroll progress and reading-time estimation.

/// Scroll geometry sampled from the article container.
///
/// All fields are in the same unit (CSS pixels in practice); only their
/// ratios matter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled past the top of the container.
    pub offset: f64,
    /// Height of the visible viewport.
    pub viewport: f64,
    /// Total height of the scrollable content.
    pub content: f64,
}

/// Percentage of the article scrolled past, clamped to `0..=100`.
///
/// Pure derived state: call it on every scroll or resize sample and
/// discard the previous value. An article shorter than the viewport has
/// nothing left to scroll, so it reads as fully read.
#[must_use]
pub fn reading_progress(metrics: ScrollMetrics) -> u8 {
    let scrollable = metrics.content - metrics.viewport;
    if scrollable <= 0.0 {
        return 100;
    }
    let ratio = (metrics.offset / scrollable).clamp(0.0, 1.0);
    // Ratio is in 0..=1, so the rounded percentage fits in u8.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (ratio * 100.0).round() as u8
    }
}

/// Word count and estimated minutes for a post body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: usize,
}

/// Estimate reading time at 200 words per minute, nearest minute,
/// never below one.
#[must_use]
pub fn estimate_reading_time(body: &str) -> ReadingTime {
    let words = body.split_whitespace().count();
    let minutes = ((words + 100) / 200).max(1);
    ReadingTime { words, minutes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metrics(offset: f64, viewport: f64, content: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            viewport,
            content,
        }
    }

    #[test]
    fn test_progress_at_top() {
        assert_eq!(reading_progress(metrics(0.0, 800.0, 3000.0)), 0);
    }

    #[test]
    fn test_progress_at_bottom() {
        assert_eq!(reading_progress(metrics(2200.0, 800.0, 3000.0)), 100);
    }

    #[test]
    fn test_progress_midway() {
        assert_eq!(reading_progress(metrics(1100.0, 800.0, 3000.0)), 50);
    }

    #[test]
    fn test_progress_clamped_on_overscroll() {
        // Rubber-band scrolling can report offsets outside the range.
        assert_eq!(reading_progress(metrics(-40.0, 800.0, 3000.0)), 0);
        assert_eq!(reading_progress(metrics(2500.0, 800.0, 3000.0)), 100);
    }

    #[test]
    fn test_short_article_reads_as_complete() {
        assert_eq!(reading_progress(metrics(0.0, 800.0, 500.0)), 100);
        assert_eq!(reading_progress(metrics(0.0, 800.0, 800.0)), 100);
    }

    #[test]
    fn test_reading_time_short_body_is_one_minute() {
        let estimate = estimate_reading_time("just a few words here");
        assert_eq!(estimate.words, 5);
        assert_eq!(estimate.minutes, 1);
    }

    #[test]
    fn test_reading_time_rounds_to_nearest_minute() {
        let body = "word ".repeat(450);
        assert_eq!(estimate_reading_time(&body).minutes, 2);

        let body = "word ".repeat(560);
        assert_eq!(estimate_reading_time(&body).minutes, 3);
    }

    #[test]
    fn test_reading_time_empty_body() {
        let estimate = estimate_reading_time("");
        assert_eq!(estimate.words, 0);
        assert_eq!(estimate.minutes, 1);
    }
}
