//! Active-heading selection for the TOC highlight.

/// One heading anchor's visibility, as reported by the host's
/// intersection observer.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingVisibility {
    /// Anchor ID of the heading element.
    pub id: String,
    /// Fraction of the element inside the tracked viewport band.
    pub ratio: f64,
    /// Whether the element currently intersects the band at all.
    pub intersecting: bool,
}

/// Folds intersection reports into the heading that should be
/// highlighted in the TOC.
///
/// The most-visible intersecting heading wins; when a report carries no
/// intersecting candidates the previous selection is kept, so the
/// highlight does not flicker off while scrolling between sections.
/// `None` is a valid state: nothing is selected until a heading first
/// enters the tracked band.
#[derive(Debug, Default)]
pub struct ActiveHeading {
    current: Option<String>,
}

impl ActiveHeading {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one batch of visibility entries and return the selection.
    ///
    /// Ties on ratio keep the earlier entry, so with observer reports in
    /// document order the topmost of equally-visible headings wins.
    pub fn observe(&mut self, entries: &[HeadingVisibility]) -> Option<&str> {
        let mut best: Option<&HeadingVisibility> = None;
        for entry in entries.iter().filter(|entry| entry.intersecting) {
            match best {
                Some(current) if entry.ratio > current.ratio => best = Some(entry),
                None => best = Some(entry),
                Some(_) => {}
            }
        }
        if let Some(best) = best {
            self.current = Some(best.id.clone());
        }
        self.current.as_deref()
    }

    /// Currently highlighted heading, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Drop the selection, e.g. when the post view unmounts.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
