//! Heading slug generation and per-pass disambiguation.

use std::collections::HashMap;

/// Convert heading text to a URL-safe anchor slug.
///
/// Lowercases and trims the input, drops quote characters, collapses any
/// run of other non-alphanumeric characters into a single hyphen, and
/// trims leading/trailing hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().chars() {
        if c == '\'' || c == '"' {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Occurrence counter scoping heading IDs to a single traversal.
///
/// The first occurrence of a slug is used as-is; repeats get `-2`, `-3`
/// and so on. A scope MUST be created fresh at the start of every
/// independent pass over a body (TOC building, markup rendering) so both
/// passes assign identical IDs to identical heading sequences. Sharing a
/// scope between passes makes the IDs drift apart.
#[derive(Debug, Default)]
pub struct IdScope {
    seen: HashMap<String, usize>,
}

impl IdScope {
    /// Create a fresh scope with no recorded occurrences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the anchor ID for the next occurrence of `text`.
    pub fn assign(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}-{count}")
        }
    }
}
