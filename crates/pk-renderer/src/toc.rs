//! Table-of-contents extraction and title stripping.
//!
//! These operate on raw markdown text, independently of the event-driven
//! renderer in [`crate::render`]. The TOC scan is pass 1 of the two-pass
//! heading-ID contract; see [`IdScope`] for the disambiguation rules.

use crate::slug::IdScope;

/// One table-of-contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Anchor ID matching the rendered heading.
    pub id: String,
    /// Heading text as written.
    pub text: String,
    /// Heading level, 2 or 3.
    pub level: u8,
}

/// Extract level-2/3 headings from a markdown body.
///
/// Starts a fresh [`IdScope`], so the returned IDs match the anchors the
/// renderer assigns to the same body. Headings inside fenced code blocks
/// are ignored, mirroring the renderer pass.
#[must_use]
pub fn build_toc(body: &str) -> Vec<TocEntry> {
    let mut ids = IdScope::new();
    let mut toc = Vec::new();
    let mut in_fence = false;

    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        let Some((level, text)) = heading_line(line) else {
            continue;
        };
        if text.is_empty() {
            continue;
        }

        toc.push(TocEntry {
            id: ids.assign(text),
            text: text.to_owned(),
            level,
        });
    }

    toc
}

/// Match a `## ` or `### ` heading line; deeper levels don't participate.
fn heading_line(line: &str) -> Option<(u8, &str)> {
    for (level, marker) in [(3u8, "###"), (2, "##")] {
        if let Some(rest) = line.strip_prefix(marker) {
            if rest.starts_with(char::is_whitespace) {
                return Some((level, rest.trim()));
            }
        }
    }
    None
}

/// Remove a leading title from a post body.
///
/// Handles two shapes: a `# Title` first line, or a title line followed by
/// an `===` underline. The title line(s) and at most one following blank
/// line are removed; the rest of the body is returned untouched as a slice
/// of the input.
#[must_use]
pub fn strip_leading_title(body: &str) -> &str {
    let mut lines = body.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return body;
    };

    let mut consumed = if is_atx_title(first) {
        first.len()
    } else if let Some(second) = lines.next() {
        let underline = second.trim();
        if !underline.is_empty() && underline.chars().all(|c| c == '=') {
            first.len() + second.len()
        } else {
            return body;
        }
    } else {
        return body;
    };

    // Swallow a single blank line after the title.
    if let Some(next) = body[consumed..].split_inclusive('\n').next() {
        if next.trim().is_empty() {
            consumed += next.len();
        }
    }

    &body[consumed..]
}

/// `# Title` (exactly one `#` followed by whitespace).
fn is_atx_title(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}
