//! Delimited key-value frontmatter parsing for markdown posts.
//!
//! A frontmatter block is a run of `key: value` lines fenced by `---`
//! marker lines at the very top of a document:
//!
//! ```text
//! ---
//! title: "My Post"
//! date: 2024-12-05
//! ---
//! Body starts here.
//! ```
//!
//! Parsing is deliberately forgiving: values are plain strings (no type
//! coercion, no nesting), lines without a colon are skipped, and a document
//! without a well-formed block is returned untouched with an empty
//! metadata map. Nothing in this crate can fail.

use std::collections::HashMap;

/// Metadata parsed from a frontmatter block.
///
/// All values are strings exactly as written after the first colon,
/// with surrounding matching quotes stripped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: HashMap<String, String>,
}

impl Frontmatter {
    /// Look up a metadata value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of parsed key-value pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no key-value pairs were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over parsed key-value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }
}

/// Split a raw document into its frontmatter block and body.
///
/// The block must open on the first line. If no closing marker is found,
/// the whole input is treated as body and the metadata map is empty. The
/// body is returned as a slice of the input; the leading newline after the
/// closing marker is consumed, everything else is untouched.
#[must_use]
pub fn parse(raw: &str) -> (Frontmatter, &str) {
    let Some(block_start) = strip_marker_line(raw) else {
        return (Frontmatter::default(), raw);
    };

    let Some((block, body)) = split_at_closing_marker(&raw[block_start..]) else {
        return (Frontmatter::default(), raw);
    };

    let mut metadata = Frontmatter::default();
    for line in block.lines() {
        // First colon splits key from value; colonless lines are skipped.
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        metadata.insert(key.to_owned(), unquote(value.trim()).to_owned());
    }

    (metadata, body)
}

/// Byte offset past the opening `---` line, or `None` if the document
/// does not start with one.
fn strip_marker_line(raw: &str) -> Option<usize> {
    let first_line_end = raw.find('\n')?;
    if raw[..first_line_end].trim_end() == "---" {
        Some(first_line_end + 1)
    } else {
        None
    }
}

/// Split `rest` at the first line consisting solely of `---`.
///
/// Returns the enclosed block and the remainder after the marker line.
fn split_at_closing_marker(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    while offset <= rest.len() {
        let line_end = rest[offset..]
            .find('\n')
            .map_or(rest.len(), |i| offset + i);
        if rest[offset..line_end].trim_end() == "---" {
            let body = if line_end < rest.len() {
                &rest[line_end + 1..]
            } else {
                ""
            };
            // Drop the newline that terminated the last metadata line.
            let block = rest[..offset].strip_suffix('\n').unwrap_or(&rest[..offset]);
            return Some((block, body));
        }
        if line_end == rest.len() {
            break;
        }
        offset = line_end + 1;
    }
    None
}

/// Strip one pair of matching surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_basic_block() {
        let raw = "---\ntitle: Hello\nslug: hello\n---\nBody text.";
        let (meta, body) = parse(raw);
        assert_eq!(meta.get("title"), Some("Hello"));
        assert_eq!(meta.get("slug"), Some("hello"));
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_parse_no_block_returns_input_unchanged() {
        let raw = "# Just a heading\n\nBody.";
        let (meta, body) = parse(raw);
        assert!(meta.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_parse_unterminated_block_returns_input_unchanged() {
        let raw = "---\ntitle: Dangling\nno closing marker";
        let (meta, body) = parse(raw);
        assert!(meta.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_parse_block_not_on_first_line_ignored() {
        let raw = "intro\n---\ntitle: Nope\n---\nbody";
        let (meta, body) = parse(raw);
        assert!(meta.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn test_double_quotes_stripped() {
        let raw = "---\ntitle: \"Quoted Title\"\n---\nbody";
        let (meta, _) = parse(raw);
        assert_eq!(meta.get("title"), Some("Quoted Title"));
    }

    #[test]
    fn test_single_quotes_stripped() {
        let raw = "---\nexcerpt: 'short summary'\n---\nbody";
        let (meta, _) = parse(raw);
        assert_eq!(meta.get("excerpt"), Some("short summary"));
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        let raw = "---\ntitle: \"half quoted\n---\nbody";
        let (meta, _) = parse(raw);
        assert_eq!(meta.get("title"), Some("\"half quoted"));
    }

    #[test]
    fn test_value_splits_on_first_colon_only() {
        let raw = "---\ndate: 2024-12-05T10:30:00\n---\nbody";
        let (meta, _) = parse(raw);
        assert_eq!(meta.get("date"), Some("2024-12-05T10:30:00"));
    }

    #[test]
    fn test_colonless_lines_skipped() {
        let raw = "---\ntitle: Real\njust some text\n---\nbody";
        let (meta, _) = parse(raw);
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some("Real"));
    }

    #[test]
    fn test_values_not_coerced() {
        let raw = "---\ncount: 42\nflag: true\n---\nbody";
        let (meta, _) = parse(raw);
        assert_eq!(meta.get("count"), Some("42"));
        assert_eq!(meta.get("flag"), Some("true"));
    }

    #[test]
    fn test_markers_with_trailing_whitespace() {
        let raw = "---  \ntitle: Padded\n---\t\nbody";
        let (meta, body) = parse(raw);
        assert_eq!(meta.get("title"), Some("Padded"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_empty_block() {
        let raw = "---\n---\nbody";
        let (meta, body) = parse(raw);
        assert!(meta.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_closing_marker_at_end_of_input() {
        let raw = "---\ntitle: Tail\n---";
        let (meta, body) = parse(raw);
        assert_eq!(meta.get("title"), Some("Tail"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_empty_value() {
        let raw = "---\nexcerpt:\n---\nbody";
        let (meta, _) = parse(raw);
        assert_eq!(meta.get("excerpt"), Some(""));
    }

    #[test]
    fn test_body_left_untouched() {
        let raw = "---\ntitle: T\n---\n\n  indented\n\ntrailing\n";
        let (_, body) = parse(raw);
        assert_eq!(body, "\n  indented\n\ntrailing\n");
    }

    #[test]
    fn test_iter_yields_all_pairs() {
        let raw = "---\na: 1\nb: 2\n---\nbody";
        let (meta, _) = parse(raw);
        let mut pairs: Vec<_> = meta.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }
}
