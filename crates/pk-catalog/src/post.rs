//! Post records and metadata resolution.

use chrono::NaiveDate;
use pk_frontmatter::Frontmatter;

use crate::topic::Topic;

/// One published article with resolved metadata.
///
/// Fields are resolved from frontmatter with fallbacks: a missing title
/// becomes the humanized slug, a missing slug is derived from the source
/// identifier, and a missing or unparsable date is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    /// Display title.
    pub title: String,
    /// Unique identifier within the catalog, used for routing.
    pub slug: String,
    /// Publication date; `None` when missing or unparsable.
    pub published_at: Option<NaiveDate>,
    /// Optional short summary.
    pub excerpt: Option<String>,
    /// Markdown body with the frontmatter block stripped.
    pub content: String,
    /// Category tag, explicit or inferred.
    pub topic: Topic,
}

impl Post {
    /// Build a post from parsed frontmatter and the remaining body.
    ///
    /// `identifier` is the discovery name of the source document (usually
    /// a file path); its stem is the slug fallback.
    #[must_use]
    pub(crate) fn from_parts(identifier: &str, metadata: &Frontmatter, body: &str) -> Self {
        let slug = metadata
            .get("slug")
            .filter(|s| !s.is_empty())
            .map_or_else(|| identifier_stem(identifier), str::to_owned);

        let title = metadata
            .get("title")
            .filter(|t| !t.is_empty())
            .map_or_else(|| humanize_slug(&slug), str::to_owned);

        let published_at = metadata.get("date").and_then(|raw| parse_date(&slug, raw));

        let topic = metadata
            .get("topic")
            .and_then(Topic::parse)
            .unwrap_or_else(|| Topic::infer(&slug, &title));

        Self {
            title,
            slug,
            published_at,
            excerpt: metadata.get("excerpt").map(str::to_owned),
            content: body.trim().to_owned(),
            topic,
        }
    }
}

fn parse_date(slug: &str, raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(slug, date = raw, "unparsable post date, treating as absent");
            None
        }
    }
}

/// Derive the slug fallback from a source identifier.
///
/// Strips any directory components and a trailing `.md` extension:
/// `content/blog/my-post.md` becomes `my-post`.
fn identifier_stem(identifier: &str) -> String {
    let name = identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier);
    name.strip_suffix(".md").unwrap_or(name).to_owned()
}

/// Turn a slug into a readable title: `my-first-post` → `My First Post`.
fn humanize_slug(slug: &str) -> String {
    let words: Vec<String> = slug
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "Untitled".to_owned()
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse_post(identifier: &str, raw: &str) -> Post {
        let (metadata, body) = pk_frontmatter::parse(raw);
        Post::from_parts(identifier, &metadata, body)
    }

    #[test]
    fn test_all_fields_from_metadata() {
        let post = parse_post(
            "posts/a.md",
            "---\ntitle: Real Title\nslug: real-slug\ndate: 2024-12-05\nexcerpt: Summary\ntopic: fastapi\n---\nBody here.",
        );
        assert_eq!(post.title, "Real Title");
        assert_eq!(post.slug, "real-slug");
        assert_eq!(
            post.published_at,
            NaiveDate::from_ymd_opt(2024, 12, 5)
        );
        assert_eq!(post.excerpt.as_deref(), Some("Summary"));
        assert_eq!(post.content, "Body here.");
        assert_eq!(post.topic, Topic::FastApi);
    }

    #[test]
    fn test_slug_falls_back_to_identifier_stem() {
        let post = parse_post("content/blog/from-filename.md", "---\ntitle: T\n---\nb");
        assert_eq!(post.slug, "from-filename");
    }

    #[test]
    fn test_title_falls_back_to_humanized_slug() {
        let post = parse_post("posts/my-first-post.md", "no frontmatter body");
        assert_eq!(post.title, "My First Post");
        assert_eq!(post.slug, "my-first-post");
    }

    #[test]
    fn test_malformed_date_treated_as_absent() {
        let post = parse_post("a.md", "---\ndate: next tuesday\n---\nbody");
        assert_eq!(post.published_at, None);
    }

    #[test]
    fn test_missing_date_is_none() {
        let post = parse_post("a.md", "---\ntitle: T\n---\nbody");
        assert_eq!(post.published_at, None);
    }

    #[test]
    fn test_topic_inferred_when_metadata_absent() {
        let post = parse_post(
            "fastapi-async-traps.md",
            "---\ntitle: Async Traps\n---\nbody",
        );
        assert_eq!(post.topic, Topic::FastApi);
    }

    #[test]
    fn test_unknown_topic_value_falls_back_to_inference() {
        let post = parse_post(
            "pandas-speedups.md",
            "---\ntitle: T\ntopic: devops\n---\nbody",
        );
        assert_eq!(post.topic, Topic::PythonData);
    }

    #[test]
    fn test_no_frontmatter_full_text_is_body() {
        let post = parse_post("plain.md", "# Heading\n\nJust text.");
        assert_eq!(post.content, "# Heading\n\nJust text.");
        assert!(post.excerpt.is_none());
    }

    #[test]
    fn test_body_is_trimmed() {
        let post = parse_post("a.md", "---\ntitle: T\n---\n\n  body  \n\n");
        assert_eq!(post.content, "body");
    }

    #[test]
    fn test_humanize_edge_cases() {
        assert_eq!(humanize_slug("single"), "Single");
        assert_eq!(humanize_slug("a--b"), "A B");
        assert_eq!(humanize_slug(""), "Untitled");
    }
}
