//! Closed-set category tags for posts.

use std::fmt;

/// Keywords that place a post in the data-engineering category.
///
/// Checked after the `fastapi` rule; first substring match wins.
const DATA_KEYWORDS: &[&str] = &[
    "etl",
    "pandas",
    "pipeline",
    "data-engineering",
    "duckdb",
    "polars",
    "dataframe",
];

/// Category tag for a post.
///
/// Topics are a closed set: a post is either about FastAPI, about Python
/// data work, or filed under the generic engineering category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Topic {
    /// FastAPI articles.
    FastApi,
    /// Python data-engineering articles (pandas, ETL, pipelines).
    PythonData,
    /// Everything else.
    #[default]
    Engineering,
}

impl Topic {
    /// Parse an explicit `topic` metadata value.
    ///
    /// Returns `None` for unrecognized values so the caller can fall back
    /// to keyword inference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fastapi" => Some(Self::FastApi),
            "python-data" => Some(Self::PythonData),
            "engineering" => Some(Self::Engineering),
            _ => None,
        }
    }

    /// Infer a topic from a post's slug and title.
    ///
    /// Rules are checked in priority order against the lowercased
    /// concatenation of slug and title: the `fastapi` keyword first, then
    /// the data-engineering keyword set, then the generic fallback.
    #[must_use]
    pub fn infer(slug: &str, title: &str) -> Self {
        let haystack = format!("{slug} {title}").to_lowercase();
        if haystack.contains("fastapi") {
            Self::FastApi
        } else if DATA_KEYWORDS.iter().any(|kw| haystack.contains(kw)) {
            Self::PythonData
        } else {
            Self::Engineering
        }
    }

    /// Display label used for topic badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FastApi => "FastAPI",
            Self::PythonData => "Python Data",
            Self::Engineering => "Engineering",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
