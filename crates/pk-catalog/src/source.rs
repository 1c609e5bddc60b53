//! Content discovery seam.
//!
//! [`ContentSource`] abstracts where markdown documents come from so the
//! catalog can be built from a directory in production and from in-memory
//! fixtures in tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A discovered markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDocument {
    /// Discovery identifier (typically the file name); the stem is the
    /// slug fallback when frontmatter has no `slug`.
    pub identifier: String,
    /// Raw file content, frontmatter included.
    pub raw: String,
}

/// Error returned when document discovery itself fails.
///
/// Individual unreadable documents are skipped with a warning instead;
/// only a failure to enumerate the source at all surfaces here.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The content directory could not be read.
    #[error("failed to read content directory {path}")]
    Directory {
        /// Directory that failed to enumerate.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Seam for enumerating markdown source documents.
pub trait ContentSource {
    /// Yield all available documents as `(identifier, raw content)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source cannot be enumerated at all.
    fn documents(&self) -> Result<Vec<SourceDocument>, SourceError>;
}

/// Filesystem source reading `*.md` files from a single directory.
///
/// Files are yielded in name order so catalog construction is
/// deterministic. Unreadable files are skipped with a warning.
#[derive(Clone, Debug)]
pub struct FsSource {
    dir: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ContentSource for FsSource {
    fn documents(&self) -> Result<Vec<SourceDocument>, SourceError> {
        let entries = fs::read_dir(&self.dir).map_err(|source| SourceError::Directory {
            path: self.dir.clone(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let identifier = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            match fs::read_to_string(&path) {
                Ok(raw) => documents.push(SourceDocument { identifier, raw }),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable document");
                }
            }
        }

        Ok(documents)
    }
}

/// In-memory source for tests and embedded content.
///
/// # Example
///
/// ```
/// use pk_catalog::{ContentSource, MemorySource};
///
/// let source = MemorySource::new()
///     .with_document("a.md", "---\ntitle: A\n---\nbody");
/// assert_eq!(source.documents().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: Vec<SourceDocument>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, preserving insertion order.
    #[must_use]
    pub fn with_document(mut self, identifier: impl Into<String>, raw: impl Into<String>) -> Self {
        self.documents.push(SourceDocument {
            identifier: identifier.into(),
            raw: raw.into(),
        });
        self
    }
}

impl ContentSource for MemorySource {
    fn documents(&self) -> Result<Vec<SourceDocument>, SourceError> {
        Ok(self.documents.clone())
    }
}
