//! Immutable post catalog built from markdown sources.
//!
//! This crate turns a set of raw markdown documents into an ordered,
//! queryable list of post records:
//!
//! - [`ContentSource`]: seam for document discovery (filesystem or
//!   in-memory for tests)
//! - [`Catalog`]: built once at startup, read-only afterwards
//! - [`Post`]: one published article with resolved metadata
//! - [`Topic`]: closed-set category tag, explicit or keyword-inferred
//!
//! Catalog construction never aborts on a bad document: malformed
//! frontmatter degrades to an empty metadata map, unparsable dates are
//! treated as absent, and unknown topics fall back to keyword inference.
//!
//! # Example
//!
//! ```
//! use pk_catalog::{Catalog, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with_document("hello.md", "---\ntitle: Hello\ndate: 2024-12-05\n---\nBody.");
//! let catalog = Catalog::build(&source).unwrap();
//!
//! assert_eq!(catalog.posts().len(), 1);
//! assert!(catalog.get("hello").is_some());
//! ```

mod catalog;
mod post;
mod source;
mod topic;

pub use catalog::Catalog;
pub use post::Post;
pub use source::{ContentSource, FsSource, MemorySource, SourceDocument, SourceError};
pub use topic::Topic;
