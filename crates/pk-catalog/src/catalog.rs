//! Catalog construction and lookup.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::post::Post;
use crate::source::{ContentSource, SourceDocument, SourceError};

/// Ordered, read-only collection of posts.
///
/// Built once at startup and immutable afterwards; safe to share across
/// threads behind an `Arc` with no further synchronization. Posts are
/// ordered newest first, with undated posts after all dated ones and ties
/// broken by slug.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    posts: Vec<Post>,
    by_slug: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from every document the source yields.
    ///
    /// A document that fails to parse degrades to an empty metadata map
    /// with its full text as body; it never aborts the build. When two
    /// documents resolve to the same slug, the last-loaded one wins and a
    /// warning is logged.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] only when the source itself cannot be
    /// enumerated.
    pub fn build(source: &dyn ContentSource) -> Result<Self, SourceError> {
        Ok(Self::from_documents(source.documents()?))
    }

    /// Build a catalog from already-discovered documents.
    #[must_use]
    pub fn from_documents(documents: Vec<SourceDocument>) -> Self {
        let mut by_slug: HashMap<String, usize> = HashMap::new();
        let mut posts: Vec<Post> = Vec::with_capacity(documents.len());

        for document in &documents {
            let (metadata, body) = pk_frontmatter::parse(&document.raw);
            let post = Post::from_parts(&document.identifier, &metadata, body);

            if let Some(&existing) = by_slug.get(&post.slug) {
                tracing::warn!(
                    slug = %post.slug,
                    identifier = %document.identifier,
                    "duplicate slug, keeping last-loaded post"
                );
                posts[existing] = post;
            } else {
                by_slug.insert(post.slug.clone(), posts.len());
                posts.push(post);
            }
        }

        posts.sort_by(compare_posts);
        let by_slug = posts
            .iter()
            .enumerate()
            .map(|(index, post)| (post.slug.clone(), index))
            .collect();

        tracing::debug!(count = posts.len(), "catalog built");
        Self { posts, by_slug }
    }

    /// All posts, newest first.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by slug.
    ///
    /// `None` is the recoverable not-found outcome; callers typically
    /// redirect to the listing view.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&index| &self.posts[index])
    }

    /// Number of posts in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True when the catalog holds no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Descending date, undated last, slug ascending as tiebreak.
fn compare_posts(a: &Post, b: &Post) -> Ordering {
    match (a.published_at, b.published_at) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    }
}
