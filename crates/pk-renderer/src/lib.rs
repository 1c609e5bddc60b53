//! Markdown-to-HTML post renderer.
//!
//! Renders a post body into article markup with:
//!
//! - anchored level-2/3 headings (level 1 is suppressed; the page header
//!   renders the title separately)
//! - syntax-highlighted fenced code blocks with a language header bar and
//!   a copy-button affordance
//! - tables wrapped in a horizontally scrollable container
//!
//! Heading anchors and the table of contents are generated by two
//! independent passes over the same body: [`build_toc`] scans the raw
//! markdown, [`PostRenderer::render`] annotates the rendered headings.
//! Each pass starts a fresh [`IdScope`], so identical heading sequences
//! always produce identical ID sequences and the TOC links stay in sync
//! with the rendered anchors.
//!
//! # Example
//!
//! ```
//! use pk_renderer::{PostRenderer, build_toc, strip_leading_title};
//!
//! let body = strip_leading_title("# Title\n\n## Setup\n\nText.");
//! let toc = build_toc(body);
//! let rendered = PostRenderer::new().render(body);
//!
//! assert_eq!(toc[0].id, "setup");
//! assert!(rendered.html.contains(r#"<h2 id="setup">"#));
//! ```

mod highlight;
mod render;
mod slug;
mod state;
mod toc;

pub use highlight::Highlighter;
pub use render::{PostRenderer, Rendered};
pub use slug::{IdScope, slugify};
pub use state::escape_html;
pub use toc::{TocEntry, build_toc, strip_leading_title};
