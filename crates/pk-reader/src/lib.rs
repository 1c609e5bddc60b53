//! Reading-state primitives for the post view.
//!
//! The hosting UI owns the event sources (scroll and resize listeners, an
//! intersection observer on heading anchors, the clipboard API); this crate
//! owns the state that those events drive. Everything here is pure or
//! explicitly fed its inputs, so the host can call it from whatever event
//! loop it runs:
//!
//! - [`reading_progress`] derives a 0-100 percentage from sampled scroll
//!   geometry. No stored history; recompute on every sample.
//! - [`ActiveHeading`] folds intersection-observer reports into the single
//!   heading that should carry the TOC highlight.
//! - [`copy_with_fallback`] and [`CopyFeedback`] implement the copy-code
//!   action: a two-stage clipboard fallback chain and the short-lived
//!   "Copied" indicator per code block.
//! - [`estimate_reading_time`] gives the `N min read` byline figure.

mod active;
mod clipboard;
mod progress;

pub use active::{ActiveHeading, HeadingVisibility};
pub use clipboard::{ClipboardError, ClipboardWriter, CopyFeedback, copy_with_fallback};
pub use progress::{ReadingTime, ScrollMetrics, estimate_reading_time, reading_progress};
