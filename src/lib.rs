//! # findx
//!
//! Find files and directories by name — glob matching over a recursive
//! directory walk.
//!
//! findx owns the walk engine, the glob matcher, the [`Matcher`] contract,
//! the error type, and the builder API. It does **not** own output
//! formatting — the `findx` binary is a thin shell over this crate, and
//! embedding applications print (or ignore) results however they like.
//!
//! The walk is sequential and pre-order: each directory is visited before
//! its children, every entry under the root (and the root itself) is tested
//! exactly once, and an unreadable subtree is skipped without aborting the
//! search. Visited paths are emitted at `TRACE` level and per-entry failures
//! at `DEBUG` through [`tracing`], so callers control diagnostics entirely
//! through their subscriber.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("invoice_jan.txt"), "january").unwrap();
//! fs::write(dir.path().join("invoice_feb.txt"), "february").unwrap();
//! fs::write(dir.path().join("report.md"), "quarterly").unwrap();
//!
//! let results = findx::search()
//!     .root(dir.path())
//!     .pattern("invoice_*.txt")
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.matches(), 2);
//! println!("Found {} matches in {:.3}s",
//!     results.matches(),
//!     results.stats.duration.as_secs_f64()
//! );
//! ```
//!
//! # Custom Matchers
//!
//! The built-in [`GlobMatcher`] covers the common case. Implement
//! [`Matcher`] for anything else:
//!
//! ```rust
//! use findx::{Matcher, Entry, FindError};
//!
//! struct ExtensionMatcher(String);
//!
//! impl Matcher for ExtensionMatcher {
//!     fn is_match(&self, entry: &Entry) -> Result<bool, FindError> {
//!         Ok(entry.path
//!             .extension()
//!             .map(|e| e.eq_ignore_ascii_case(&self.0))
//!             .unwrap_or(false))
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod entry;
mod error;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{GlobMatcher, SearchBuilder};
pub use entry::{Entry, EntryKind};
pub use error::FindError;
pub use results::{Results, ScanStats};
pub use traits::Matcher;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
///
/// # Example
///
/// ```rust
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("notes.txt"), "").unwrap();
///
/// let results = findx::search()
///     .root(dir.path())
///     .pattern("*.txt")
///     .run()
///     .unwrap();
///
/// assert_eq!(results.matches(), 1);
/// ```
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}
