use std::fs;
use std::path::PathBuf;

use globset::Glob;

use crate::engine::{run, EngineOptions};
use crate::entry::Entry;
use crate::error::FindError;
use crate::results::Results;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`findx::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let results = findx::search()
///     .root("/var/log")
///     .pattern("*.log")
///     .collect_skips(true)
///     .run()?;
/// ```
#[derive(Default)]
pub struct SearchBuilder {
    root: Option<PathBuf>,
    pattern: Option<String>,
    matcher: Option<Box<dyn Matcher>>,
    collect_skips: bool,
}

impl SearchBuilder {
    // ── Root ──────────────────────────────────────────────────────────────

    /// Set the directory (or single file) to search. Defaults to `.`.
    ///
    /// Matched paths come back joined with the root exactly as it was given
    /// here — a relative root yields relative results.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    // ── Matcher ───────────────────────────────────────────────────────────

    /// Set the glob pattern to match entry names against.
    ///
    /// Shell-glob semantics: `*` matches any run of characters, `?` a single
    /// character, `[...]` a character class. The match is case-sensitive and
    /// anchored — the pattern must cover the entire base name, so `*.txt`
    /// matches `notes.txt` but `txt` alone does not.
    ///
    /// Equivalent to `.with_matcher(GlobMatcher::new(pattern))`.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set a custom matcher.
    ///
    /// Any type implementing [`Matcher`] is accepted. Use this for matching
    /// logic the glob syntax can't express — extension filters, metadata
    /// checks, etc. Takes precedence over `.pattern()` if both are set.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Collect per-entry failures into [`Results::skipped`].
    ///
    /// Disabled by default. When disabled, unreadable entries and failed
    /// match evaluations are only emitted as `debug!` tracing events and
    /// otherwise dropped.
    pub fn collect_skips(mut self, yes: bool) -> Self {
        self.collect_skips = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return results.
    ///
    /// Blocks until the walk completes. Matched paths are collected in walk
    /// order; elapsed time is measured around the walk only, not around
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns `Err` before any traversal for invalid input: an empty (or
    /// missing) pattern, an empty root, or a root that does not exist on
    /// disk. Per-entry failures during the walk never abort the search —
    /// see [`SearchBuilder::collect_skips`].
    pub fn run(self) -> Result<Results, FindError> {
        let matcher: Box<dyn Matcher> = match (self.matcher, self.pattern) {
            (Some(m), _) => m,
            (None, Some(p)) => {
                if p.is_empty() {
                    return Err(FindError::EmptyPattern);
                }
                Box::new(GlobMatcher::new(p))
            }
            (None, None) => return Err(FindError::EmptyPattern),
        };

        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        if root.as_os_str().is_empty() {
            return Err(FindError::EmptyRoot);
        }

        // Existence probe before any traversal. A root that is a plain file
        // is fine — the walk degrades to testing that single entry.
        if fs::metadata(&root).is_err() {
            return Err(FindError::NotFound(root));
        }

        let opts = EngineOptions {
            matcher,
            collect_skips: self.collect_skips,
        };

        Ok(run(&root, opts))
    }
}

// ---------------------------------------------------------------------------
// Built-in matcher
// ---------------------------------------------------------------------------

/// Matches entry names against a shell glob (`*`, `?`, `[...]`).
///
/// The pattern is compiled once at construction. Construction never fails:
/// a syntactically invalid pattern produces a matcher whose
/// [`is_match`](Matcher::is_match) reports [`FindError::InvalidPattern`] for
/// every entry, which the engine records as a per-entry skip. A bad pattern
/// therefore yields an empty result set, not an aborted run.
pub struct GlobMatcher {
    pattern: String,
    compiled: Result<globset::GlobMatcher, globset::Error>,
}

impl GlobMatcher {
    /// Compile `pattern` for base-name matching.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let compiled = Glob::new(&pattern).map(|g| g.compile_matcher());
        Self { pattern, compiled }
    }

    /// The pattern this matcher was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern compiled cleanly.
    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }
}

impl Matcher for GlobMatcher {
    fn is_match(&self, entry: &Entry) -> Result<bool, FindError> {
        match &self.compiled {
            Ok(glob) => Ok(glob.is_match(entry.name.as_str())),
            Err(e) => Err(FindError::InvalidPattern {
                pattern: self.pattern.clone(),
                source: e.clone(),
            }),
        }
    }
}
