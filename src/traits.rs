use crate::entry::Entry;
use crate::error::FindError;

/// Determines whether an entry is a match.
///
/// Implement this to define custom matching logic beyond the built-in glob
/// matcher — extension filters, metadata checks, or anything else that can
/// look at an [`Entry`] and decide.
///
/// # Errors
///
/// `is_match` is fallible because match evaluation itself can fail (the
/// built-in [`GlobMatcher`](crate::GlobMatcher) reports an uncompilable
/// pattern this way). The engine treats such a failure as a per-entry skip,
/// not as a reason to stop the walk.
///
/// # Thread Safety
///
/// `Send + Sync` are required so matchers can be shared freely by embedding
/// applications; the engine itself never leaves the calling thread.
///
/// # Example
///
/// ```rust
/// use findx::{Matcher, Entry, FindError};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> Result<bool, FindError> {
///         Ok(entry.path
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false))
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `Ok(true)` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> Result<bool, FindError>;
}
