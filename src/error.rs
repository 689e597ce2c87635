use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    // Pre-traversal validation
    #[error("empty pattern")]
    EmptyPattern,

    #[error("empty search root")]
    EmptyRoot,

    #[error("path not found")]
    NotFound(PathBuf),

    // Per-entry
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("symlink loop")]
    SymlinkLoop(PathBuf),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Anything else the walker reports
    #[error("walk error")]
    Walk(String),
}

impl FindError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::SymlinkLoop(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the search can continue after this error.
    ///
    /// Recoverable errors (permission denied, symlink loops, IO, a pattern
    /// that fails to evaluate) are reported per entry and the walk keeps
    /// going. Validation errors halt before any traversal starts.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_)
                | Self::SymlinkLoop(_)
                | Self::Io { .. }
                | Self::InvalidPattern { .. }
                | Self::Walk(_)
        )
    }
}
