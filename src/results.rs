use std::path::PathBuf;
use std::time::Duration;

use crate::error::FindError;

/// The output of a completed search.
///
/// `paths` is always populated — it is the primary product of the search.
/// `skipped` is opt-in via `.collect_skips(true)` on the builder; by default
/// per-entry failures are only emitted as tracing events.
pub struct Results {
    /// Paths of matched entries, in the order the walk encountered them.
    pub paths: Vec<PathBuf>,

    /// Entries that could not be read or matched, in walk order.
    /// Only populated if `.collect_skips(true)` was set on the builder.
    /// Every error in here satisfies [`FindError::is_recoverable`].
    pub skipped: Vec<FindError>,

    /// Scan performance statistics.
    pub stats: ScanStats,
}

impl Results {
    /// Number of entries that matched.
    pub fn matches(&self) -> usize {
        self.paths.len()
    }
}

/// Performance statistics for a completed scan.
pub struct ScanStats {
    /// Total number of files encountered (matched or not).
    pub files: usize,

    /// Total number of directories encountered.
    pub dirs: usize,

    /// Wall-clock time from search start to completion.
    pub duration: Duration,

    /// Total entries scanned per second. Convenience field — equals
    /// `(files + dirs) / duration.as_secs_f64()`, clamped to 0 on
    /// zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    /// Compute `entries_per_sec` from raw counts and duration.
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            duration,
            entries_per_sec: eps,
        }
    }
}
