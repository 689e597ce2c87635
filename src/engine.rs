use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use crate::entry::{Entry, EntryKind};
use crate::error::FindError;
use crate::results::{Results, ScanStats};
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub matcher: Box<dyn Matcher>,
    pub collect_skips: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute a search over the tree rooted at `root`.
///
/// The walk is sequential and pre-order: a directory is visited before any of
/// its children, and the root itself is the first entry tested. Called by
/// `SearchBuilder::run()` after validating inputs, so `root` is known to
/// exist at this point.
pub(crate) fn run(root: &Path, opts: EngineOptions) -> Results {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(false);

    let mut paths = Vec::<PathBuf>::new();
    let mut skipped = Vec::<FindError>::new();
    let mut files = 0usize;
    let mut dirs = 0usize;

    let start = Instant::now();

    for item in builder.build() {
        // A failed entry is skipped for the run; the walker already prunes
        // the unreadable subtree and moves on to the next sibling.
        let entry = match item {
            Ok(e) => e,
            Err(e) => {
                let err = map_walk_error(e);
                debug!(error = %err, path = ?err.path(), "skipped unreadable entry");
                if opts.collect_skips {
                    skipped.push(err);
                }
                continue;
            }
        };

        trace!(path = %entry.path().display(), "visited");

        let kind = entry_kind(&entry);
        match kind {
            EntryKind::Dir => dirs += 1,
            EntryKind::File => files += 1,
            _ => {}
        }

        let depth = entry.depth();
        let name = entry.file_name().to_string_lossy().into_owned();
        let entry = Entry {
            name,
            path: entry.into_path(),
            kind,
            depth,
        };

        match opts.matcher.is_match(&entry) {
            Ok(true) => paths.push(entry.path),
            Ok(false) => {}
            Err(err) => {
                debug!(error = %err, path = %entry.path.display(), "match evaluation failed");
                if opts.collect_skips {
                    skipped.push(err);
                }
            }
        }
    }

    let duration = start.elapsed();

    Results {
        paths,
        skipped,
        stats: ScanStats::compute(files, dirs, duration),
    }
}

/// Classify a walker entry. Entries whose type cannot be determined are
/// still matched, as `Other`.
fn entry_kind(entry: &DirEntry) -> EntryKind {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => EntryKind::Dir,
        Some(ft) if ft.is_file() => EntryKind::File,
        Some(ft) if ft.is_symlink() => EntryKind::Symlink,
        _ => EntryKind::Other,
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to FindError
// ---------------------------------------------------------------------------

fn map_walk_error(e: ignore::Error) -> FindError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    FindError::PermissionDenied(path)
                } else {
                    FindError::Io {
                        path,
                        source: io_err,
                    }
                }
            }
            _ => FindError::Walk(format!("{}", err)),
        },
        ignore::Error::Loop { child, .. } => FindError::SymlinkLoop(child),
        ignore::Error::Io(io_err) => FindError::Io {
            path: PathBuf::new(),
            source: io_err,
        },
        other => FindError::Walk(other.to_string()),
    }
}
