use std::path::PathBuf;

/// A single filesystem object encountered during traversal.
///
/// `name` holds only the final path component — matching is done against the
/// base name, never the full path. `path` keeps the path exactly as it was
/// built from the search root, without normalization, so results come back
/// relative when the root was given relative.
pub struct Entry {
    /// Path to the entry, joined from the root as the caller specified it.
    pub path: PathBuf,

    /// The entry's base name (last path component).
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// How deep in the walk this entry was found. Root = 0.
    pub depth: usize,
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.), or an entry
    /// whose type could not be determined.
    Other,
}
