use std::path::PathBuf;

/// A single node produced by a [`Source`](crate::Source) during a walk.
///
/// Entries are transient: a search task consumes each one as soon as the walk
/// yields it and nothing keeps them afterwards.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path to the entry. Absolute whenever the walk root is absolute.
    pub path: PathBuf,

    /// The entry's basename.
    pub name: String,

    /// What kind of node this is.
    pub kind: EntryKind,

    /// Depth below the walk root. Direct children are at depth 1.
    pub depth: usize,
}

/// The kind of a traversed entry.
///
/// Symlinks are never resolved, so a link to a directory is reported as
/// [`EntryKind::Symlink`] and is not descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    pub fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            Self::Dir
        } else if ft.is_file() {
            Self::File
        } else if ft.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }
}
