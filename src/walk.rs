use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::trace;

use crate::config::WalkMode;
use crate::entry::{Entry, EntryKind};
use crate::error::FindError;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// DirectorySource
// ---------------------------------------------------------------------------

/// Walks a directory tree on the local filesystem.
///
/// Every filter `ignore` would normally apply (hidden files, `.gitignore`,
/// `.ignore`, parent ignore files) is switched off: a name search must see
/// everything. Symlinks are reported as leaves and never followed, so link
/// cycles cannot make the walk loop. Siblings are visited in file name
/// order.
///
/// Permission-denied entries are dropped without a trace at the default log
/// level. Any other read failure is yielded as `Err` and the walk carries on
/// with the subtrees it has not visited yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorySource;

impl Source for DirectorySource {
    fn walk(&self, root: &Path, mode: WalkMode) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_> {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .same_file_system(false)
            .max_depth(mode.max_depth())
            .sort_by_file_name(|a, b| a.cmp(b));

        let root = root.to_path_buf();
        Box::new(builder.build().filter_map(move |res| convert(res, &root)))
    }
}

/// Turns one raw walk result into what a search task sees.
///
/// `None` for the root itself and for anything we were not allowed to read.
fn convert(res: Result<DirEntry, ignore::Error>, root: &Path) -> Option<Result<Entry, FindError>> {
    let entry = match res {
        Ok(e) => e,
        Err(e) => {
            return match map_ignore_error(e, None, root) {
                FindError::PermissionDenied(path) => {
                    trace!(path = %path.display(), "skipping unreadable entry");
                    None
                }
                err => Some(Err(err)),
            };
        }
    };

    if entry.depth() == 0 {
        return None;
    }

    // Only stdin entries lack a file type.
    let kind = entry
        .file_type()
        .map(EntryKind::from_file_type)
        .unwrap_or(EntryKind::Other);

    Some(Ok(Entry {
        name:  entry.file_name().to_string_lossy().into_owned(),
        path:  entry.path().to_path_buf(),
        kind,
        depth: entry.depth(),
    }))
}

// ---------------------------------------------------------------------------
// Map ignore::Error to FindError
// ---------------------------------------------------------------------------

/// `ignore` wraps the underlying failure in path and depth layers; peel them
/// off and keep the innermost path seen.
fn map_ignore_error(e: ignore::Error, path: Option<PathBuf>, root: &Path) -> FindError {
    match e {
        ignore::Error::WithPath { path, err } => map_ignore_error(*err, Some(path), root),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            map_ignore_error(*err, path, root)
        }
        ignore::Error::Loop { child, .. } => FindError::SymlinkLoop(child),
        ignore::Error::Io(io_err) => {
            let path = path.unwrap_or_else(|| root.to_path_buf());
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                FindError::PermissionDenied(path)
            } else {
                FindError::Io { path, source: io_err }
            }
        }
        other => FindError::Walk {
            path:   path.unwrap_or_else(|| root.to_path_buf()),
            detail: other.to_string(),
        },
    }
}
