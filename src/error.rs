use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    // Validation
    #[error("invalid or non-existent directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    // Traversal
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("symlink loop at {}", .0.display())]
    SymlinkLoop(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {detail}", .path.display())]
    Walk { path: PathBuf, detail: String },

    // Runtime
    #[error("failed to start search for {target}: {source}")]
    TaskStart {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("search for {target} did not finish: worker panicked")]
    TaskPanicked { target: String },

    // Third-party extensibility
    #[error("source error: {0}")]
    Source(String),
}

impl FindError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidRoot(p)
            | Self::PermissionDenied(p)
            | Self::SymlinkLoop(p)
            | Self::Io { path: p, .. }
            | Self::Walk { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// A short description without the path prefix, used when the path is
    /// rendered separately.
    pub fn detail(&self) -> String {
        match self {
            Self::Io { source, .. } => source.to_string(),
            Self::Walk { detail, .. } => detail.clone(),
            Self::PermissionDenied(_) => "permission denied".to_string(),
            Self::SymlinkLoop(_) => "symlink loop".to_string(),
            other => other.to_string(),
        }
    }
}
