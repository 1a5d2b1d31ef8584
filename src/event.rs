use std::fmt;
use std::path::PathBuf;

/// Identifies the search task that produced an event.
///
/// Ids are assigned in target input order starting at 1, including targets
/// whose task failed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub usize);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Something a search task has to say. Each event is published exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A regular file whose name matches the target.
    Found {
        task:   TaskId,
        target: String,
        path:   PathBuf,
    },

    /// Terminal event of a task that found nothing.
    NotFound {
        task:   TaskId,
        target: String,
        root:   PathBuf,
    },

    /// A directory could not be read. The walk goes on without it.
    WalkError {
        task:   TaskId,
        path:   PathBuf,
        detail: String,
    },
}

impl MatchEvent {
    pub fn task(&self) -> TaskId {
        match self {
            Self::Found { task, .. } | Self::NotFound { task, .. } | Self::WalkError { task, .. } => *task,
        }
    }

    /// Diagnostics go to the error stream, never to the match stream.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::WalkError { .. })
    }
}

/// Renders the single output line for this event, without the newline.
///
/// ```text
/// 3: a.txt: /srv/data/a.txt
/// 4: missing.txt: Not found in /srv/data
/// 4: error accessing /srv/data/broken: Input/output error (os error 5)
/// ```
impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { task, target, path } => {
                write!(f, "{task}: {target}: {}", path.display())
            }
            Self::NotFound { task, target, root } => {
                write!(f, "{task}: {target}: Not found in {}", root.display())
            }
            Self::WalkError { task, path, detail } => {
                write!(f, "{task}: error accessing {}: {detail}", path.display())
            }
        }
    }
}
