use std::process::ExitCode;
use std::time::Duration;

use crate::error::FindError;
use crate::event::TaskId;

/// Counters for one search task that ran to completion.
#[derive(Debug, Clone)]
pub struct TaskStats {
    pub task: TaskId,

    pub target: String,

    /// Number of `Found` events published.
    pub matches: usize,

    /// Regular files visited, matched or not.
    pub files: usize,

    /// Directories visited.
    pub dirs: usize,

    /// Number of `WalkError` events published.
    pub errors: usize,

    /// Wall-clock time from task start to its last event.
    pub duration: Duration,
}

impl TaskStats {
    pub(crate) fn new(task: TaskId, target: &str) -> Self {
        Self {
            task,
            target:   target.to_string(),
            matches:  0,
            files:    0,
            dirs:     0,
            errors:   0,
            duration: Duration::ZERO,
        }
    }

    pub fn found_any(&self) -> bool {
        self.matches > 0
    }
}

/// How one target's task ended.
#[derive(Debug)]
pub enum TaskOutcome {
    Completed(TaskStats),

    /// The task was never started. Nothing was published for this target.
    FailedToStart {
        task:   TaskId,
        target: String,
        error:  FindError,
    },

    /// The worker panicked. Whatever it published before that stays published.
    Panicked { task: TaskId, target: String },
}

impl TaskOutcome {
    pub fn task(&self) -> TaskId {
        match self {
            Self::Completed(stats) => stats.task,
            Self::FailedToStart { task, .. } | Self::Panicked { task, .. } => *task,
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Completed(_))
    }
}

/// Overall result of a run, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every task ran. Targets that were not found still count as success.
    Success,

    /// At least one task failed to start or did not finish.
    PartialTaskFailure,

    /// The root was not a directory. No task was started.
    InvalidRoot,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::InvalidRoot => 1,
            // 2 is what clap exits with on usage errors
            Self::PartialTaskFailure => 3,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Everything the dispatcher knows once all tasks are done.
///
/// `outcomes` is in target input order, one per target.
#[derive(Debug)]
pub struct Report {
    pub status: ExitStatus,

    pub outcomes: Vec<TaskOutcome>,

    /// Wall-clock time of the whole run.
    pub duration: Duration,
}

impl Report {
    pub(crate) fn invalid_root() -> Self {
        Self {
            status:   ExitStatus::InvalidRoot,
            outcomes: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Stats of the tasks that completed, in target order.
    pub fn completed(&self) -> impl Iterator<Item = &TaskStats> {
        self.outcomes.iter().filter_map(|o| match o {
            TaskOutcome::Completed(stats) => Some(stats),
            _ => None,
        })
    }

    pub fn total_matches(&self) -> usize {
        self.completed().map(|s| s.matches).sum()
    }
}
