use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, error};

use crate::config::SearchSpec;
use crate::error::FindError;
use crate::event::TaskId;
use crate::results::{ExitStatus, Report, TaskOutcome, TaskStats};
use crate::task::SearchTask;
use crate::traits::{Job, Sink, Source, Spawner};
use crate::walk::DirectorySource;

// ---------------------------------------------------------------------------
// ThreadSpawner
// ---------------------------------------------------------------------------

/// Runs each job on its own named OS thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl Spawner for ThreadSpawner {
    fn spawn(&self, name: String, job: Job) -> io::Result<JoinHandle<TaskStats>> {
        thread::Builder::new().name(name).spawn(job)
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Fans out one search task per target, then waits for all of them.
///
/// Every task shares the same [`Source`] and [`Sink`]. A task that cannot be
/// started, or that panics, is reported through the sink and the rest go
/// ahead regardless.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use parfind::{Dispatcher, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let spec = parfind::search(".").targets(["Cargo.toml", "README.md"]).build();
///
/// let report = Dispatcher::new(sink.clone()).run(Arc::new(spec));
/// assert!(report.status.is_success());
/// println!("{} events", sink.events().len());
/// ```
pub struct Dispatcher {
    sink:    Arc<dyn Sink>,
    source:  Arc<dyn Source>,
    spawner: Box<dyn Spawner>,
}

impl Dispatcher {
    /// A dispatcher that walks the filesystem on OS threads.
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            source:  Arc::new(DirectorySource),
            spawner: Box::new(ThreadSpawner),
        }
    }

    /// Search something other than the local filesystem.
    pub fn with_source(mut self, source: Arc<dyn Source>) -> Self {
        self.source = source;
        self
    }

    /// Start tasks some other way than one OS thread each.
    pub fn with_spawner(mut self, spawner: impl Spawner + 'static) -> Self {
        self.spawner = Box::new(spawner);
        self
    }

    /// Run every target of `spec` to completion.
    ///
    /// The root is validated first; if it is not a directory the error is
    /// reported to the sink and no task is started.
    pub fn run(&self, spec: Arc<SearchSpec>) -> Report {
        if let Err(e) = spec.validate() {
            debug!("{e}");
            self.sink.report(&e);
            return Report::invalid_root();
        }

        let start = Instant::now();

        // Fan out: start everything before waiting on anything.
        let mut pending: Vec<Pending> = Vec::with_capacity(spec.targets().len());
        for (i, target) in spec.targets().iter().enumerate() {
            let task = TaskId(i + 1);
            let job = self.job(task, Arc::clone(&spec), i);

            match self.spawner.spawn(format!("parfind-{task}"), job) {
                Ok(handle) => {
                    debug!(task = %task, target = target.as_str(), "task spawned");
                    pending.push(Pending::Running { task, target: target.clone(), handle });
                }
                Err(source) => {
                    let err = FindError::TaskStart { target: target.clone(), source };
                    debug!(task = %task, "{err}");
                    self.sink.report(&err);
                    pending.push(Pending::Failed { task, target: target.clone(), error: err });
                }
            }
        }

        // Fan in.
        let outcomes: Vec<TaskOutcome> = pending
            .into_iter()
            .map(|p| p.wait(self.sink.as_ref()))
            .collect();

        let status = if outcomes.iter().any(TaskOutcome::is_failure) {
            ExitStatus::PartialTaskFailure
        } else {
            ExitStatus::Success
        };

        Report {
            status,
            outcomes,
            duration: start.elapsed(),
        }
    }

    fn job(&self, task: TaskId, spec: Arc<SearchSpec>, index: usize) -> Job {
        let source = Arc::clone(&self.source);
        let sink = Arc::clone(&self.sink);

        Box::new(move || {
            let target = &spec.targets()[index];
            SearchTask::new(task, target, &spec).run(source.as_ref(), sink.as_ref())
        })
    }
}

enum Pending {
    Running {
        task:   TaskId,
        target: String,
        handle: JoinHandle<TaskStats>,
    },
    Failed {
        task:   TaskId,
        target: String,
        error:  FindError,
    },
}

impl Pending {
    fn wait(self, sink: &dyn Sink) -> TaskOutcome {
        match self {
            Self::Running { task, target, handle } => match handle.join() {
                Ok(stats) => TaskOutcome::Completed(stats),
                Err(_) => {
                    error!(task = %task, target = target.as_str(), "search task panicked");
                    sink.report(&FindError::TaskPanicked { target: target.clone() });
                    TaskOutcome::Panicked { task, target }
                }
            },
            Self::Failed { task, target, error } => TaskOutcome::FailedToStart { task, target, error },
        }
    }
}
