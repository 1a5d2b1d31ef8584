use std::io;
use std::path::Path;
use std::thread::JoinHandle;

use crate::config::WalkMode;
use crate::entry::Entry;
use crate::error::FindError;
use crate::event::MatchEvent;
use crate::results::TaskStats;

/// A source of entries to search through.
///
/// [`DirectorySource`](crate::walk::DirectorySource) walks the filesystem.
/// Implement this to search something else, or to feed a search task a
/// scripted sequence in tests.
///
/// # Thread Safety
///
/// `Send + Sync` are required — one source is shared by every search task of
/// a run, and each task calls `walk()` from its own thread.
///
/// # Error Handling
///
/// Unreadable subtrees are yielded as `Err(FindError)` and the walk goes on.
/// Permission-denied entries are expected to be skipped silently rather
/// than yielded.
pub trait Source: Send + Sync {
    /// Start a fresh traversal of `root`. Every call walks again from scratch.
    fn walk(&self, root: &Path, mode: WalkMode) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_>;
}

/// Determines whether an entry is a match.
///
/// # Example
///
/// ```rust
/// use parfind::{Matcher, Entry};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this entry should be reported.
    fn is_match(&self, entry: &Entry) -> bool;
}

/// The shared destination for every event of a run.
///
/// `publish` is called concurrently from every search task. Implementations
/// must keep each event whole: no two events may interleave, and events from
/// one task must come out in the order they were published.
pub trait Sink: Send + Sync {
    fn publish(&self, event: &MatchEvent);

    /// A run-level problem that is not an event of a running task: an invalid
    /// root, or a target whose task could not be started or did not finish.
    /// Defaults to a no-op.
    fn report(&self, _error: &FindError) {}
}

/// A unit of work handed to a [`Spawner`].
pub type Job = Box<dyn FnOnce() -> TaskStats + Send + 'static>;

/// Starts concurrent units of work for the dispatcher.
///
/// An `Err` from `spawn` means the job was never started; the dispatcher
/// reports it and carries on with the remaining targets.
pub trait Spawner: Send + Sync {
    fn spawn(&self, name: String, job: Job) -> io::Result<JoinHandle<TaskStats>>;
}
