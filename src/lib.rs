//! # parfind
//!
//! Find many filenames at once — one concurrent search per name, one clean
//! output stream.
//!
//! Every target name gets its own search task walking the same root. Tasks
//! publish what they discover as they go through a shared [`Sink`], which
//! keeps each result line whole no matter how many tasks write at once.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let spec = parfind::search("/srv/data")
//!     .targets(["a.txt", "missing.txt"])
//!     .recursive(true)
//!     .build();
//!
//! // Match lines on stdout, diagnostics on stderr.
//! let status = parfind::run_search(spec);
//! std::process::exit(status.code().into());
//! ```
//!
//! Which prints, in no particular order across targets:
//!
//! ```text
//! 1: a.txt: /srv/data/a.txt
//! 1: a.txt: /srv/data/sub/a.txt
//! 2: missing.txt: Not found in /srv/data
//! ```
//!
//! # Collecting Results
//!
//! Use a [`MemorySink`] with a [`Dispatcher`] to get events back as values:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use parfind::{Dispatcher, MatchEvent, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let spec = parfind::search(".").target("Cargo.toml").build();
//! Dispatcher::new(sink.clone()).run(Arc::new(spec));
//!
//! for event in sink.events() {
//!     if let MatchEvent::Found { path, .. } = event {
//!         println!("{}", path.display());
//!     }
//! }
//! ```

#![forbid(unsafe_code)]

pub mod walk;

mod builder;
mod config;
mod dispatch;
mod entry;
mod error;
mod event;
mod matcher;
mod results;
mod sink;
mod task;
mod traits;

use std::path::PathBuf;
use std::sync::Arc;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use config::{CaseSensitivity, SearchSpec, WalkMode};
pub use dispatch::{Dispatcher, ThreadSpawner};
pub use entry::{Entry, EntryKind};
pub use error::FindError;
pub use event::{MatchEvent, TaskId};
pub use matcher::{matches, NameMatcher};
pub use results::{ExitStatus, Report, TaskOutcome, TaskStats};
pub use sink::{MemorySink, StreamSink};
pub use task::SearchTask;
pub use traits::{Job, Matcher, Sink, Source, Spawner};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] rooted at `root`.
///
/// # Example
///
/// ```rust
/// let spec = parfind::search("/tmp").target("notes.md").build();
///
/// assert!(spec.root().is_absolute());
/// assert_eq!(spec.targets(), ["notes.md"]);
/// ```
pub fn search(root: impl Into<PathBuf>) -> SearchBuilder {
    SearchBuilder::new(root)
}

/// Run a search to completion, writing match lines to stdout and
/// diagnostics to stderr.
pub fn run_search(spec: SearchSpec) -> ExitStatus {
    let sink = Arc::new(StreamSink::stdio());
    Dispatcher::new(sink).run(Arc::new(spec)).status
}
