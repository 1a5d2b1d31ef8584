#![allow(dead_code)]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use parfind::{
    Dispatcher, Entry, EntryKind, FindError, Job, MatchEvent, MemorySink, Report, SearchSpec, Source, Spawner,
    TaskId, TaskStats, ThreadSpawner, WalkMode,
};

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

/// Create a temporary directory tree for testing.
///
/// Structure:
/// ```
/// tmp/
///   a.txt
///   b.log
///   Report.TXT
///   sub/
///     a.txt
///     deeper/
///       a.txt
///   a.txt.d/        (directory, not a file)
///   docs/
///     a.txt/        (directory named like a target)
/// ```
pub fn setup_test_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.txt"), "top").unwrap();
    fs::write(root.join("b.log"), "log").unwrap();
    fs::write(root.join("Report.TXT"), "report").unwrap();

    let deeper = root.join("sub").join("deeper");
    fs::create_dir_all(&deeper).unwrap();
    fs::write(root.join("sub").join("a.txt"), "nested").unwrap();
    fs::write(deeper.join("a.txt"), "deep").unwrap();

    fs::create_dir(root.join("a.txt.d")).unwrap();
    fs::create_dir_all(root.join("docs").join("a.txt")).unwrap();

    dir
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

pub fn run_collect(spec: SearchSpec) -> (Report, Vec<MatchEvent>, Vec<String>) {
    let sink = Arc::new(MemorySink::new());
    let report = Dispatcher::new(sink.clone()).run(Arc::new(spec));
    (report, sink.events(), sink.diagnostics())
}

pub fn found_paths(events: &[MatchEvent], target: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = events
        .iter()
        .filter_map(|e| match e {
            MatchEvent::Found { target: t, path, .. } if t == target => Some(path.clone()),
            _ => None,
        })
        .collect();
    paths.sort();
    paths
}

pub fn not_found_count(events: &[MatchEvent], target: &str) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, MatchEvent::NotFound { target: t, .. } if t == target))
        .count()
}

pub fn events_of(events: &[MatchEvent], task: TaskId) -> Vec<&MatchEvent> {
    events.iter().filter(|e| e.task() == task).collect()
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// A writer shared between the sink and the test.
///
/// Accepts at most a few bytes per call and yields in between, so a sink
/// that did not hold its lock across a whole line would interleave.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(3);
        self.0.lock().unwrap().extend_from_slice(&buf[..n]);
        thread::yield_now();
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sources and spawners
// ---------------------------------------------------------------------------

pub enum Step {
    File(&'static str),
    Fail(&'static str),
    /// A failure the source can only describe, with no path attached.
    Opaque(&'static str),
}

/// Yields a fixed sequence of entries and errors under whatever root it is given.
pub struct ScriptedSource(pub Vec<Step>);

impl Source for ScriptedSource {
    fn walk(&self, root: &Path, _mode: WalkMode) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_> {
        let root = root.to_path_buf();
        Box::new(self.0.iter().map(move |step| match step {
            Step::File(name) => Ok(Entry {
                path:  root.join(name),
                name:  name.to_string(),
                kind:  EntryKind::File,
                depth: 1,
            }),
            Step::Fail(dir) => Err(FindError::Io {
                path:   root.join(dir),
                source: io::Error::new(io::ErrorKind::Other, "device went away"),
            }),
            Step::Opaque(detail) => Err(FindError::Source(detail.to_string())),
        }))
    }
}

/// Panics as soon as a task asks it for entries.
pub struct PanickingSource;

impl Source for PanickingSource {
    fn walk(&self, _root: &Path, _mode: WalkMode) -> Box<dyn Iterator<Item = Result<Entry, FindError>> + '_> {
        panic!("source exploded");
    }
}

/// Refuses to start the named threads, starts everything else.
pub struct RefusingSpawner {
    pub refuse:  Vec<String>,
    pub started: Arc<Mutex<Vec<String>>>,
}

impl RefusingSpawner {
    pub fn new(refuse: &[&str]) -> Self {
        Self {
            refuse:  refuse.iter().map(|s| s.to_string()).collect(),
            started: Arc::default(),
        }
    }
}

impl Spawner for RefusingSpawner {
    fn spawn(&self, name: String, job: Job) -> io::Result<JoinHandle<TaskStats>> {
        if self.refuse.contains(&name) {
            return Err(io::Error::new(io::ErrorKind::WouldBlock, "thread limit reached"));
        }
        self.started.lock().unwrap().push(name.clone());
        ThreadSpawner.spawn(name, job)
    }
}
