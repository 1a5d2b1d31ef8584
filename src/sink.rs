use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::error::FindError;
use crate::event::MatchEvent;
use crate::traits::Sink;

// ---------------------------------------------------------------------------
// StreamSink
// ---------------------------------------------------------------------------

struct Streams<O, E> {
    out: O,
    err: E,
}

/// Writes events as text lines to a match stream and a diagnostic stream.
///
/// `Found` and `NotFound` lines go to `out`; walk errors and start failures
/// go to `err`. Both streams sit behind one lock, and a line is rendered in
/// full before the lock is taken, so concurrent tasks can never tear each
/// other's lines.
pub struct StreamSink<O, E> {
    streams: Mutex<Streams<O, E>>,
}

impl StreamSink<Stdout, Stderr> {
    /// Match lines to stdout, diagnostics to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write + Send, E: Write + Send> StreamSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            streams: Mutex::new(Streams { out, err }),
        }
    }

    /// Give back the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        let streams = self
            .streams
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (streams.out, streams.err)
    }

    // A panic while holding the lock cannot leave half a line behind: lines
    // are written with a single write_all of a fully rendered buffer.
    fn lock(&self) -> MutexGuard<'_, Streams<O, E>> {
        self.streams
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_line(&self, line: String, diagnostic: bool) {
        let mut buf = line.into_bytes();
        buf.push(b'\n');

        let mut streams = self.lock();
        let res = if diagnostic {
            streams.err.write_all(&buf).and_then(|()| streams.err.flush())
        } else {
            streams.out.write_all(&buf).and_then(|()| streams.out.flush())
        };
        drop(streams);

        if let Err(e) = res {
            warn!(error = %e, diagnostic, "failed to write output line");
        }
    }
}

impl<O: Write + Send, E: Write + Send> Sink for StreamSink<O, E> {
    fn publish(&self, event: &MatchEvent) {
        self.write_line(event.to_string(), event.is_diagnostic());
    }

    fn report(&self, error: &FindError) {
        self.write_line(format!("error: {error}"), true);
    }
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

/// Keeps every event in publish order, for callers that want results as
/// values rather than text.
#[derive(Default)]
pub struct MemorySink {
    events:      Mutex<Vec<MatchEvent>>,
    diagnostics: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every event published so far.
    pub fn events(&self) -> Vec<MatchEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rendered run-level errors, in the order they were reported.
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Sink for MemorySink {
    fn publish(&self, event: &MatchEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }

    fn report(&self, error: &FindError) {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::event::TaskId;

    #[test]
    fn routes_diagnostics_to_the_error_stream() {
        let sink = StreamSink::new(Vec::new(), Vec::new());
        sink.publish(&MatchEvent::Found {
            task:   TaskId(1),
            target: "a.txt".into(),
            path:   PathBuf::from("/r/a.txt"),
        });
        sink.publish(&MatchEvent::WalkError {
            task:   TaskId(1),
            path:   PathBuf::from("/r/bad"),
            detail: "I/O error".into(),
        });
        sink.publish(&MatchEvent::NotFound {
            task:   TaskId(2),
            target: "b.txt".into(),
            root:   PathBuf::from("/r"),
        });

        let (out, err) = sink.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1: a.txt: /r/a.txt\n2: b.txt: Not found in /r\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "1: error accessing /r/bad: I/O error\n"
        );
    }

    #[test]
    fn run_level_errors_are_diagnostics() {
        let sink = StreamSink::new(Vec::new(), Vec::new());
        let error = FindError::TaskStart {
            target: "a.txt".into(),
            source: io::Error::new(io::ErrorKind::WouldBlock, "no threads left"),
        };
        sink.report(&error);

        let (out, err) = sink.into_inner();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: failed to start search for a.txt: no threads left\n"
        );
    }
}
