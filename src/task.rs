use std::time::Instant;

use tracing::debug;

use crate::config::SearchSpec;
use crate::entry::EntryKind;
use crate::event::{MatchEvent, TaskId};
use crate::matcher::NameMatcher;
use crate::results::TaskStats;
use crate::traits::{Matcher, Sink, Source};

/// Searches one root for one target name and publishes what it finds.
///
/// Events stream out as the walk discovers them. A task that found nothing
/// finishes with exactly one `NotFound`; a task that found anything never
/// publishes one. Walk errors are published as they happen and do not stop
/// the walk.
pub struct SearchTask<'a> {
    task:    TaskId,
    target:  &'a str,
    spec:    &'a SearchSpec,
    matcher: NameMatcher,
}

impl<'a> SearchTask<'a> {
    pub fn new(task: TaskId, target: &'a str, spec: &'a SearchSpec) -> Self {
        Self {
            task,
            target,
            spec,
            matcher: NameMatcher::new(target, spec.case()),
        }
    }

    pub fn run(&self, source: &dyn Source, sink: &dyn Sink) -> TaskStats {
        let start = Instant::now();
        let mut stats = TaskStats::new(self.task, self.target);

        debug!(task = %self.task, target = self.target, root = %self.spec.root().display(), "search started");

        for res in source.walk(self.spec.root(), self.spec.mode()) {
            let entry = match res {
                Ok(e) => e,
                Err(e) => {
                    stats.errors += 1;
                    let path = e
                        .path()
                        .cloned()
                        .unwrap_or_else(|| self.spec.root().to_path_buf());
                    sink.publish(&MatchEvent::WalkError {
                        task: self.task,
                        path,
                        detail: e.detail(),
                    });
                    continue;
                }
            };

            match entry.kind {
                EntryKind::File => stats.files += 1,
                EntryKind::Dir => stats.dirs += 1,
                _ => {}
            }

            if self.matcher.is_match(&entry) {
                stats.matches += 1;
                sink.publish(&MatchEvent::Found {
                    task:   self.task,
                    target: self.target.to_string(),
                    path:   entry.path,
                });
            }
        }

        if !stats.found_any() {
            sink.publish(&MatchEvent::NotFound {
                task:   self.task,
                target: self.target.to_string(),
                root:   self.spec.root().to_path_buf(),
            });
        }

        stats.duration = start.elapsed();
        debug!(
            task = %self.task,
            target = self.target,
            matches = stats.matches,
            errors = stats.errors,
            elapsed_ms = stats.duration.as_millis() as u64,
            "search finished"
        );
        stats
    }
}
