use crate::config::CaseSensitivity;
use crate::entry::{Entry, EntryKind};
use crate::traits::Matcher;

/// Compares a candidate basename against a target name.
///
/// Case-insensitive comparison folds ASCII letters only; every other byte,
/// including non-ASCII UTF-8, must be equal as-is.
///
/// ```rust
/// assert!(parfind::matches("Report.TXT", "report.txt", true));
/// assert!(!parfind::matches("Report.TXT", "report.txt", false));
/// ```
pub fn matches(candidate: &str, target: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        candidate.eq_ignore_ascii_case(target)
    } else {
        candidate == target
    }
}

/// Matches regular files whose basename equals one target name.
///
/// Directories, symlinks and other node types never match, even when their
/// name does.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    target: String,
    case:   CaseSensitivity,
}

impl NameMatcher {
    pub fn new(target: impl Into<String>, case: CaseSensitivity) -> Self {
        Self { target: target.into(), case }
    }
}

impl Matcher for NameMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.kind == EntryKind::File
            && matches(&entry.name, &self.target, self.case.is_insensitive())
    }
}
