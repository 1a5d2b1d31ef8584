use std::path::PathBuf;

use crate::config::{CaseSensitivity, SearchSpec, WalkMode};

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring a parfind search.
///
/// Created via [`parfind::search()`](crate::search). Configure with chained
/// builder methods, then call [`build()`](SearchBuilder::build) to freeze the
/// configuration into a [`SearchSpec`].
///
/// # Example
///
/// ```rust
/// use parfind::WalkMode;
///
/// let spec = parfind::search("/var/log")
///     .target("syslog")
///     .target("kern.log")
///     .recursive(true)
///     .case_insensitive(true)
///     .build();
///
/// assert_eq!(spec.targets().len(), 2);
/// assert_eq!(spec.mode(), WalkMode::Recursive);
/// ```
pub struct SearchBuilder {
    root:    PathBuf,
    targets: Vec<String>,
    mode:    WalkMode,
    case:    CaseSensitivity,
}

impl SearchBuilder {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:    root.into(),
            targets: Vec::new(),
            mode:    WalkMode::default(),
            case:    CaseSensitivity::default(),
        }
    }

    // ── Targets ───────────────────────────────────────────────────────────

    /// Add one filename to look for. Repeats are searched repeatedly.
    pub fn target(mut self, name: impl Into<String>) -> Self {
        self.targets.push(name.into());
        self
    }

    /// Add several filenames, keeping their order.
    pub fn targets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.extend(names.into_iter().map(Into::into));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Descend into subdirectories. Off by default: only direct children
    /// of the root are examined.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.mode = WalkMode::from_recursive(yes);
        self
    }

    /// Compare names ignoring ASCII case. Off by default.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case = CaseSensitivity::from_insensitive(yes);
        self
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Freeze the configuration.
    ///
    /// The root is made absolute against the current directory so reported
    /// paths are absolute. Existence is not checked here; the dispatcher
    /// validates the root once before starting any task.
    pub fn build(self) -> SearchSpec {
        let root = std::path::absolute(&self.root).unwrap_or(self.root);
        SearchSpec::new(root, self.targets, self.mode, self.case)
    }
}
