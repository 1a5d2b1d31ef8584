use std::path::{Path, PathBuf};

/// How far below the root a walk descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// Direct children of the root only.
    #[default]
    Flat,

    /// Every descendant at any depth.
    Recursive,
}

impl WalkMode {
    pub fn from_recursive(recursive: bool) -> Self {
        if recursive {
            Self::Recursive
        } else {
            Self::Flat
        }
    }

    /// The `max_depth` handed to the walker. `None` is unlimited.
    pub fn max_depth(self) -> Option<usize> {
        match self {
            Self::Flat => Some(1),
            Self::Recursive => None,
        }
    }
}

/// Case policy for comparing an entry name against a target name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,

    /// ASCII letters compare regardless of case; every other byte literally.
    Insensitive,
}

impl CaseSensitivity {
    pub fn from_insensitive(insensitive: bool) -> Self {
        if insensitive {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    pub fn is_insensitive(self) -> bool {
        self == Self::Insensitive
    }
}

/// Immutable description of one run: where to look, what to look for, how.
///
/// Built once through [`SearchBuilder`](crate::SearchBuilder) and shared
/// read-only by every search task of the run.
#[derive(Debug, Clone)]
pub struct SearchSpec {
    root:    PathBuf,
    targets: Vec<String>,
    mode:    WalkMode,
    case:    CaseSensitivity,
}

impl SearchSpec {
    pub(crate) fn new(
        root: PathBuf,
        targets: Vec<String>,
        mode: WalkMode,
        case: CaseSensitivity,
    ) -> Self {
        Self { root, targets, mode, case }
    }

    /// The directory every task walks.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Target filenames in input order. Duplicates are kept.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn mode(&self) -> WalkMode {
        self.mode
    }

    pub fn case(&self) -> CaseSensitivity {
        self.case
    }

    /// Checks the root once, before any task is started.
    pub fn validate(&self) -> Result<(), crate::FindError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(crate::FindError::InvalidRoot(self.root.clone()))
        }
    }
}
