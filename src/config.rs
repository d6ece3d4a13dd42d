use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pattern used when none (or an empty one) is configured.
pub const DEFAULT_PATTERN: &str = "*";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Whether subdirectories of the root are descended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecursionMode {
    /// Only the root's direct children.
    #[default]
    TopDirectoryOnly,

    /// The whole tree below the root.
    AllDirectories,
}

/// Which kinds of filesystem objects are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntryTypes {
    #[default]
    All,
    Files,
    Directories,
}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Parameters for one enumeration.
///
/// Built with chained setters, then handed to [`enumerate`](crate::enumerate)
/// or [`search`](crate::search). The enumerator never mutates it.
///
/// # Example
///
/// ```rust
/// use pathscan::{EntryTypes, RecursionMode, SearchConfig};
///
/// let config = SearchConfig::new("/var/log")
///     .pattern("*.log")
///     .recursion(RecursionMode::AllDirectories)
///     .entry_types(EntryTypes::Files)
///     .replace_root("$LOGS")
///     .url_encode(false);
///
/// assert_eq!(config.effective_pattern(), "*.log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Directory to enumerate. Must exist.
    pub root: PathBuf,

    /// Glob matched against each entry's file name. `None` or empty means `*`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pattern: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub recursion: RecursionMode,

    #[cfg_attr(feature = "serde", serde(default))]
    pub entry_types: EntryTypes,

    /// Replaces every literal occurrence of `root` in each result.
    #[cfg_attr(feature = "serde", serde(default))]
    pub root_replacement: Option<String>,

    /// Percent-encode each result after replacement.
    #[cfg_attr(feature = "serde", serde(default))]
    pub url_encode: bool,
}

impl SearchConfig {
    /// A configuration listing everything directly under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:             root.into(),
            pattern:          None,
            recursion:        RecursionMode::default(),
            entry_types:      EntryTypes::default(),
            root_replacement: None,
            url_encode:       false,
        }
    }

    // ── Setters ───────────────────────────────────────────────────────────

    /// Glob pattern such as `*.txt`. An empty string behaves like `*`.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn recursion(mut self, mode: RecursionMode) -> Self {
        self.recursion = mode;
        self
    }

    /// Shorthand for `.recursion(RecursionMode::AllDirectories)` when `yes`.
    pub fn recursive(self, yes: bool) -> Self {
        self.recursion(if yes {
            RecursionMode::AllDirectories
        } else {
            RecursionMode::TopDirectoryOnly
        })
    }

    pub fn entry_types(mut self, types: EntryTypes) -> Self {
        self.entry_types = types;
        self
    }

    /// Substitute `replacement` for every occurrence of the root string.
    pub fn replace_root(mut self, replacement: impl Into<String>) -> Self {
        self.root_replacement = Some(replacement.into());
        self
    }

    pub fn url_encode(mut self, yes: bool) -> Self {
        self.url_encode = yes;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The pattern actually used for matching.
    pub fn effective_pattern(&self) -> &str {
        match self.pattern.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PATTERN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::new("some/dir");
        assert_eq!(config.root(), Path::new("some/dir"));
        assert_eq!(config.recursion, RecursionMode::TopDirectoryOnly);
        assert_eq!(config.entry_types, EntryTypes::All);
        assert!(config.root_replacement.is_none());
        assert!(!config.url_encode);
    }

    #[test]
    fn missing_or_empty_pattern_means_everything() {
        assert_eq!(SearchConfig::new(".").effective_pattern(), "*");
        assert_eq!(SearchConfig::new(".").pattern("").effective_pattern(), "*");
        assert_eq!(SearchConfig::new(".").pattern("*.rs").effective_pattern(), "*.rs");
    }

    #[test]
    fn recursive_shorthand() {
        let config = SearchConfig::new(".").recursive(true);
        assert_eq!(config.recursion, RecursionMode::AllDirectories);
        let config = config.recursive(false);
        assert_eq!(config.recursion, RecursionMode::TopDirectoryOnly);
    }
}
