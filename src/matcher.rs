use globset::GlobBuilder;

use crate::config::{EntryTypes, DEFAULT_PATTERN};
use crate::entry::Entry;
use crate::error::ScanError;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// Pattern matchers
// ---------------------------------------------------------------------------

/// Matches every entry. Used for the default `*` pattern.
pub struct AllMatcher;

impl Matcher for AllMatcher {
    fn is_match(&self, _entry: &Entry) -> bool {
        true
    }
}

/// Matches an entry's file name against a compiled glob.
///
/// Only the name is tested, so `*` never crosses a path separator and
/// `*.txt` selects `sub/b.txt` by its name `b.txt` during a recursive walk.
pub struct GlobMatcher {
    glob: globset::GlobMatcher,
}

impl GlobMatcher {
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .case_insensitive(cfg!(windows))
            .build()
            .map_err(|e| ScanError::InvalidPattern(format!("{pattern}: {}", e.kind())))?;
        Ok(Self {
            glob: glob.compile_matcher(),
        })
    }
}

impl Matcher for GlobMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        self.glob.is_match(&entry.name)
    }
}

/// Compile a search pattern, short-circuiting `*` to [`AllMatcher`].
pub fn compile_pattern(pattern: &str) -> Result<Box<dyn Matcher>, ScanError> {
    if pattern.is_empty() || pattern == DEFAULT_PATTERN {
        return Ok(Box::new(AllMatcher));
    }
    Ok(Box::new(GlobMatcher::new(pattern)?))
}

// ---------------------------------------------------------------------------
// Entry type filter
// ---------------------------------------------------------------------------

/// Restricts results to files, directories, or both.
pub struct TypeMatcher(pub EntryTypes);

impl Matcher for TypeMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        match self.0 {
            EntryTypes::All => true,
            EntryTypes::Files => !entry.is_dir_like(),
            EntryTypes::Directories => entry.is_dir_like(),
        }
    }
}
