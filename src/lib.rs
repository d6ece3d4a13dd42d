//! # pathscan
//!
//! Lazy, cancellable filesystem path enumeration.
//!
//! pathscan lists the entries under a root directory that match a glob
//! pattern and an entry-type filter, optionally recursing, and hands them
//! back one string at a time. Each path can have the root rewritten to
//! another prefix and be percent-encoded on the way out. What the caller does
//! with the strings (measuring, reporting) is not pathscan's concern.
//!
//! The pipeline, per call:
//!
//! 1. the root is checked once, up front ([`ScanError::RootNotFound`]);
//! 2. an empty pattern becomes `*`;
//! 3. a [`Source`] walks the tree (by default [`FsSource`], built on `ignore`);
//! 4. each entry passes the pattern and type filters;
//! 5. root replacement, then percent-encoding;
//! 6. the [`CancellationToken`] is checked, and the path is yielded.
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//! use pathscan::{CancellationToken, EntryTypes, RecursionMode, SearchConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "a").unwrap();
//! fs::create_dir(dir.path().join("sub")).unwrap();
//! fs::write(dir.path().join("sub").join("b.txt"), "b").unwrap();
//!
//! let root = dir.path().to_string_lossy().into_owned();
//! let config = SearchConfig::new(&root)
//!     .pattern("*.txt")
//!     .recursion(RecursionMode::AllDirectories)
//!     .entry_types(EntryTypes::Files)
//!     .replace_root("ROOT");
//!
//! let mut paths: Vec<String> = pathscan::enumerate(config, &CancellationToken::new())
//!     .unwrap()
//!     .ok_only()
//!     .collect();
//! paths.sort();
//!
//! let sep = std::path::MAIN_SEPARATOR;
//! assert_eq!(paths, [format!("ROOT{sep}a.txt"), format!("ROOT{sep}sub{sep}b.txt")]);
//! ```
//!
//! # Walk errors
//!
//! An unreadable subtree does not abort the enumeration. The error is given
//! to the [`Diagnostics`] sink (by default a `tracing` warning) and yielded
//! in-band as `Err`, then the walk moves on. Use [`Paths::ok_only`] to ignore
//! them or [`Paths::collect_all`] to keep them next to the paths.

#![forbid(unsafe_code)]

pub mod engine;

mod builder;
mod cancel;
mod config;
mod diagnostics;
mod entry;
mod error;
mod matcher;
mod results;
mod source;
mod traits;
mod transform;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use cancel::CancellationToken;
pub use config::{EntryTypes, RecursionMode, SearchConfig, DEFAULT_PATTERN};
pub use diagnostics::{Diagnostics, LogDiagnostics, NoDiagnostics};
pub use engine::{Paths, WalkRequest};
pub use entry::{Entry, EntryKind};
pub use error::ScanError;
pub use matcher::{compile_pattern, AllMatcher, GlobMatcher, TypeMatcher};
pub use results::Collected;
pub use source::FsSource;
pub use traits::{Matcher, Source};
pub use transform::{encode_data_string, PathTransform, DATA_STRING};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Enumerate the paths described by `config`, stopping when `cancel` is set.
///
/// Uses the filesystem walker and logs walk errors through `tracing`. For
/// other collaborators, use [`search`].
///
/// # Errors
///
/// Fails before reading anything if the root is missing or the pattern is
/// malformed.
///
/// ```rust
/// use pathscan::{CancellationToken, ScanError, SearchConfig};
///
/// let err = pathscan::enumerate(
///     SearchConfig::new("/definitely/not/here"),
///     &CancellationToken::new(),
/// )
/// .err()
/// .unwrap();
///
/// assert!(matches!(err, ScanError::RootNotFound(_)));
/// ```
pub fn enumerate(config: SearchConfig, cancel: &CancellationToken) -> Result<Paths, ScanError> {
    search(config).cancel_with(cancel.clone()).run()
}

/// Create a [`SearchBuilder`] for `config`.
pub fn search(config: SearchConfig) -> SearchBuilder {
    SearchBuilder::new(config)
}
