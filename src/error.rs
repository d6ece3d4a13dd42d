use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    // Config
    #[error("root directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),

    // Traversal
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("symlink loop: {}", .0.display())]
    SymlinkLoop(PathBuf),

    #[error("IO error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Third-party extensibility
    #[error("source error: {0}")]
    Source(String),
}

impl ScanError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::RootNotFound(p)
            | Self::PermissionDenied(p)
            | Self::SymlinkLoop(p)
            | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the enumeration keeps going after this error.
    ///
    /// Recoverable errors are yielded in-band by [`Paths`](crate::Paths) and
    /// the walk continues with the next subtree. Fatal errors (missing root,
    /// bad pattern) are only ever returned from
    /// [`SearchBuilder::run`](crate::SearchBuilder::run).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::RootNotFound(_) | Self::InvalidPattern(_))
    }
}
