use crate::error::ScanError;

/// A fully drained enumeration.
///
/// Produced by [`Paths::collect_all`](crate::Paths::collect_all). Keeping
/// errors next to the paths lets a caller tell "nothing matched" apart from
/// "part of the tree could not be read".
#[derive(Debug, Default)]
pub struct Collected {
    /// Transformed paths, in the order they were produced.
    pub paths: Vec<String>,

    /// Recoverable errors hit during the walk (permission denied, etc.).
    pub errors: Vec<ScanError>,
}

impl Collected {
    /// Whether some part of the tree was skipped because of an error.
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.errors.is_empty()
    }
}
