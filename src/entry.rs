use std::path::PathBuf;

/// A single item produced by a [`Source`](crate::traits::Source) during traversal.
///
/// Sources build these from whatever listing primitive they wrap. The
/// enumerator only reads `name` (for pattern matching), `kind` (for the
/// entry-type filter) and `path` (for output).
#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path to the entry, as produced by joining onto the root.
    pub path: PathBuf,

    /// The entry's file name.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// How deep in the traversal this entry was found. Root = 0.
    pub depth: usize,
}

impl Entry {
    /// Whether this entry should count as a directory for filtering.
    ///
    /// Symlinks are not followed during the walk, but a link that resolves
    /// to a directory is still reported as one.
    pub fn is_dir_like(&self) -> bool {
        match self.kind {
            EntryKind::Dir => true,
            EntryKind::Symlink => self.path.is_dir(),
            EntryKind::File | EntryKind::Other => false,
        }
    }
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    /// Map a std file type to an entry kind.
    pub fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}
