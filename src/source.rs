use std::path::PathBuf;

use ignore::{DirEntry, WalkBuilder};

use crate::config::RecursionMode;
use crate::engine::WalkRequest;
use crate::entry::{Entry, EntryKind};
use crate::error::ScanError;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// FsSource
// ---------------------------------------------------------------------------

/// The platform filesystem walker, backed by `ignore`'s sequential walker.
///
/// Every ignore rule is switched off: hidden files are listed, `.gitignore`
/// is not read, and symlinks are reported without being followed. The walk
/// is depth-first and reads one directory at a time as the caller pulls.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl Source for FsSource {
    fn walk(&self, request: &WalkRequest) -> Box<dyn Iterator<Item = Result<Entry, ScanError>> + Send> {
        let mut builder = WalkBuilder::new(&request.root);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(false)
            .same_file_system(false);

        if request.recursion == RecursionMode::TopDirectoryOnly {
            builder.max_depth(Some(1));
        }

        let walk = builder
            .build()
            // Skip the root itself
            .filter(|res| res.as_ref().map(|e| e.depth() > 0).unwrap_or(true))
            .map(|res| res.map(to_entry).map_err(map_ignore_error));

        Box::new(walk)
    }
}

fn to_entry(entry: DirEntry) -> Entry {
    let kind = entry
        .file_type()
        .map(EntryKind::from_file_type)
        .unwrap_or(EntryKind::Other);

    Entry {
        name: entry.file_name().to_string_lossy().into_owned(),
        depth: entry.depth(),
        path: entry.into_path(),
        kind,
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ScanError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> ScanError {
    map_with_path(e, PathBuf::new())
}

fn map_with_path(e: ignore::Error, path: PathBuf) -> ScanError {
    match e {
        ignore::Error::WithPath { path, err } => map_with_path(*err, path),
        ignore::Error::WithDepth { err, .. } => map_with_path(*err, path),
        ignore::Error::Loop { child, .. } => ScanError::SymlinkLoop(child),
        ignore::Error::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                ScanError::PermissionDenied(path)
            } else {
                ScanError::Io { path, source: io_err }
            }
        }
        other => ScanError::Source(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;

    fn names(root: &std::path::Path, recursion: RecursionMode) -> Vec<String> {
        let request = WalkRequest {
            root: root.to_path_buf(),
            recursion,
        };
        let mut out: Vec<String> = FsSource
            .walk(&request)
            .map(|e| e.unwrap().name)
            .collect();
        out.sort();
        out
    }

    #[test]
    fn top_directory_only_stays_at_depth_one() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), "b").unwrap();

        assert_eq!(names(dir.path(), RecursionMode::TopDirectoryOnly), ["a.txt", "sub"]);
        assert_eq!(
            names(dir.path(), RecursionMode::AllDirectories),
            ["a.txt", "b.txt", "sub"]
        );
    }

    #[test]
    fn hidden_files_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::write(dir.path().join(".gitignore"), "*\n").unwrap();

        assert_eq!(
            names(dir.path(), RecursionMode::TopDirectoryOnly),
            [".gitignore", ".hidden"]
        );
    }

    #[test]
    fn io_errors_keep_their_path() {
        let err = ignore::Error::WithPath {
            path: PathBuf::from("/locked"),
            err: Box::new(ignore::Error::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "denied",
            ))),
        };
        match map_ignore_error(err) {
            ScanError::PermissionDenied(p) => assert_eq!(p, PathBuf::from("/locked")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn depth_wrapper_is_unwrapped() {
        let err = ignore::Error::WithDepth {
            depth: 3,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("/gone"),
                err: Box::new(ignore::Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone"))),
            }),
        };
        assert!(matches!(map_ignore_error(err), ScanError::Io { path, .. } if path == PathBuf::from("/gone")));
    }
}
