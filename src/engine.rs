use std::iter::FusedIterator;
use std::path::PathBuf;

use crate::cancel::CancellationToken;
use crate::config::RecursionMode;
use crate::diagnostics::Diagnostics;
use crate::entry::Entry;
use crate::error::ScanError;
use crate::matcher::TypeMatcher;
use crate::results::Collected;
use crate::transform::PathTransform;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// WalkRequest
// ---------------------------------------------------------------------------

/// What a [`Source`](crate::Source) is asked to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkRequest {
    /// The (already validated) root directory.
    pub root: PathBuf,

    /// Whether to descend below the root's direct children.
    pub recursion: RecursionMode,
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// Lazy, cancellable stream of transformed path strings.
///
/// Returned by [`enumerate`](crate::enumerate) and
/// [`SearchBuilder::run`](crate::SearchBuilder::run) after the root has been
/// validated. Nothing is read from disk until the first `next()`.
///
/// Items are `Ok(path)` for matches and `Err(e)` for recoverable walk
/// failures; after an error the walk carries on with the next subtree. Every
/// error is also handed to the configured [`Diagnostics`] sink.
///
/// The cancellation token is checked before every yield. Once it is set the
/// iterator returns `None` for good.
pub struct Paths {
    walk:        Box<dyn Iterator<Item = Result<Entry, ScanError>> + Send>,
    pattern:     Box<dyn Matcher>,
    types:       TypeMatcher,
    transform:   PathTransform,
    cancel:      CancellationToken,
    diagnostics: Box<dyn Diagnostics>,
    done:        bool,
}

impl Paths {
    pub(crate) fn new(
        walk: Box<dyn Iterator<Item = Result<Entry, ScanError>> + Send>,
        pattern: Box<dyn Matcher>,
        types: TypeMatcher,
        transform: PathTransform,
        cancel: CancellationToken,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        Self {
            walk,
            pattern,
            types,
            transform,
            cancel,
            diagnostics,
            done: false,
        }
    }

    /// Drop error items and yield only paths.
    ///
    /// Errors still reach the diagnostics sink.
    pub fn ok_only(self) -> impl Iterator<Item = String> {
        self.filter_map(Result::ok)
    }

    /// Drain the stream, keeping paths and errors apart.
    pub fn collect_all(self) -> Collected {
        let mut collected = Collected::default();
        for item in self {
            match item {
                Ok(path) => collected.paths.push(path),
                Err(e)   => collected.errors.push(e),
            }
        }
        collected
    }

    /// Ends the stream if the token has been set.
    fn stop_if_cancelled(&mut self) -> bool {
        if !self.done && self.cancel.is_cancelled() {
            tracing::debug!("enumeration cancelled");
            self.done = true;
        }
        self.done
    }
}

impl Iterator for Paths {
    type Item = Result<String, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.stop_if_cancelled() {
                return None;
            }

            let entry = match self.walk.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    if self.stop_if_cancelled() {
                        return None;
                    }
                    self.diagnostics.report(&e);
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            if !self.pattern.is_match(&entry) || !self.types.is_match(&entry) {
                tracing::trace!(path = %entry.path.display(), kind = ?entry.kind, "filtered out");
                continue;
            }

            let raw = entry.path.to_string_lossy();
            let path = if self.transform.is_identity() {
                raw.into_owned()
            } else {
                self.transform.apply(&raw)
            };

            if self.stop_if_cancelled() {
                return None;
            }
            return Some(Ok(path));
        }
    }
}

impl FusedIterator for Paths {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntryTypes;
    use crate::diagnostics::NoDiagnostics;
    use crate::entry::EntryKind;
    use crate::matcher::{compile_pattern, AllMatcher};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn file(path: &str) -> Result<Entry, ScanError> {
        let path = PathBuf::from(path);
        Ok(Entry {
            name: path.file_name().unwrap().to_string_lossy().into_owned(),
            path,
            kind: EntryKind::File,
            depth: 1,
        })
    }

    fn paths_over(items: Vec<Result<Entry, ScanError>>, cancel: CancellationToken) -> Paths {
        Paths::new(
            Box::new(items.into_iter()),
            Box::new(AllMatcher),
            TypeMatcher(EntryTypes::All),
            PathTransform::new("/r", None, false),
            cancel,
            Box::new(NoDiagnostics),
        )
    }

    #[test]
    fn yields_in_source_order() {
        let out: Vec<_> = paths_over(
            vec![file("/r/b"), file("/r/a"), file("/r/c")],
            CancellationToken::new(),
        )
        .ok_only()
        .collect();
        assert_eq!(out, ["/r/b", "/r/a", "/r/c"]);
    }

    #[test]
    fn cancelled_before_start_yields_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut paths = paths_over(vec![file("/r/a")], cancel);
        assert!(paths.next().is_none());
    }

    #[test]
    fn cancel_mid_stream_ends_silently() {
        let cancel = CancellationToken::new();
        let mut paths = paths_over(
            vec![file("/r/a"), file("/r/b"), file("/r/c")],
            cancel.clone(),
        );
        assert_eq!(paths.next().unwrap().unwrap(), "/r/a");
        cancel.cancel();
        assert!(paths.next().is_none());
        assert!(paths.next().is_none());
    }

    #[test]
    fn errors_are_yielded_and_reported() {
        let reported = Arc::new(AtomicUsize::new(0));
        let sink = {
            let reported = Arc::clone(&reported);
            move |_: &ScanError| {
                reported.fetch_add(1, Ordering::Relaxed);
            }
        };
        let paths = Paths::new(
            Box::new(
                vec![
                    file("/r/a"),
                    Err(ScanError::PermissionDenied("/r/locked".into())),
                    file("/r/b"),
                ]
                .into_iter(),
            ),
            Box::new(AllMatcher),
            TypeMatcher(EntryTypes::All),
            PathTransform::new("/r", None, false),
            CancellationToken::new(),
            Box::new(sink),
        );

        let collected = paths.collect_all();
        assert_eq!(collected.paths, ["/r/a", "/r/b"]);
        assert_eq!(collected.errors.len(), 1);
        assert!(collected.is_partial());
        assert_eq!(reported.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn filters_then_transforms() {
        let paths = Paths::new(
            Box::new(vec![file("/r/a.txt"), file("/r/b.md")].into_iter()),
            compile_pattern("*.txt").unwrap(),
            TypeMatcher(EntryTypes::Files),
            PathTransform::new("/r", Some("ROOT".into()), true),
            CancellationToken::new(),
            Box::new(NoDiagnostics),
        );
        let out: Vec<_> = paths.ok_only().collect();
        assert_eq!(out, ["ROOT%2Fa.txt"]);
    }

    #[test]
    fn stream_can_be_drained_on_a_worker_thread() {
        fn assert_send<T: Send>() {}
        assert_send::<Paths>();

        let paths = paths_over(vec![file("/r/a"), file("/r/b")], CancellationToken::new());
        let out = std::thread::spawn(move || paths.ok_only().collect::<Vec<_>>())
            .join()
            .unwrap();
        assert_eq!(out, ["/r/a", "/r/b"]);
    }
}
