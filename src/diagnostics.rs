use crate::error::ScanError;

/// Observer for recoverable errors hit during a walk.
///
/// Every error the enumerator yields in-band is reported here first, so a
/// caller that drops error items (see [`Paths::ok_only`](crate::Paths::ok_only))
/// still has a record of what was skipped.
///
/// Closures implement this directly:
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use pathscan::ScanError;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = {
///     let seen = Arc::clone(&seen);
///     move |e: &ScanError| seen.lock().unwrap().push(e.to_string())
/// };
/// # let _ = pathscan::search(pathscan::SearchConfig::new(".")).diagnostics(sink);
/// ```
pub trait Diagnostics: Send + Sync {
    fn report(&self, error: &ScanError);
}

impl<F> Diagnostics for F
where
    F: Fn(&ScanError) + Send + Sync,
{
    fn report(&self, error: &ScanError) {
        self(error)
    }
}

/// Default sink: one `tracing` warning per error.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, error: &ScanError) {
        match error.path() {
            Some(path) => tracing::warn!(path = %path.display(), error = %error, "skipping unreadable entry"),
            None => tracing::warn!(error = %error, "enumeration source error"),
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn report(&self, _error: &ScanError) {}
}
