use crate::cancel::CancellationToken;
use crate::config::SearchConfig;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::engine::{Paths, WalkRequest};
use crate::error::ScanError;
use crate::matcher::{compile_pattern, TypeMatcher};
use crate::source::FsSource;
use crate::transform::PathTransform;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for wiring collaborators into an enumeration.
///
/// Created via [`pathscan::search()`](crate::search). Everything except the
/// configuration has a default: the filesystem walker, a `tracing`-backed
/// diagnostics sink, and a token nobody cancels.
///
/// # Example
///
/// ```rust,no_run
/// use pathscan::{CancellationToken, NoDiagnostics, SearchConfig};
///
/// let cancel = CancellationToken::new();
/// let paths = pathscan::search(SearchConfig::new("/srv").pattern("*.conf"))
///     .diagnostics(NoDiagnostics)
///     .cancel_with(cancel.clone())
///     .run()?;
///
/// for path in paths.ok_only() {
///     println!("{path}");
/// }
/// # Ok::<(), pathscan::ScanError>(())
/// ```
pub struct SearchBuilder {
    config:      SearchConfig,
    source:      Option<Box<dyn Source>>,
    diagnostics: Option<Box<dyn Diagnostics>>,
    cancel:      Option<CancellationToken>,
}

impl SearchBuilder {
    pub(crate) fn new(config: SearchConfig) -> Self {
        Self {
            config,
            source:      None,
            diagnostics: None,
            cancel:      None,
        }
    }

    // ── Collaborators ─────────────────────────────────────────────────────

    /// Replace the filesystem walker.
    ///
    /// Root validation still checks the real filesystem; the source only
    /// decides what is listed beneath it.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    /// Replace the sink that receives recoverable walk errors.
    pub fn diagnostics(mut self, d: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Some(Box::new(d));
        self
    }

    /// Stop producing paths once `token` is cancelled.
    pub fn cancel_with(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Validate the configuration and return the lazy path stream.
    ///
    /// # Errors
    ///
    /// - [`ScanError::RootNotFound`] if the root is not an existing directory.
    /// - [`ScanError::InvalidPattern`] if the search pattern does not compile.
    ///
    /// Both are checked here, before any entry is read. Failures during the
    /// walk itself are yielded by the returned [`Paths`].
    pub fn run(self) -> Result<Paths, ScanError> {
        let config = self.config;

        if !config.root.is_dir() {
            return Err(ScanError::RootNotFound(config.root));
        }

        let pattern = config.effective_pattern();
        let matcher = compile_pattern(pattern)?;

        tracing::debug!(
            root = %config.root.display(),
            pattern,
            recursion = ?config.recursion,
            entry_types = ?config.entry_types,
            "starting enumeration"
        );

        let source = self.source.unwrap_or_else(|| Box::new(FsSource));
        let walk = source.walk(&WalkRequest {
            root:      config.root.clone(),
            recursion: config.recursion,
        });

        let transform = PathTransform::new(
            config.root.to_string_lossy(),
            config.root_replacement,
            config.url_encode,
        );

        Ok(Paths::new(
            walk,
            matcher,
            TypeMatcher(config.entry_types),
            transform,
            self.cancel.unwrap_or_default(),
            self.diagnostics.unwrap_or_else(|| Box::new(LogDiagnostics)),
        ))
    }
}
