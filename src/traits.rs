use crate::engine::WalkRequest;
use crate::entry::Entry;
use crate::error::ScanError;

/// A listing capability the enumerator walks.
///
/// The default is [`FsSource`](crate::FsSource), backed by the `ignore`
/// crate. Implement this to enumerate something else (a virtual filesystem,
/// a fixture in tests) through the same pipeline.
///
/// # Object Safety
///
/// `Source` is object-safe. The builder stores sources as `Box<dyn Source>`,
/// so `walk()` returns a boxed iterator rather than `impl Iterator`.
///
/// # Laziness
///
/// The returned iterator should do no more work than it needs to produce
/// the next entry. The enumerator pulls one entry per `next()` call and
/// stops pulling once it is cancelled.
///
/// # Contract
///
/// - Do not yield the root itself.
/// - Honour `request.recursion`: with `TopDirectoryOnly` yield only the
///   root's direct children.
/// - Yield `Err` for recoverable failures (unreadable subtree, symlink loop)
///   and keep going. The enumerator reports them and continues pulling.
///
/// # Example
///
/// ```rust
/// use pathscan::{Entry, EntryKind, ScanError, Source, WalkRequest};
///
/// struct Fixed(Vec<&'static str>);
///
/// impl Source for Fixed {
///     fn walk(&self, request: &WalkRequest) -> Box<dyn Iterator<Item = Result<Entry, ScanError>> + Send> {
///         let root = request.root.clone();
///         let entries = self.0.clone().into_iter().map(move |name| Ok(Entry {
///             path:  root.join(name),
///             name:  name.to_string(),
///             kind:  EntryKind::File,
///             depth: 1,
///         }));
///         Box::new(entries)
///     }
/// }
/// ```
pub trait Source: Send + Sync {
    /// Start a walk and return its (lazy) entry stream.
    fn walk(&self, request: &WalkRequest) -> Box<dyn Iterator<Item = Result<Entry, ScanError>> + Send>;
}

/// Decides whether an entry is part of the result.
///
/// The enumerator combines a pattern matcher and an entry-type matcher; both
/// must accept an entry for it to be yielded.
pub trait Matcher: Send + Sync {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> bool;
}
