use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters.
///
/// Path separators, spaces, `%`, `:` and all non-ASCII bytes are escaped.
pub const DATA_STRING: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `s` as a URI data string (uppercase hex, UTF-8 bytes).
pub fn encode_data_string(s: &str) -> String {
    utf8_percent_encode(s, DATA_STRING).to_string()
}

/// Per-path rewriting applied to every yielded result.
///
/// Steps run in a fixed order: root replacement, then encoding. Each call is
/// independent of every other.
#[derive(Debug, Clone)]
pub struct PathTransform {
    root:        String,
    replacement: Option<String>,
    url_encode:  bool,
}

impl PathTransform {
    pub fn new(root: impl Into<String>, replacement: Option<String>, url_encode: bool) -> Self {
        Self {
            root: root.into(),
            replacement,
            url_encode,
        }
    }

    /// True when `apply` returns its input unchanged.
    pub fn is_identity(&self) -> bool {
        self.replacement.is_none() && !self.url_encode
    }

    pub fn apply(&self, path: &str) -> String {
        let replaced = match &self.replacement {
            // An empty root would insert the replacement between every char.
            Some(r) if !self.root.is_empty() => path.replace(&self.root, r),
            _ => path.to_owned(),
        };

        if self.url_encode {
            encode_data_string(&replaced)
        } else {
            replaced
        }
    }
}
