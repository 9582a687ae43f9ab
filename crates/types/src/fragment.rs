//! The `Fragment` newtype for rendered, embed-safe output.

use crate::escape::Escape;
use std::fmt;
use std::sync::Arc;

/// A piece of already-rendered output.
///
/// A fragment is never escaped again when it is embedded into another
/// template, either as a context value or through `yield`. There is no
/// `From<&str>`: raw text must go through [`Fragment::escape`] or a render,
/// and literal markup the caller vouches for through [`Fragment::from_trusted`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Fragment(Arc<str>);

impl Fragment {
    /// The empty fragment.
    pub fn empty() -> Self {
        Self(Arc::from(""))
    }

    /// Wraps markup the caller knows to be safe, such as a string literal
    /// written in source code or the output of another renderer.
    pub fn from_trusted(markup: impl Into<Arc<str>>) -> Self {
        Self(markup.into())
    }

    /// Escapes plain text for HTML and wraps the result.
    pub fn escape(text: &str) -> Self {
        Self(Escape::Html.apply(text).into())
    }

    /// Returns the rendered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0.to_string()
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        crate::join::flatten(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_creation() {
        let trusted = Fragment::from_trusted("<b>bold</b>");
        assert_eq!(trusted.as_str(), "<b>bold</b>");
        assert_eq!(trusted, "<b>bold</b>");
        assert_eq!(trusted.len(), 11);
    }

    #[test]
    fn test_escape_constructor() {
        let escaped = Fragment::escape("<b>");
        assert_eq!(escaped, "&lt;b&gt;");
    }

    #[test]
    fn test_empty_and_default_agree() {
        assert!(Fragment::empty().is_empty());
        assert_eq!(Fragment::default(), Fragment::empty());
    }

    #[test]
    fn test_collect_concatenates() {
        let all: Fragment = ["<p>", "x", "</p>"]
            .into_iter()
            .map(Fragment::from_trusted)
            .collect();
        assert_eq!(all, "<p>x</p>");
    }

    #[test]
    fn test_fragments_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Fragment>();
    }
}
