//! Type definitions for compiled pointers.

use crate::util::is_valid_index;

/// The token that addresses the position one past the end of an array.
pub const APPEND_MARKER: &str = "-";

/// How a decoded key addresses a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// A non-negative integer literal, usable as an array index.
    Index(usize),
    /// The append marker `-`.
    Append,
    /// Anything else: only meaningful as an object key.
    Key,
}

impl StepKind {
    /// Classify a decoded key.
    ///
    /// # Example
    ///
    /// ```
    /// use widget_json_pointer::StepKind;
    ///
    /// assert_eq!(StepKind::classify("3"), StepKind::Index(3));
    /// assert_eq!(StepKind::classify("-"), StepKind::Append);
    /// assert_eq!(StepKind::classify("03"), StepKind::Key);
    /// assert_eq!(StepKind::classify("name"), StepKind::Key);
    /// ```
    pub fn classify(key: &str) -> Self {
        if key == APPEND_MARKER {
            return StepKind::Append;
        }
        if is_valid_index(key) {
            if let Ok(idx) = key.parse() {
                return StepKind::Index(idx);
            }
        }
        StepKind::Key
    }

    /// Whether a missing child addressed by this key should be an array.
    pub fn wants_array(self) -> bool {
        matches!(self, StepKind::Index(_) | StepKind::Append)
    }

    /// Resolve this step against an array of `len` elements.
    ///
    /// `Append` resolves to `len`; `Key` has no array position.
    pub fn array_position(self, len: usize) -> Option<usize> {
        match self {
            StepKind::Index(idx) => Some(idx),
            StepKind::Append => Some(len),
            StepKind::Key => None,
        }
    }
}

/// The raw input accepted by [`compile`](crate::compile).
///
/// Either a `/`-separated pointer string or an already segmented token
/// sequence (still escaped, root marker first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerSource<'a> {
    Str(&'a str),
    Tokens(Vec<String>),
}

impl<'a> From<&'a str> for PointerSource<'a> {
    fn from(s: &'a str) -> Self {
        PointerSource::Str(s)
    }
}

impl<'a> From<&'a String> for PointerSource<'a> {
    fn from(s: &'a String) -> Self {
        PointerSource::Str(s.as_str())
    }
}

impl From<Vec<String>> for PointerSource<'_> {
    fn from(tokens: Vec<String>) -> Self {
        PointerSource::Tokens(tokens)
    }
}

impl From<Vec<&str>> for PointerSource<'_> {
    fn from(tokens: Vec<&str>) -> Self {
        PointerSource::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for PointerSource<'_> {
    fn from(tokens: &[&str]) -> Self {
        PointerSource::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PointerSource<'_> {
    fn from(tokens: [&str; N]) -> Self {
        PointerSource::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}
