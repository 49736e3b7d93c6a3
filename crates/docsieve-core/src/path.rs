//! # Document Paths
//!
//! A [`Path`] is the ordered list of segments leading from the document root
//! to a value: field names for map entries, decimal indices for sequence
//! elements. A field `foo` inside the element at index `2` of field `bar` lives
//! at `bar.2.foo`.
//!
//! Paths are never mutated in place. Every nesting level derives a new path
//! with [`Path::append`], so sibling fields that share a base path cannot alias
//! each other's segments.

use std::fmt;

/// Immutable, ordered sequence of path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<String>);

impl Path {
    /// The empty path, used for the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Return a new path with `segment` appended. `self` is left untouched.
    pub fn append(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment.into());
        Self(segments)
    }

    /// Return a new path with the decimal `index` appended.
    pub fn append_index(&self, index: usize) -> Self {
        self.append(index.to_string())
    }

    /// Dotted key identifying this path in a [`MessageRecord`](crate::MessageRecord).
    pub fn key(&self) -> String {
        self.0.join(".")
    }

    /// The final segment, or `""` for the root path.
    pub fn last(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or("")
    }

    /// All segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.key())
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The key of an appended path is the base key plus one dotted segment.
        #[test]
        fn append_extends_key(
            segments in prop::collection::vec("[a-z0-9_]{1,8}", 0..6),
            extra in "[a-z0-9_]{1,8}",
        ) {
            let base = Path::new(segments.clone());
            let extended = base.append(extra.clone());

            prop_assert_eq!(extended.last(), extra.as_str());
            prop_assert_eq!(extended.len(), base.len() + 1);
            if base.is_empty() {
                prop_assert_eq!(extended.key(), extra);
            } else {
                prop_assert_eq!(extended.key(), format!("{}.{}", base.key(), extra));
            }
            prop_assert_eq!(base.segments(), segments.as_slice());
        }
    }
}
