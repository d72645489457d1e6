//! Slash-delimited paths into the remote hierarchical store
//!
//! Every remote operation is addressed by a `TreePath`. Segments are
//! validated at construction so a malformed record id or partition segment
//! can never silently corrupt the tree layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a path from untrusted segments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path segment was empty or whitespace-only
    #[error("path segment cannot be empty")]
    EmptySegment,

    /// A path segment contained a path separator
    #[error("path segment cannot contain '/': {segment}")]
    SeparatorInSegment { segment: String },
}

/// A validated path into the remote hierarchical key-value tree
///
/// Paths are ordered lists of non-empty segments rendered slash-delimited,
/// e.g. `bills/2024/03/bill-B1001`. The root path has no segments and
/// addresses the whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    /// The root path (whole tree)
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path from an ordered list of segments
    ///
    /// # Errors
    ///
    /// Returns `PathError` if any segment is empty or contains `/`.
    pub fn new<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Self::root();
        for segment in segments {
            path = path.child(segment)?;
        }
        Ok(path)
    }

    /// Extend this path with one more segment
    ///
    /// # Errors
    ///
    /// Returns `PathError` if the segment is empty or contains `/`.
    pub fn child(mut self, segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        if segment.trim().is_empty() {
            return Err(PathError::EmptySegment);
        }
        if segment.contains('/') {
            return Err(PathError::SeparatorInSegment { segment });
        }
        self.segments.push(segment);
        Ok(self)
    }

    /// The ordered segments of this path
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path_renders_slash_delimited() {
        let path = TreePath::new(["bills", "2024", "03", "bill-B1001"]).unwrap();
        assert_eq!(path.to_string(), "bills/2024/03/bill-B1001");
        assert_eq!(path.depth(), 4);
        assert!(!path.is_root());
    }

    #[test]
    fn test_root_path_is_empty() {
        let root = TreePath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn test_child_appends_segment() {
        let path = TreePath::root().child("flats").unwrap().child("A-101").unwrap();
        assert_eq!(path.segments(), &["flats".to_string(), "A-101".to_string()]);
    }

    #[test]
    fn test_empty_segment_rejected() {
        assert_eq!(TreePath::root().child(""), Err(PathError::EmptySegment));
        assert_eq!(TreePath::root().child("   "), Err(PathError::EmptySegment));
    }

    #[test]
    fn test_separator_in_segment_rejected() {
        let result = TreePath::root().child("bills/2024");
        assert!(matches!(
            result,
            Err(PathError::SeparatorInSegment { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let path = TreePath::new(["banks", "bank-hdfc"]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: TreePath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
