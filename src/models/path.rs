//! Paths inside the virtual filesystem.

use std::fmt;

use crate::config::ROOT_MARKER;

/// A location in the virtual filesystem, as segments below the root.
///
/// The root itself is the empty segment list and renders as `~`;
/// `["about"]` renders as `~/about`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The filesystem root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append one segment verbatim.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Drop the last segment. The root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ROOT_MARKER)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(VirtualPath::root().to_string(), "~");
        assert_eq!(VirtualPath::root().join("about").to_string(), "~/about");
        assert_eq!(
            VirtualPath::from_segments(["about", "deep"]).to_string(),
            "~/about/deep"
        );
    }

    #[test]
    fn test_parent() {
        let path = VirtualPath::from_segments(["a", "b"]);
        assert_eq!(path.parent(), VirtualPath::from_segments(["a"]));
        assert_eq!(path.parent().parent(), VirtualPath::root());
        assert_eq!(VirtualPath::root().parent(), VirtualPath::root());
    }

    #[test]
    fn test_join_keeps_segment_verbatim() {
        let path = VirtualPath::root().join("my  notes");
        assert_eq!(path.segments(), &["my  notes".to_string()]);
        assert!(!path.is_root());
    }
}
