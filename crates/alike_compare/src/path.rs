//! Location of a divergence inside the compared graph.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

/// One step from a parent value to a child.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named member of a composite, or `key`/`value` of a map entry.
    Member(Box<str>),
    /// Position in a list or map.
    Index(usize),
}

impl Segment {
    pub fn member(name: &str) -> Self {
        Segment::Member(name.into())
    }
}

/// Most paths are shallow; eight segments stay inline.
pub(crate) type Segments = SmallVec<[Segment; 8]>;

/// Path from the root to a value, rendered like `Items[2].Name`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DivergencePath {
    root: Option<Arc<str>>,
    segments: Segments,
}

impl DivergencePath {
    pub(crate) fn new(root: Option<Arc<str>>, segments: Segments) -> Self {
        DivergencePath { root, segments }
    }

    /// Build a path from segments with no root label.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        DivergencePath {
            root: None,
            segments: segments.into_iter().collect(),
        }
    }

    /// Configured root label, if any.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Check if this names the compared values themselves.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for DivergencePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty = true;
        if let Some(root) = &self.root {
            f.write_str(root)?;
            empty = root.is_empty();
        }
        for segment in &self.segments {
            match segment {
                Segment::Member(name) if empty => f.write_str(name)?,
                Segment::Member(name) => write!(f, ".{name}")?,
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
            empty = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_members_and_indices() {
        let path = DivergencePath::from_segments([
            Segment::member("Items"),
            Segment::Index(2),
            Segment::member("Name"),
        ]);
        assert_eq!(path.to_string(), "Items[2].Name");
    }

    #[test]
    fn renders_leading_index() {
        let path = DivergencePath::from_segments([Segment::Index(0), Segment::member("key")]);
        assert_eq!(path.to_string(), "[0].key");
    }

    #[test]
    fn root_label_prefixes() {
        let path = DivergencePath::new(
            Some("Model".into()),
            [Segment::member("Items"), Segment::Index(1)].into_iter().collect(),
        );
        assert_eq!(path.to_string(), "Model.Items[1]");
        assert_eq!(path.root(), Some("Model"));
        assert!(!path.is_root());
    }

    #[test]
    fn empty_path_is_root() {
        let path = DivergencePath::default();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "");
    }
}
