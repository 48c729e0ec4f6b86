use std::{fmt, ops::Deref};

use faststr::FastStr;

/// Segment is one step of a chained access.
///
/// A `Key` names an object field and an `Index` names an array element, but the container being
/// accessed has the final word: an `Index` against an object reads the key spelled as its decimal
/// text, and a `Key` made of ASCII digits against an array reads that element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Key(FastStr),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Path is a list of segments applied left to right, such as `.nested.array[2].c`.
///
/// Use `path!["nested", "array", 2, "c"]` to build one. It is displayed rooted at `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(pub(crate) Vec<Segment>);

impl Path {
    /// Create the empty path, which addresses the root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<Segment>>(&mut self, segment: S) {
        self.0.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    /// Returns the segments of the path.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Segment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Keys that would blur the `.a[0]` syntax are written quoted, as in `$["a.b"]`.
fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|c| {
            matches!(c, '.' | '[' | ']' | '"' | '\\') || c.is_whitespace() || c.is_control()
        })
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Key(key) if is_plain_key(key) => write!(f, ".{key}")?,
                Segment::Key(key) => write!(f, "[{:?}]", key.as_str())?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! path {
    () => (
        $crate::Path::new()
    );
    ($($x:expr),+ $(,)?) => (
        $crate::Path::from(<[_]>::into_vec(
            std::boxed::Box::new([$($crate::Segment::from($x)),+])
        ))
    );
}
