use faststr::FastStr;

use crate::{Path, Segment};

impl From<usize> for Segment {
    fn from(value: usize) -> Self {
        Segment::Index(value)
    }
}

impl From<&usize> for Segment {
    fn from(value: &usize) -> Self {
        Segment::Index(*value)
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::Key(FastStr::new(value))
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::Key(FastStr::from(value))
    }
}

impl From<&String> for Segment {
    fn from(value: &String) -> Self {
        Segment::Key(FastStr::new(value))
    }
}

impl From<FastStr> for Segment {
    fn from(value: FastStr) -> Self {
        Segment::Key(value)
    }
}

impl From<&FastStr> for Segment {
    fn from(value: &FastStr) -> Self {
        Segment::Key(value.clone())
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path(segments)
    }
}

impl<S: Into<Segment>> FromIterator<S> for Path {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Path(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Segment>> Extend<S> for Path {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
