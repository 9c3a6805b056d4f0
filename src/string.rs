use crate::{index::Index, Indexable, ReadByLine};

/// Decoded text together with its line index. Every line keeps its terminator, so concatenating
/// all lines gives back the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence {
    data: String,
    index: Index,
}

impl LineSequence {
    /// Create a new `LineSequence` from text and builds an index.
    pub fn new<S: Into<String>>(s: S) -> LineSequence {
        let data = s.into();
        let index = Index::build(&data);
        Self { data, index }
    }

    /// Iterate over all lines, terminators included
    #[inline]
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            seq: self,
            pos: 0,
        }
    }

    /// Returns the underlying text
    #[inline]
    pub fn into_inner(self) -> String {
        self.data
    }
}

impl From<String> for LineSequence {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for LineSequence {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Indexable for LineSequence {
    #[inline]
    fn get_index(&self) -> &Index {
        &self.index
    }
}

impl ReadByLine for LineSequence {
    #[inline]
    fn as_text(&self) -> &str {
        &self.data
    }
}

/// Iterator over the lines of a `LineSequence`
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    seq: &'a LineSequence,
    pos: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let line = self.seq.read_line(self.pos).ok()?;
        self.pos += 1;
        Some(line)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.seq.total_lines().saturating_sub(self.pos);
        (left, Some(left))
    }
}

impl<'a> ExactSizeIterator for Lines<'a> {}
