use std::ops::Range;

use itertools::Itertools;

use crate::{error::Error, Result};

/// Contains an in-memory line-index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Index {
    /// Maps line to the byte offset it starts at. The index within the Vec represents the
    /// line-index in the text
    inner: Vec<usize>,
    /// The len in bytes of the indexed text
    len_bytes: usize,
}

impl Index {
    /// Create a new Index from known line start offsets over a text of `len_bytes` bytes.
    /// The offsets won't be validated.
    pub fn new(line: Vec<usize>, len_bytes: usize) -> Index {
        Self {
            inner: line,
            len_bytes,
        }
    }

    /// Build a new index for `text`. A line ends right after each `\n`. A trailing `\n` does not
    /// start another (empty) line, and empty text has no lines at all.
    pub fn build(text: &str) -> Self {
        let len_bytes = text.len();
        if len_bytes == 0 {
            return Self::default();
        }

        let inner: Vec<usize> = std::iter::once(0)
            .chain(
                text.bytes()
                    .positions(|b| b == b'\n')
                    .map(|pos| pos + 1)
                    // Don't push an offset for the end of the text
                    .filter(|start| *start < len_bytes),
            )
            .collect();

        tracing::trace!(lines = inner.len(), len_bytes, "built line index");

        Self { inner, len_bytes }
    }

    /// Get the start offset of `line`
    #[inline]
    pub fn get(&self, line: usize) -> Result<usize> {
        self.inner.get(line).copied().ok_or(Error::OutOfRange {
            index: line,
            total: self.len(),
        })
    }

    /// Returns the byte range of `line` including its terminator
    pub fn range(&self, line: usize) -> Result<Range<usize>> {
        let start = self.get(line)?;
        let end = self.inner.get(line + 1).copied().unwrap_or(self.len_bytes);
        Ok(start..end)
    }

    /// Returns the amount of lines in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Get the len of the indexed text in bytes
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.len_bytes
    }

    /// Returns `true` if the index holds no lines
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
