//!Inspect a single line of a text file: its content, length, leading whitespace and an escaped
//!literal form

/// Fixed defaults for what gets inspected
pub mod config;
/// Bytes to text
pub mod encoding;
pub mod error;
/// Async reads of paths and readers into a `LineSequence`
pub mod file;
/// The line index over decoded text
pub mod index;
/// The line report and the inspection pipeline
pub mod inspect;
pub mod literal;
/// Decoded text split into lines
pub mod string;

pub use config::InspectConfig;
pub use file::{File, Reader};
pub use inspect::{inspect, inspect_source, inspect_str, leading_whitespace, LineReport};
pub use string::LineSequence;

use async_trait::async_trait;
use index::Index;

pub type Result<T> = std::result::Result<T, error::Error>;

pub trait Indexable {
    /// Returns a reference to the line index.
    fn get_index(&self) -> &Index;

    /// Returns the total amount of lines.
    #[inline]
    fn total_lines(&self) -> usize {
        self.get_index().len()
    }
}

/// A trait defining behavior for reading certain lines directly from indexed text.
pub trait ReadByLine: Indexable {
    /// Returns the full text the index was built over
    fn as_text(&self) -> &str;

    /// Reads the given line, including its terminator if it has one
    fn read_line(&self, line: usize) -> Result<&str> {
        let range = self.get_index().range(line)?;
        Ok(&self.as_text()[range])
    }
}

/// Anything that can be read completely and split into lines.
#[async_trait]
pub trait LineSource {
    /// Reads the whole source. Any underlying handle is released before this returns.
    async fn read_lines(&mut self) -> Result<LineSequence>;
}
