use std::path::{Path, PathBuf};

use crate::encoding::{Decoder, Encoding, NewlineMode};

/// File inspected when nothing else is given
pub const DEFAULT_PATH: &str = "components/Layout.tsx";

/// Zero-based index of the line inspected when nothing else is given (line 314)
pub const DEFAULT_INDEX: usize = 313;

/// What to inspect and how to decode it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    pub path: PathBuf,
    /// Zero-based line index
    pub index: usize,
    pub encoding: Encoding,
    pub newlines: NewlineMode,
}

impl InspectConfig {
    /// Inspect line `index` of `path` with the default decoding.
    pub fn new<P: AsRef<Path>>(path: P, index: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index,
            ..Self::default()
        }
    }

    #[inline]
    pub fn decoder(&self) -> Decoder {
        Decoder::new(self.encoding, self.newlines)
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            index: DEFAULT_INDEX,
            encoding: Encoding::Utf8,
            newlines: NewlineMode::Universal,
        }
    }
}
