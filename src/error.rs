use std::path::PathBuf;

use crate::encoding::Encoding;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path does not resolve to a file
    #[error("no such file: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Opening or reading the file failed for any reason other than it missing
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a source without a path failed
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    /// Bytes are not valid under the requested encoding. `valid_up_to` is the byte offset of the
    /// first invalid sequence.
    #[error("file is not valid {encoding} (invalid byte sequence at offset {valid_up_to})")]
    Decode {
        encoding: Encoding,
        valid_up_to: usize,
    },

    /// On request for a line past the end of the file
    #[error("line index {index} out of range (file has {total} lines)")]
    OutOfRange { index: usize, total: usize },

    #[error("unknown encoding `{0}`")]
    UnknownEncoding(String),

    #[error("malformed literal at character {position}: {reason}")]
    MalformedLiteral {
        position: usize,
        reason: &'static str,
    },
}

impl Error {
    /// Maps a failed open of `path` to `NotFound` or `Io`.
    pub(crate) fn from_open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_open() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::from_open(PathBuf::from("a/b"), missing);
        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.to_string(), "no such file: a/b");

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = Error::from_open(PathBuf::from("a/b"), denied);
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Error::OutOfRange { index: 5, total: 3 };
        assert_eq!(
            err.to_string(),
            "line index 5 out of range (file has 3 lines)"
        );
    }
}
