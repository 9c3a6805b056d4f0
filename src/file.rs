use std::path::{Path, PathBuf};

use async_std::{
    fs,
    io::{prelude::*, Read},
};
use async_trait::async_trait;

use crate::{
    encoding::{Decoder, Encoding, NewlineMode},
    error::Error,
    Indexable, LineSequence, LineSource, Result,
};

/// A path to a text file which implements `LineSource`. The file is only opened while
/// `read_lines` runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    decoder: Decoder,
}

impl File {
    /// Create a new `File` decoded as strict UTF-8 with `\r\n` and `\r` read as `\n`.
    pub fn new<P: AsRef<Path>>(path: P) -> File {
        Self {
            path: path.as_ref().to_path_buf(),
            decoder: Decoder::default(),
        }
    }

    #[inline]
    pub fn with_decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = decoder;
        self
    }

    #[inline]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.decoder.encoding = encoding;
        self
    }

    #[inline]
    pub fn with_newlines(mut self, newlines: NewlineMode) -> Self {
        self.decoder.newlines = newlines;
        self
    }

    /// Open and read the file at `path` using the default decoder.
    pub async fn open_raw<P: AsRef<Path>>(path: P) -> Result<LineSequence> {
        File::new(path).read_lines().await
    }
}

#[async_trait]
impl LineSource for File {
    async fn read_lines(&mut self) -> Result<LineSequence> {
        let async_path = async_std::path::PathBuf::from(self.path.clone());

        let lines = {
            let handle = fs::File::open(&async_path)
                .await
                .map_err(|e| Error::from_open(self.path.clone(), e))?;
            Reader::new(handle)
                .with_decoder(self.decoder)
                .read_lines()
                .await
                .map_err(|e| match e {
                    Error::Read(source) => Error::Io {
                        path: self.path.clone(),
                        source,
                    },
                    other => other,
                })?
        };

        tracing::debug!(
            path = %self.path.display(),
            lines = lines.total_lines(),
            encoding = %self.decoder.encoding,
            "read file"
        );

        Ok(lines)
    }
}

/// A wrapper around any async reader which implements `LineSource`
#[derive(Debug)]
pub struct Reader<R: Read + Unpin + Send> {
    inner: R,
    decoder: Decoder,
}

impl<R: Read + Unpin + Send> Reader<R> {
    #[inline]
    pub fn new(inner: R) -> Reader<R> {
        Self {
            inner,
            decoder: Decoder::default(),
        }
    }

    #[inline]
    pub fn with_decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = decoder;
        self
    }
}

#[async_trait]
impl<R: Read + Unpin + Send> LineSource for Reader<R> {
    async fn read_lines(&mut self) -> Result<LineSequence> {
        let mut buf = Vec::new();
        self.inner.read_to_end(&mut buf).await?;
        Ok(LineSequence::new(self.decoder.decode(buf)?))
    }
}
