use std::{fmt::Display, str::FromStr};

use crate::{error::Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Character encoding used to turn file bytes into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Strict UTF-8. A leading byte order mark is kept as U+FEFF.
    Utf8,
    /// UTF-8 with one optional leading byte order mark stripped.
    Utf8Sig,
    /// ISO-8859-1. Every byte maps to the code point of the same value, so decoding never fails.
    Latin1,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Sig => "utf-8-sig",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Decodes `bytes` into a `String`. Reuses the allocation for the UTF-8 variants.
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        match self {
            Encoding::Utf8 => self.decode_utf8(bytes),
            Encoding::Utf8Sig => {
                let mut bytes = bytes;
                if bytes.starts_with(UTF8_BOM) {
                    bytes.drain(..UTF8_BOM.len());
                }
                self.decode_utf8(bytes)
            }
            Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }

    fn decode_utf8(&self, bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| Error::Decode {
            encoding: *self,
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }
}

impl Default for Encoding {
    #[inline]
    fn default() -> Self {
        Encoding::Utf8
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-8-sig" | "utf8-sig" => Ok(Encoding::Utf8Sig),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            _ => Err(Error::UnknownEncoding(s.to_owned())),
        }
    }
}

/// How line terminators are treated before the text gets split into lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineMode {
    /// Keep the text byte-exact. Lines split on `\n` only, so a `\r` stays part of its line.
    Preserve,
    /// Translate `\r\n` and lone `\r` into `\n` first.
    Universal,
}

impl NewlineMode {
    pub fn apply(&self, text: String) -> String {
        match self {
            NewlineMode::Universal if text.contains('\r') => {
                text.replace("\r\n", "\n").replace('\r', "\n")
            }
            _ => text,
        }
    }
}

impl Default for NewlineMode {
    #[inline]
    fn default() -> Self {
        NewlineMode::Universal
    }
}

/// Bytes to text in one step: an encoding followed by a newline mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoder {
    pub encoding: Encoding,
    pub newlines: NewlineMode,
}

impl Decoder {
    #[inline]
    pub fn new(encoding: Encoding, newlines: NewlineMode) -> Self {
        Self { encoding, newlines }
    }

    pub fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        let text = self.encoding.decode(bytes)?;
        Ok(self.newlines.apply(text))
    }
}
