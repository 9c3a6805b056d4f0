use std::{fmt::Display, io::Write};

use crate::{
    config::InspectConfig, literal, File, LineSequence, LineSource, ReadByLine, Result,
};

/// Everything printed about one line. All facts are derived up front, so rendering can't fail
/// halfway through because of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// Zero-based index of the line
    pub index: usize,
    /// Raw content, terminator included
    pub line: String,
    /// Length in characters
    pub length: usize,
    pub leading_whitespace: usize,
    /// Escaped literal form of `line`
    pub representation: String,
}

impl LineReport {
    pub fn new(index: usize, line: &str) -> Self {
        Self {
            index,
            line: line.to_owned(),
            length: line.chars().count(),
            leading_whitespace: leading_whitespace(line),
            representation: literal::escape(line),
        }
    }

    /// One-based line number
    #[inline]
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// Writes the four facts to `writer`, each terminated by a newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self)
    }
}

impl Display for LineReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Line {}: '{}'", self.position(), self.line)?;
        writeln!(f, "Length: {}", self.length)?;
        writeln!(f, "Leading whitespace: {}", self.leading_whitespace)?;
        write!(f, "Representation: {}", self.representation)
    }
}

/// Counts the whitespace characters at the start of `line`.
///
/// This is the difference in characters between `line` and `line` with leading whitespace
/// stripped, where whitespace also covers the information separators U+001C..=U+001F.
pub fn leading_whitespace(line: &str) -> usize {
    let stripped = line.trim_start_matches(is_whitespace);
    line.chars().count() - stripped.chars().count()
}

#[inline]
fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Reads `source` completely and reports on the line at `index`.
pub async fn inspect_source<S>(source: &mut S, index: usize) -> Result<LineReport>
where
    S: LineSource + ?Sized,
{
    let lines = source.read_lines().await?;
    report_line(&lines, index)
}

/// Reads the configured file and reports on the configured line.
pub async fn inspect(config: &InspectConfig) -> Result<LineReport> {
    tracing::debug!(
        path = %config.path.display(),
        index = config.index,
        "inspecting line"
    );

    let mut file = File::new(&config.path).with_decoder(config.decoder());
    inspect_source(&mut file, config.index).await
}

/// Reports on the line at `index` of in-memory text.
pub fn inspect_str(text: &str, index: usize) -> Result<LineReport> {
    report_line(&LineSequence::new(text), index)
}

fn report_line(lines: &LineSequence, index: usize) -> Result<LineReport> {
    let line = lines.read_line(index)?;
    Ok(LineReport::new(index, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoding::{Decoder, Encoding, NewlineMode},
        error::Error,
        Reader,
    };
    use async_std::io::Cursor;
    use pretty_assertions::assert_eq;
    use rand::{distributions::Uniform, Rng};

    #[test]
    fn test_scenario() {
        let report = inspect_str("a\nb\n  c\n", 2).unwrap();

        assert_eq!(report.position(), 3);
        assert_eq!(report.line, "  c\n");
        assert_eq!(report.length, 4);
        assert_eq!(report.leading_whitespace, 2);
        assert_eq!(report.representation, r"'  c\n'");

        assert_eq!(
            report.to_string(),
            "Line 3: '  c\n'\nLength: 4\nLeading whitespace: 2\nRepresentation: '  c\\n'"
        );
    }

    #[test]
    fn test_write_to() {
        let report = inspect_str("x", 0).unwrap();
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Line 1: 'x'\nLength: 1\nLeading whitespace: 0\nRepresentation: 'x'\n"
        );
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            inspect_str("a\nb\n", 2),
            Err(Error::OutOfRange { index: 2, total: 2 })
        ));
        assert!(matches!(
            inspect_str("", 0),
            Err(Error::OutOfRange { index: 0, total: 0 })
        ));
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace(""), 0);
        assert_eq!(leading_whitespace("x  "), 0);
        assert_eq!(leading_whitespace("\t  x"), 3);
        assert_eq!(leading_whitespace("   \n"), 4);
        assert_eq!(leading_whitespace("\u{3000}\u{a0}全角"), 2);
        assert_eq!(leading_whitespace("\u{1f}\u{1c}x"), 2);
        // Not whitespace
        assert_eq!(leading_whitespace("\u{feff}  x"), 0);
    }

    #[test]
    fn test_character_length() {
        let report = LineReport::new(0, "  俺はプログラミング\n");
        assert_eq!(report.length, 12);
        assert_eq!(report.leading_whitespace, 2);
    }

    #[test]
    fn test_random_invariants() {
        let mut rng = rand::thread_rng();
        let pick = Uniform::new_inclusive(0u8, 5);

        for _ in 0..100 {
            let len = rng.gen_range(0..30);
            let line: String = (0..len)
                .map(|_| match rng.sample(pick) {
                    0 => ' ',
                    1 => '\t',
                    2 => '\u{3000}',
                    3 => '\r',
                    4 => 'ö',
                    _ => 'x',
                })
                .collect();

            let report = LineReport::new(0, &line);
            assert!(report.leading_whitespace <= report.length);
            assert_eq!(report.length, line.chars().count());
            assert_eq!(literal::unescape(&report.representation).unwrap(), line);
        }
    }

    #[async_std::test]
    async fn test_inspect_source() {
        let mut reader = Reader::new(Cursor::new(b"a\r\n\t b\r\n".to_vec()));
        let report = inspect_source(&mut reader, 1).await.unwrap();
        assert_eq!(report.line, "\t b\n");
        assert_eq!(report.length, 4);
        assert_eq!(report.leading_whitespace, 2);
        assert_eq!(report.representation, r"'\t b\n'");

        let mut reader = Reader::new(Cursor::new(b"a\r\n\t b\r\n".to_vec()))
            .with_decoder(Decoder::new(Encoding::Utf8, NewlineMode::Preserve));
        let report = inspect_source(&mut reader, 1).await.unwrap();
        assert_eq!(report.length, 5);
        assert_eq!(report.representation, r"'\t b\r\n'");
    }

    #[async_std::test]
    async fn test_inspect_file() {
        let config = InspectConfig::new("./testfiles/simple", 2);
        let report = inspect(&config).await.unwrap();
        assert_eq!(report, inspect_str("a\nb\n  c\n", 2).unwrap());

        // Inspecting an unmodified file twice gives the same output
        let again = inspect(&config).await.unwrap();
        assert_eq!(report.to_string(), again.to_string());
    }

    #[async_std::test]
    async fn test_inspect_bom_and_crlf() {
        let report = inspect(&InspectConfig::new("./testfiles/bom", 0))
            .await
            .unwrap();
        assert_eq!(report.representation, r"'\ufeffhead\n'");

        let config = InspectConfig {
            encoding: Encoding::Utf8Sig,
            ..InspectConfig::new("./testfiles/bom", 0)
        };
        let report = inspect(&config).await.unwrap();
        assert_eq!(report.representation, r"'head\n'");

        let config = InspectConfig {
            newlines: NewlineMode::Universal,
            ..InspectConfig::new("./testfiles/crlf", 1)
        };
        let report = inspect(&config).await.unwrap();
        assert_eq!(report.representation, r"'\tsecond\n'");
        assert_eq!(report.leading_whitespace, 1);
    }

    #[async_std::test]
    async fn test_inspect_errors() {
        let missing = inspect(&InspectConfig::new("./testfiles/does_not_exist", 0)).await;
        assert!(matches!(missing, Err(Error::NotFound { .. })));

        let invalid = inspect(&InspectConfig::new("./testfiles/invalid_utf8", 0)).await;
        assert!(matches!(invalid, Err(Error::Decode { .. })));

        let past_end = inspect(&InspectConfig::new("./testfiles/simple", 3)).await;
        assert!(matches!(
            past_end,
            Err(Error::OutOfRange { index: 3, total: 3 })
        ));
    }
}
