use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use line_inspector::{
    config::{DEFAULT_INDEX, DEFAULT_PATH},
    encoding::{Encoding, NewlineMode},
    InspectConfig,
};
use tracing_subscriber::EnvFilter;

/// Print the content, length, leading whitespace and escaped form of one line of a text file
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// File to inspect
    #[arg(default_value = DEFAULT_PATH)]
    path: PathBuf,
    /// Zero-based index of the line to inspect
    #[arg(short, long, default_value_t = DEFAULT_INDEX)]
    index: usize,
    /// Encoding of the file (utf-8, utf-8-sig or latin-1)
    #[arg(short, long, default_value_t = Encoding::Utf8)]
    encoding: Encoding,
    /// Keep `\r\n` and lone `\r` as they are instead of reading them as `\n`
    #[arg(long)]
    preserve_newlines: bool,
}

impl From<Cli> for InspectConfig {
    fn from(cli: Cli) -> Self {
        let newlines = if cli.preserve_newlines {
            NewlineMode::Preserve
        } else {
            NewlineMode::Universal
        };

        InspectConfig {
            path: cli.path,
            index: cli.index,
            encoding: cli.encoding,
            newlines,
        }
    }
}

#[async_std::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = InspectConfig::from(Cli::parse());

    // Nothing is printed until the whole report exists
    let report = line_inspector::inspect(&config)
        .await
        .with_context(|| format!("failed to inspect {}", config.path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out)
        .context("failed to write report")?;
    out.flush()?;

    Ok(())
}
