//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxiarith::ArithConfig;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Open `path` for buffered reading, or stdin when `None`.
///
/// Also returns the file length when known.
pub fn open_input(path: Option<&Path>) -> io::Result<(Box<dyn Read>, Option<u64>)> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            let len = file.metadata()?.len();
            Ok((Box::new(BufReader::new(file)), Some(len)))
        }
        None => Ok((Box::new(BufReader::new(io::stdin().lock())), None)),
    }
}

/// Create `path` for buffered writing, or stdout when `None`.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Compressed size as a percentage of the decompressed size.
pub fn ratio_percent(decompressed: u64, compressed: u64) -> f64 {
    if decompressed == 0 {
        return 0.0;
    }
    compressed as f64 / decompressed as f64 * 100.0
}

/// Machine-readable summary of one run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub operation: &'static str,
    pub decompressed_bytes: u64,
    pub compressed_bytes: u64,
    pub ratio_percent: f64,
    pub model: &'static str,
    pub freq_bits: u32,
    pub code_bits: u32,
}

impl Report {
    pub fn new(
        operation: &'static str,
        (decompressed, compressed): (u64, u64),
        config: &ArithConfig,
    ) -> Self {
        Self {
            operation,
            decompressed_bytes: decompressed,
            compressed_bytes: compressed,
            ratio_percent: ratio_percent(decompressed, compressed),
            model: config.model.name(),
            freq_bits: config.freq_bits,
            code_bits: config.code_bits,
        }
    }

    /// Print the report to stderr, as text or JSON.
    ///
    /// Stdout may carry the coded data, so reports never go there.
    pub fn print(&self, json: bool) -> io::Result<()> {
        self.write_to(io::stderr().lock(), json)
    }

    /// Write the report to `out`, as text or JSON.
    pub fn write_to<W: Write>(&self, mut out: W, json: bool) -> io::Result<()> {
        if json {
            writeln!(out, "{}", serde_json::to_string_pretty(self)?)
        } else {
            let (verb, preposition) = match self.operation {
                "compress" => ("Compressed", "into"),
                _ => ("Decompressed", "from"),
            };
            writeln!(
                out,
                "{} {} bytes {} {} bytes, compression ratio: {:.2}%",
                verb,
                self.decompressed_bytes,
                preposition,
                self.compressed_bytes,
                self.ratio_percent
            )
        }
    }
}
