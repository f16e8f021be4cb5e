//! Compress and decompress commands.

use crate::utils::{Report, create_progress_bar, open_input, open_output};
use oxiarith::ArithConfig;
use std::path::Path;

pub fn cmd_compress(
    input: Option<&Path>,
    output: Option<&Path>,
    config: ArithConfig,
    json: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = config.build_model()?;
    let (reader, len) = open_input(input)?;
    let writer = open_output(output)?;

    log::info!(
        "compressing with {} model, {}-bit frequencies, {}-bit codes",
        config.model,
        config.freq_bits,
        config.code_bits
    );

    let pb = create_progress_bar(len.unwrap_or(0), progress && len.is_some());
    let counts = oxiarith::compress(pb.wrap_read(reader), writer, model)?;
    pb.finish_and_clear();

    Report::new("compress", counts, &config).print(json)?;
    Ok(())
}

pub fn cmd_decompress(
    input: Option<&Path>,
    output: Option<&Path>,
    config: ArithConfig,
    json: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = config.build_model()?;
    let (reader, len) = open_input(input)?;
    let writer = open_output(output)?;

    log::info!(
        "decompressing with {} model, {}-bit frequencies, {}-bit codes",
        config.model,
        config.freq_bits,
        config.code_bits
    );

    let pb = create_progress_bar(len.unwrap_or(0), progress && len.is_some());
    let counts = oxiarith::decompress(pb.wrap_read(reader), writer, model)?;
    pb.finish_and_clear();

    let trailing = len.map_or(0, |len| len.saturating_sub(counts.1));
    if trailing > 0 {
        log::warn!("ignored {} trailing bytes after the stream", trailing);
    }

    Report::new("decompress", counts, &config).print(json)?;
    Ok(())
}
