//! Info command implementation.

use oxiarith::ArithConfig;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ParametersJson {
    model: &'static str,
    symbol_bits: u32,
    symbol_count: usize,
    symbol_eof: usize,
    freq_bits: u32,
    freq_max: u64,
    code_bits: u32,
    code_max: u64,
    code_one_fourth: u64,
    code_half: u64,
    code_three_fourths: u64,
}

pub fn cmd_info(config: ArithConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let p = config.parameters()?;

    if json {
        let info = ParametersJson {
            model: config.model.name(),
            symbol_bits: p.symbol_bits,
            symbol_count: p.symbol_count,
            symbol_eof: p.symbol_eof,
            freq_bits: p.freq_bits,
            freq_max: p.freq_max,
            code_bits: p.code_bits,
            code_max: p.code_max,
            code_one_fourth: p.code_one_fourth,
            code_half: p.code_half,
            code_three_fourths: p.code_three_fourths,
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Model:        {}", config.model);
    println!(
        "Symbols:      {} bits, {} symbols (EOF = {})",
        p.symbol_bits, p.symbol_count, p.symbol_eof
    );
    println!("Frequencies:  {} bits, max total {}", p.freq_bits, p.freq_max);
    println!("Code range:   {} bits, [0, {:#x}]", p.code_bits, p.code_max);
    println!(
        "Quarters:     {:#x} / {:#x} / {:#x}",
        p.code_one_fourth, p.code_half, p.code_three_fourths
    );
    Ok(())
}
