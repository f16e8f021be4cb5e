//! OxiArith CLI - adaptive arithmetic coding from the command line
//!
//! Compresses and decompresses files or stdin/stdout streams with the
//! OxiArith codec.

mod commands;
mod utils;

use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::{cmd_compress, cmd_decompress, cmd_info, cmd_test};
use oxiarith::{ArithConfig, ModelKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxiarith")]
#[command(author, version, about = "Pure Rust adaptive arithmetic coder")]
#[command(long_about = "
OxiArith compresses byte streams with an adaptive arithmetic coder.
Streams carry no header: decompress with the same widths used to compress.

Examples:
  oxiarith compress data.bin -o data.oxa
  oxiarith decompress data.oxa -o data.bin
  cat data.bin | oxiarith c > data.oxa
  oxiarith compress --preset compact --model linear data.bin -o data.oxa
  oxiarith test data.oxa
  oxiarith info --freq-bits 22 --code-bits 24
")]
struct Cli {
    /// Log progress details (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file or stdin
    #[command(alias = "c")]
    Compress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        codec: CodecArgs,

        /// Print the report as JSON
        #[arg(short, long)]
        json: bool,

        /// Show progress bar (file input only)
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress a file or stdin
    #[command(alias = "d")]
    Decompress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        codec: CodecArgs,

        /// Print the report as JSON
        #[arg(short, long)]
        json: bool,

        /// Show progress bar (file input only)
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Check that a compressed file decodes cleanly
    #[command(alias = "t")]
    Test {
        /// Compressed file
        input: PathBuf,

        #[command(flatten)]
        codec: CodecArgs,

        /// Print the report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the parameters derived from a configuration
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        codec: CodecArgs,

        /// Print the parameters as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// Codec selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct CodecArgs {
    /// Width presets (overridden by --freq-bits/--code-bits)
    #[arg(long, value_enum, default_value = "precise")]
    preset: Preset,

    /// Frequency width in bits
    #[arg(long)]
    freq_bits: Option<u32>,

    /// Code range width in bits
    #[arg(long)]
    code_bits: Option<u32>,

    /// Frequency model
    #[arg(short, long, value_enum, default_value = "tree")]
    model: ModelArg,
}

impl CodecArgs {
    fn config(&self) -> ArithConfig {
        let mut config = match self.preset {
            Preset::Compact => ArithConfig::COMPACT,
            Preset::Balanced => ArithConfig::BALANCED,
            Preset::Precise => ArithConfig::PRECISE,
        };
        if let Some(freq_bits) = self.freq_bits {
            config.freq_bits = freq_bits;
        }
        if let Some(code_bits) = self.code_bits {
            config.code_bits = code_bits;
        }
        config.with_model(match self.model {
            ModelArg::Linear => ModelKind::Linear,
            ModelArg::Tree => ModelKind::Tree,
        })
    }
}

/// Width preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// 14-bit frequencies, 16-bit codes
    Compact,
    /// 22-bit frequencies, 24-bit codes
    Balanced,
    /// 30-bit frequencies, 32-bit codes
    Precise,
}

/// Frequency model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelArg {
    /// Linear scan
    Linear,
    /// Fenwick tree
    Tree,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
            json,
            progress,
        } => cmd_compress(
            input.as_deref(),
            output.as_deref(),
            codec.config(),
            json,
            progress,
        ),
        Commands::Decompress {
            input,
            output,
            codec,
            json,
            progress,
        } => cmd_decompress(
            input.as_deref(),
            output.as_deref(),
            codec.config(),
            json,
            progress,
        ),
        Commands::Test { input, codec, json } => cmd_test(&input, codec.config(), json),
        Commands::Info { codec, json } => cmd_info(codec.config(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_codec_args_override_preset() {
        let cli = Cli::parse_from([
            "oxiarith",
            "compress",
            "--preset",
            "compact",
            "--freq-bits",
            "12",
            "--model",
            "linear",
        ]);
        let Commands::Compress { codec, .. } = cli.command else {
            panic!("expected compress");
        };
        let config = codec.config();
        assert_eq!(config.freq_bits, 12);
        assert_eq!(config.code_bits, 16);
        assert_eq!(config.model, ModelKind::Linear);
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["oxiarith", "d", "in.oxa", "-o", "out.bin"]);
        assert!(matches!(cli.command, Commands::Decompress { .. }));
        let cli = Cli::parse_from(["oxiarith", "-v", "info"]);
        assert!(cli.verbose);
    }
}
