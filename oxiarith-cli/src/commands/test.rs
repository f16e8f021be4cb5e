//! Test command implementation.

use crate::utils::{Report, open_input};
use oxiarith::ArithConfig;
use std::io;
use std::path::Path;

pub fn cmd_test(
    input: &Path,
    config: ArithConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = config.build_model()?;
    let (reader, len) = open_input(Some(input))?;

    if !json {
        println!("Testing {} ({} model)", input.display(), config.model);
    }

    match oxiarith::decompress(reader, io::sink(), model) {
        Ok(counts) => {
            let trailing = len.map_or(0, |len| len.saturating_sub(counts.1));
            if json {
                Report::new("test", counts, &config).print(true)?;
            } else {
                println!("  OK: {} bytes decoded from {} bytes", counts.0, counts.1);
                if trailing > 0 {
                    println!("  Note: {} trailing bytes after the stream", trailing);
                }
            }
            Ok(())
        }
        Err(e) => {
            if !json {
                println!("  FAILED: {}", e);
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("oxiarith_cli_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_json_report_on_clean_stream() {
        let config = ArithConfig::COMPACT;
        let path = temp_path("clean.oxa");
        fs::write(&path, oxiarith::compress_to_vec(b"hello world", config).unwrap()).unwrap();

        let result = cmd_test(&path, config, true);
        fs::remove_file(&path).ok();
        assert!(result.is_ok());
    }

    #[test]
    fn test_truncated_stream_fails() {
        let config = ArithConfig::COMPACT;
        let compressed = oxiarith::compress_to_vec(b"hello world", config).unwrap();
        let path = temp_path("truncated.oxa");
        fs::write(&path, &compressed[..compressed.len() - 1]).unwrap();

        let result = cmd_test(&path, config, true);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
