//! Command-line interface for md2blocks.

use clap::Parser;
use std::path::PathBuf;

/// md2blocks - Convert Markdown documents into Editor.js block JSON.
///
/// Reads markdown from files or stdin and writes the Editor.js save format
/// (`time`, `blocks`, `version`) as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "md2blocks",
    author = "mdblocks Contributors",
    version,
    about = "Convert Markdown documents into Editor.js block JSON",
    after_help = "Examples:\n  \
                  cat README.md | md2blocks\n  \
                  md2blocks document.md -o document.json\n  \
                  md2blocks --blocks-only --compact notes.md\n  \
                  md2blocks -c '[features]\nTables = false' input.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Write JSON to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON regardless of the config
    #[arg(long = "compact")]
    pub compact: bool,

    /// Emit only the block array, without the time/version envelope
    #[arg(long = "blocks-only")]
    pub blocks_only: bool,

    /// Seed for reproducible block identifiers
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use mdblocks_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
