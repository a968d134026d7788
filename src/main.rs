//! md2blocks - Convert Markdown documents into Editor.js block JSON.
//!
//! This binary provides the CLI interface to the mdblocks library,
//! reading markdown from files or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};
use std::path::Path;

use mdblocks_config::Config;
use mdblocks_core::{
    to_json, Block, Document, IdGenerator, MdBlocksError, ParseOptions, RandomIds, Result,
    SeededIds,
};
use mdblocks_parser::Parser as MarkdownParser;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("md2blocks v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(level_filter(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let options = config.parse_options();
    debug!("Parse options: {:?}", options);

    let inputs = read_inputs(cli)?;
    let mut documents = Vec::with_capacity(inputs.len());
    for (index, (name, content)) in inputs.iter().enumerate() {
        info!("Converting {}", name);
        let blocks = convert_input(content, options, &config, cli.seed, index)?;
        debug!("{}: {} blocks", name, blocks.len());
        documents.push(blocks);
    }

    let pretty = config.output.pretty && !cli.compact;
    let json = render(documents, cli.blocks_only, &config.output.version, pretty)?;

    match cli.output {
        Some(ref path) => {
            std::fs::write(path, json + "\n").map_err(|e| with_path(e, path))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Load configuration with an optional override.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    if cli.config.is_some() {
        debug!("Merged config override");
    }
    Ok(config)
}

/// Read every input as a (name, content) pair.
fn read_inputs(cli: &Cli) -> Result<Vec<(String, String)>> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(vec![("<stdin>".to_string(), content)]);
    }

    cli.files
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path).map_err(|e| with_path(e, path))?;
            Ok((path.display().to_string(), content))
        })
        .collect()
}

fn with_path(err: io::Error, path: &Path) -> MdBlocksError {
    MdBlocksError::Io(io::Error::new(
        err.kind(),
        format!("{}: {}", path.display(), err),
    ))
}

/// Convert one input, choosing the identifier source from the config and seed.
fn convert_input(
    content: &str,
    options: ParseOptions,
    config: &Config,
    seed: Option<u64>,
    index: usize,
) -> Result<Vec<Block>> {
    let length = config.output.id_length;
    match seed {
        // each input gets its own seed so identifiers differ between files
        Some(seed) => convert_with(
            content,
            options,
            SeededIds::with_length(seed.wrapping_add(index as u64), length),
        ),
        None => convert_with(content, options, RandomIds::new(length)),
    }
}

fn convert_with<G: IdGenerator>(content: &str, options: ParseOptions, ids: G) -> Result<Vec<Block>> {
    MarkdownParser::with_ids(options, ids).parse_document(content)
}

/// Serialize converted inputs.
///
/// A single input renders as one object (or block array); several inputs
/// render as a JSON array of those.
fn render(
    documents: Vec<Vec<Block>>,
    blocks_only: bool,
    version: &str,
    pretty: bool,
) -> Result<String> {
    if blocks_only {
        return match <[Vec<Block>; 1]>::try_from(documents) {
            Ok([blocks]) => to_json(&blocks, pretty),
            Err(documents) => to_json(&documents, pretty),
        };
    }

    let mut envelopes: Vec<Document> = documents
        .into_iter()
        .map(|blocks| Document::new(blocks).with_version(version))
        .collect();
    if envelopes.len() == 1 {
        let envelope = envelopes.remove(0);
        return envelope.to_json(pretty);
    }
    to_json(&envelopes, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(doc: &str) -> Vec<Block> {
        convert_input(doc, ParseOptions::default(), &Config::default(), Some(1), 0).unwrap()
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("bogus"), LevelFilter::Warn);
    }

    #[test]
    fn test_seeded_conversion_is_reproducible() {
        assert_eq!(blocks("# a\nb"), blocks("# a\nb"));
    }

    #[test]
    fn test_id_length_from_config() {
        let mut config = Config::default();
        config.output.id_length = 16;
        let out = convert_input("x", ParseOptions::default(), &config, None, 0).unwrap();
        assert_eq!(out[0].id.len(), 16);
    }

    #[test]
    fn test_render_single_envelope() {
        let json = render(vec![blocks("# Title")], false, "2.22.2", false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "2.22.2");
        assert_eq!(value["blocks"][0]["type"], "header");
        assert!(value["time"].is_u64());
    }

    #[test]
    fn test_render_blocks_only() {
        let json = render(vec![blocks("a\nb")], true, "2.22.2", false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_render_several_inputs() {
        let json = render(vec![blocks("a"), blocks("b")], false, "2.22.2", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["blocks"][0]["data"]["text"], "b");
    }
}
