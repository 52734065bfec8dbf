//! Command-line interface for concepta
//!
//! Usage:
//!   concepta highlight `<path>` [--language `<name>`] [--format `<format>`]  - Tokenize a code sample
//!   concepta markup `<path>` [--format `<format>`]                        - Parse a markup text
//!   concepta search `<data.json>` `<query>` [--limit `<n>`] [--format `<format>`] - Quick search
//!
//! Configuration is the built-in defaults, then `concepta.toml` in the working directory if
//! present, then `--config <file>`, then flags. Diagnostics go to stderr, filtered by
//! `RUST_LOG` or the configured `logging.level`.

use clap::{value_parser, Arg, ArgMatches, Command};
use concepta::formats::{blocks_to_string, concepts_to_string, lines_to_string, FormatError};
use concepta::highlight::{highlight_with, Vocabulary};
use concepta::markup::parse;
use concepta::search::SearchOptions;
use concepta::store::{ConceptStore, StoreError};
use concepta::OutputFormat;
use concepta_config::{ConceptaConfig, ConfigError, Loader};
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unsupported language '{0}'")]
    UnknownLanguage(String),
}

fn cli() -> Command {
    let format_arg = Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: 'simple' or 'json'")
        .default_value("simple");

    Command::new("concepta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Highlight, parse and search concept notes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .subcommand(
            Command::new("highlight")
                .about("Tokenize a code sample line by line")
                .arg(
                    Arg::new("path")
                        .help("Path to the code sample")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .help("Vocabulary used to classify identifiers (default from config)"),
                )
                .arg(format_arg.clone()),
        )
        .subcommand(
            Command::new("markup")
                .about("Parse a markup text into blocks")
                .arg(
                    Arg::new("path")
                        .help("Path to the markup text")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg.clone()),
        )
        .subcommand(
            Command::new("search")
                .about("Search a JSON export of concepts")
                .arg(
                    Arg::new("data")
                        .help("Path to a JSON array of concepts")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("query")
                        .help("Search query")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('n')
                        .value_parser(value_parser!(u64))
                        .help("Maximum number of hits (default from config)"),
                )
                .arg(format_arg),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging.level);

    match run(&matches, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<ConceptaConfig, CliError> {
    let mut loader = Loader::discover(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(("highlight", sub)) = matches.subcommand() {
        if let Some(language) = sub.get_one::<String>("language") {
            loader = loader.set_override("highlight.language", language.as_str())?;
        }
    }
    if let Some(("search", sub)) = matches.subcommand() {
        if let Some(limit) = sub.get_one::<u64>("limit") {
            loader = loader.set_override("search.result_limit", *limit)?;
        }
    }

    Ok(loader.build()?)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches, config: &ConceptaConfig) -> Result<String, CliError> {
    match matches.subcommand() {
        Some(("highlight", sub)) => {
            let source = read(sub, "path")?;
            let language = &config.highlight.language;
            let vocabulary = Vocabulary::lookup(language)
                .ok_or_else(|| CliError::UnknownLanguage(language.clone()))?;
            let lines = highlight_with(&source, vocabulary);
            debug!(lines = lines.len(), language = vocabulary.name(), "highlighted");
            Ok(lines_to_string(&lines, output_format(sub)?)?)
        }
        Some(("markup", sub)) => {
            let source = read(sub, "path")?;
            let blocks = parse(&source);
            debug!(blocks = blocks.len(), "parsed markup");
            Ok(blocks_to_string(&blocks, output_format(sub)?)?)
        }
        Some(("search", sub)) => {
            let data = read(sub, "data")?;
            let query = sub
                .get_one::<String>("query")
                .map(String::as_str)
                .unwrap_or_default();
            let mut store = ConceptStore::new();
            let imported = store.import_json(&data)?;
            debug!(imported, "loaded concepts");
            let options = SearchOptions::limited(config.search.result_limit);
            let hits = store.search_with_options(query, &options);
            Ok(concepts_to_string(&hits, output_format(sub)?)?)
        }
        _ => unreachable!(),
    }
}

fn output_format(matches: &ArgMatches) -> Result<OutputFormat, FormatError> {
    matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple")
        .parse()
}

fn read(matches: &ArgMatches, arg: &str) -> Result<String, CliError> {
    let path = matches
        .get_one::<String>(arg)
        .map(String::as_str)
        .unwrap_or_default();
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}
