mod debug_report;

use partsift::{
    AlternativesOptions, CategoryTable, Component, ComponentRow, MemoryStore, QueryError, RuleBook, SearchConfig,
    SearchError, SearchParams, SpecFilter, find_alternatives_with, merge_spec_filters, parse_query_verbose,
    search_with,
};
use serde::Deserialize;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_tracing(config.debug);

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("partsift=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("partsift=warn"))
    };
    tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(io::stderr).with_target(false)).init();
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read catalog '{path}': {source}")]
    ReadCatalog { path: PathBuf, source: io::Error },
    #[error("invalid catalog '{path}': {source}")]
    Catalog { path: PathBuf, source: serde_json::Error },
    #[error("no part '{0}' in the catalog")]
    UnknownPart(String),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// A rejected query is a usage error; everything else is a failure.
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Query(_) | CliError::Search(SearchError::Query(_) | SearchError::Filter(_)) => 2,
            _ => 1,
        }
    }
}

/// Catalog file: `{"subcategories": [...], "components": [...]}`.
#[derive(Deserialize)]
struct Catalog {
    #[serde(default)]
    subcategories: CategoryTable,
    #[serde(default)]
    components: Vec<ComponentRow>,
}

fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    let text =
        std::fs::read_to_string(path).map_err(|source| CliError::ReadCatalog { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text).map_err(|source| CliError::Catalog { path: path.to_path_buf(), source })
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let Some(path) = &config.catalog else {
        let (mut parsed, details) = parse_query_verbose(&config.input)?;
        parsed.spec_filters = merge_spec_filters(&config.filters, &parsed.spec_filters);
        if config.json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        } else {
            debug_report::print_parse(&parsed, &details, config.color);
        }
        return Ok(());
    };

    let catalog = load_catalog(path)?;
    let categories = catalog.subcategories;
    let store = MemoryStore::new(catalog.components);

    if let Some(id) = &config.alternatives {
        let row = store.get(id).ok_or_else(|| CliError::UnknownPart(id.clone()))?;
        let original = Component::from_row(row, &categories);
        let pool: Vec<Component> =
            store.in_subcategory(row.subcategory_id).map(|row| Component::from_row(row, &categories)).collect();
        let report = find_alternatives_with(&original, &pool, RuleBook::builtin(), &AlternativesOptions::default());
        if config.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            debug_report::print_alternatives(&report, config.color);
        }
        return Ok(());
    }

    let params = SearchParams {
        query: Some(config.input.clone()).filter(|q| !q.trim().is_empty()),
        spec_filters: config.filters.clone(),
        ..SearchParams::default()
    };
    let outcome = search_with(&store, &categories, &params, &SearchConfig::default())?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        debug_report::print_search(&outcome, config.color);
    }
    Ok(())
}

struct CliConfig {
    input: String,
    catalog: Option<PathBuf>,
    alternatives: Option<String>,
    filters: Vec<SpecFilter>,
    json: bool,
    color: bool,
    debug: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut catalog: Option<PathBuf> = None;
    let mut alternatives: Option<String> = None;
    let mut filters: Vec<SpecFilter> = Vec::new();
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut debug = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("partsift {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--debug" => debug = true,
            "--catalog" => {
                let value = args.next().ok_or_else(|| "error: --catalog expects a file".to_string())?;
                catalog = Some(PathBuf::from(value));
            }
            "--alternatives" => {
                let value = args.next().ok_or_else(|| "error: --alternatives expects a part id".to_string())?;
                alternatives = Some(value);
            }
            "--filter" => {
                let value = args.next().ok_or_else(|| "error: --filter expects an expression".to_string())?;
                filters.push(parse_filter(&value)?);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: query provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--catalog=") => {
                catalog = Some(PathBuf::from(arg.trim_start_matches("--catalog=")));
            }
            _ if arg.starts_with("--alternatives=") => {
                alternatives = Some(arg.trim_start_matches("--alternatives=").to_string());
            }
            _ if arg.starts_with("--filter=") => {
                filters.push(parse_filter(arg.trim_start_matches("--filter="))?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: query provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    if alternatives.is_some() {
        if catalog.is_none() {
            return Err("error: --alternatives needs --catalog".to_string());
        }
        if input.is_some() {
            return Err("error: --alternatives takes no query".to_string());
        }
    }

    let needs_query = alternatives.is_none() && (catalog.is_none() || filters.is_empty());
    let input = match input {
        Some(value) => value,
        None if needs_query => read_stdin_input()?,
        None => String::new(),
    };

    if needs_query && input.trim().is_empty() {
        return Err(format!("error: no query provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, catalog, alternatives, filters, json, color, debug })
}

fn parse_filter(value: &str) -> Result<SpecFilter, String> {
    SpecFilter::parse(value).map_err(|err| format!("error: invalid --filter '{value}': {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "partsift {version}

Parametric search for electronics components.

Usage:
  partsift [OPTIONS] [--] <query...>
  partsift --catalog <file> [OPTIONS] [--] [query...]
  partsift --catalog <file> --alternatives <id> [OPTIONS]

Without --catalog the query is only parsed and the structured reading is
printed. With --catalog the query is run against the catalog.

Options:
  --catalog <file>          JSON catalog with \"subcategories\" and \"components\".
  --alternatives <id>       Rank alternatives to part <id> from the catalog.
  --filter <expr>           Spec filter such as \"Voltage Rating>=25V\". Repeatable;
                            wins over filters parsed from the query.
  --json                    Print machine-readable JSON.
  --color                   Force ANSI color output.
  --no-color                Disable ANSI color output.
  --debug                   Log debug events to stderr (otherwise RUST_LOG applies).
  -h, --help                Show this help message.
  -V, --version             Print version information.

The query is read from stdin when no query arguments are given.

Exit codes:
  0  Success.
  1  Catalog or search error.
  2  Invalid arguments, filter or query.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
