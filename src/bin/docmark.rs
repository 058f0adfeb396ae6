//! Command-line interface for docmark
//! Compiles documentation pages and prints them in one of the output formats.
//!
//! Usage:
//!   docmark parse `<path>` [--format `<format>`] [--config `<file>`]
//!                 [--symbols `<file>`] [--glossary `<file>`] [--basis `<file>`]
//!                 [--deny-warnings]                        - Compile a page
//!   docmark slug `<text>`...                                 - Print the slug of each text
//!   docmark list-formats                                   - List available output formats
//!
//! Logging goes to stderr and is controlled with `DOCMARK_LOG` (default `warn`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use docmark::docmark::config::{Loader, Table};
use docmark::docmark::formats::FormatRegistry;
use docmark::{slugify, Compiler};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("docmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile documentation pages with symbol and glossary links")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Compile a page and print it")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (html, json, plaintext, treeviz)")
                        .default_value("treeviz"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("symbols")
                        .long("symbols")
                        .help("Symbol table (JSON or YAML)"),
                )
                .arg(
                    Arg::new("glossary")
                        .long("glossary")
                        .help("Glossary table (JSON or YAML)"),
                )
                .arg(
                    Arg::new("basis")
                        .long("basis")
                        .help("Basis table (JSON or YAML)"),
                )
                .arg(
                    Arg::new("deny-warnings")
                        .long("deny-warnings")
                        .help("Exit with status 2 if any reference is unresolved")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("slug")
                .about("Print the slug of each text")
                .arg(
                    Arg::new("text")
                        .help("Texts to slugify")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("slug", slug_matches)) => {
            for text in slug_matches.get_many::<String>("text").into_iter().flatten() {
                println!("{}", slugify(text));
            }
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DOCMARK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    let Some(path) = matches.get_one::<String>("path") else {
        unreachable!("path is required");
    };
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("treeviz");

    let compiler = build_compiler(matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let compilation = compiler.compile_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = FormatRegistry::with_defaults()
        .render(&compilation.nodes, format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    print!("{}", output);

    for diagnostic in &compilation.diagnostics {
        eprintln!("warning: {}: {}", path, diagnostic);
    }
    if matches.get_flag("deny-warnings") && compilation.has_diagnostics() {
        std::process::exit(2);
    }
}

/// Layer the config file and the table flags over the defaults, then load the tables.
fn build_compiler(matches: &ArgMatches) -> Result<Compiler, Box<dyn std::error::Error>> {
    let mut loader = Loader::new();
    if let Some(config) = matches.get_one::<String>("config") {
        loader = loader.with_file(config);
    }
    for table in Table::ALL {
        if let Some(path) = matches.get_one::<String>(table.key()) {
            loader = loader.with_table(table, path);
        }
    }
    let config = loader.build()?;
    Ok(Compiler::from_config(&config)?)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for (name, description) in registry.describe() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
