// Command-line interface for marq
//
// This binary converts markup documents to HTML fragments.
//
// The core capabilities live in the marq crate; this layer only resolves
// configuration (built-in defaults, an optional marq.toml, an explicit
// --config file, then per-invocation flags) and moves bytes in and out.
//
// Usage:
//  marq <input> [--output <file>]   - Convert a file ('-' reads stdin)
//  marq <input> --no-emphasis       - Leave *text* and _text_ literal
//  marq <input> --raw-html          - Pass HTML lines through unwrapped

use clap::{Arg, ArgAction, Command, ValueHint};
use marq::{Parser, ParserConfig};
use marq_config::{Loader, MarqConfig};
use std::fs;
use std::io::Read;

fn build_cli() -> Command {
    Command::new("marq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markup documents to HTML")
        .long_about(
            "marq converts documents written in a markdown-like dialect into\n\
            HTML fragments.\n\n\
            The input is read from a file, or from stdin when the path is '-'.\n\
            Output goes to stdout by default, or use -o to write a file.\n\n\
            Examples:\n  \
            marq README.md                    # Convert to HTML on stdout\n  \
            marq README.md -o readme.html     # Convert to a file\n  \
            cat notes.md | marq -             # Convert stdin\n  \
            marq doc.md --no-emphasis         # Keep *stars* literal",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path ('-' reads stdin)")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a marq.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no-emphasis")
                .long("no-emphasis")
                .help("Leave single-delimiter emphasis (*text*, _text_) literal")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("raw-html")
                .long("raw-html")
                .help("Pass lines starting with HTML through without a paragraph wrapper")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    let mut parser_config = ParserConfig::from(&config.markup);
    if matches.get_flag("no-emphasis") {
        parser_config.emphasis_enabled = false;
    }
    if matches.get_flag("raw-html") {
        parser_config.html_wrapped_in_paragraph = false;
    }

    let source = read_input(input);
    let html = Parser::with_config(parser_config).parse(&source);

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{html}"),
    }
}

fn read_input(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {e}");
            std::process::exit(1);
        }
        return source;
    }

    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> MarqConfig {
    let loader = Loader::new().with_optional_file("marq.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
