use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use outliner::{parse_str, render_document, RenderContext};

const STDIN_ARG: &str = "-";

fn cli() -> Command {
    Command::new("outliner")
        .about("Convert an indented plain-text outline into a numbered outline")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input")
                .help("Outline file to read, or '-' for standard input")
                .default_value(STDIN_ARG)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("preserve-case")
                .long("preserve-case")
                .help("Keep headers in their original case instead of upper-casing them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("emphasize")
                .long("emphasize")
                .help("Underline headers with ANSI escape codes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == STDIN_ARG {
        debug!("reading outline from standard input");
        return io::read_to_string(io::stdin()).context("Failed to read outline from standard input");
    }

    debug!(path = input, "reading outline file");
    fs::read_to_string(input).with_context(|| format!("Failed to read outline file {}", input))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or(STDIN_ARG);
    let text = read_input(input)?;

    let document =
        parse_str(&text).with_context(|| format!("Failed to parse outline from {}", input))?;
    info!(
        paragraphs = document.paragraph_count(),
        indent_unit = ?document.indent_unit,
        "parsed outline"
    );

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    let output = match format {
        "json" => serde_json::to_string_pretty(&document)?,
        _ => {
            let context = RenderContext::new()
                .uppercase_headers(!matches.get_flag("preserve-case"))
                .emphasize_headers(matches.get_flag("emphasize"));
            render_document(&document, &context)
        }
    };

    println!("{}", output);

    Ok(())
}
