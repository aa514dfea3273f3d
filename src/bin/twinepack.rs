//! Command-line interface for twinepack.
//!
//! Usage:
//!   twinepack `<story.html>` `<story-meta.json>` [-o `<output>`] [--pretty]

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("twinepack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a Twine 2 story export into a chapter-partitioned story document")
        .arg_required_else_help(true)
        .arg(
            Arg::new("story")
                .help("Path to the story export (HTML)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("meta")
                .help("Path to the chapter-metadata document (JSON)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Where to write the assembled story document")
                .default_value("story.json"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the output document")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let story = PathBuf::from(matches.get_one::<String>("story").unwrap());
    let meta = PathBuf::from(matches.get_one::<String>("meta").unwrap());
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap());
    let pretty = matches.get_flag("pretty");

    if let Err(e) = twinepack::story::run(&story, &meta, &output, pretty) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
