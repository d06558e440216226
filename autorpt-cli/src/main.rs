// Command-line interface for autorpt
//
// This binary assembles markdown files and spreadsheet tables into a single
// report, using the autorpt-babel library for all document work. The binary
// itself only parses arguments, layers configuration and prints results.
//
// Usage:
//  autorpt generate <inputs>... -o <file> [--title T] [--start-level N] [--manifest FILE]
//  autorpt inspect <file.md> [--json]      - Show how a markdown file splits into blocks
//  autorpt --list-formats                  - List available output formats
//
// Diagnostics go through env_logger on stderr (RUST_LOG, --verbose, --quiet).
// The batch summary and inspect output go to stdout.

use autorpt_babel::{Assembler, Document, FormatRegistry};
use autorpt_cli::cli::build_cli;
use autorpt_cli::{
    batch_summary, collect_request, level_override, load_config, load_manifest, render_blocks,
};
use clap::ArgMatches;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            handle_generate_command(sub_matches, config_path.as_deref());
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_inspect_command(path, sub_matches.get_flag("json"));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level_override(verbose, quiet) {
        builder.filter_level(level);
    }
    builder.init();
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format
                .file_extensions()
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {name:<10} {extensions:<20} {}", format.description());
        }
    }
}

fn handle_generate_command(sub_matches: &ArgMatches, config_path: Option<&Path>) {
    let inputs: Vec<PathBuf> = sub_matches
        .get_many::<String>("inputs")
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default();

    let manifest = sub_matches.get_one::<String>("manifest").map(|path| {
        load_manifest(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        })
    });

    let request = collect_request(
        inputs,
        manifest,
        sub_matches.get_one::<String>("output").map(PathBuf::from),
        sub_matches.get_one::<String>("title").cloned(),
        sub_matches.get_one::<u8>("start-level").copied(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let config = load_config(config_path, &request).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    // Unknown extensions fall through to persist, which reports them.
    let format = FormatRegistry::default()
        .detect_format_from_filename(&request.output.to_string_lossy())
        .unwrap_or_default();

    let mut assembler =
        Assembler::new(Document::default()).with_options(config.assemble_options(&format));
    let outcome = assembler.generate_report(
        &request.sources,
        &request.output,
        config.report.title.as_deref(),
        config.report.start_header_level,
    );

    print!("{}", batch_summary(&outcome.batch));
    match outcome.saved {
        Some(path) => println!("Report saved: {}", path.display()),
        None => {
            eprintln!(
                "Error: could not write report to '{}'",
                request.output.display()
            );
            std::process::exit(1);
        }
    }
}

fn handle_inspect_command(path: &str, json: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let output = render_blocks(&source, json).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}
