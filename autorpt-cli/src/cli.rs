// Command definition for the autorpt binary.
//
// Kept free of crate imports so build.rs can include it verbatim and generate
// shell completions from the same definition the binary parses with.

use clap::{Arg, ArgAction, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("autorpt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assemble markdown files and spreadsheets into a single report")
        .long_about(
            "autorpt composes markdown files and spreadsheet tables into one report document.\n\n\
            Commands:\n  \
            - generate: Build a report from sources and write it out\n  \
            - inspect:  Show how a markdown file is split into blocks\n\n\
            The output format is chosen from the output file extension.\n\n\
            Examples:\n  \
            autorpt generate intro.md sales.xlsx -o report.html\n  \
            autorpt generate --manifest report.json -o report.md\n  \
            autorpt inspect intro.md --json\n  \
            autorpt --list-formats",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an autorpt.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Build a report from markdown and spreadsheet sources")
                .long_about(
                    "Build a report from markdown (.md, .markdown) and spreadsheet (.xlsx, .xls)\n\
                    sources, in the order given. A source that cannot be read is reported and\n\
                    skipped; the report is still written.\n\n\
                    Sources come from positional inputs, a JSON manifest, or both\n\
                    (manifest sources first). Relative manifest paths resolve against\n\
                    the manifest's directory.\n\n\
                    Examples:\n  \
                    autorpt generate intro.md sales.xlsx -o report.html --title \"Q1\"\n  \
                    autorpt generate --manifest report.json",
                )
                .arg(
                    Arg::new("inputs")
                        .help("Source files, in report order")
                        .num_args(1..)
                        .required_unless_present("manifest")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Output file; its extension selects the format")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .value_name("TEXT")
                        .help("Report title"),
                )
                .arg(
                    Arg::new("start-level")
                        .long("start-level")
                        .value_name("N")
                        .help("Heading depth that level-1 headers map to (1-9)")
                        .value_parser(clap::value_parser!(u8).range(1..=9)),
                )
                .arg(
                    Arg::new("manifest")
                        .long("manifest")
                        .value_name("FILE")
                        .help("JSON manifest describing the report")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the blocks a markdown file is split into")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print blocks as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}
