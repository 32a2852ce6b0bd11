//! Argument builders for the CLI.
//!
//! Each function returns a `clap::Arg` that `commands.rs` composes into the
//! command.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input files followed by the output path (positional).
pub fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .num_args(2..)
        .required(true)
        .help("Input declaration files, then the output file ('-' for stdout)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("typescript")
        .value_parser(["typescript", "ts", "json"])
        .help("Output format")
}

/// Absent-value spelling for optional arguments (--optional).
pub fn optional_arg() -> Arg {
    Arg::new("optional")
        .long("optional")
        .value_name("STYLE")
        .default_value("null")
        .value_parser(["null", "undefined"])
        .help("How optional boolexpr arguments spell absence")
}

/// Argument override table (--overrides).
pub fn overrides_arg() -> Arg {
    Arg::new("overrides")
        .long("overrides")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file of per-native argument type overrides")
}

/// Omit the pragma header (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't emit the @noSelfInFile header")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics and TypeScript written to stdout")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
