//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `GenerateParams` mirrors `GenerateArgs` but is populated from clap
//! - the last positional is split off as the output path
//! - `Into<GenerateArgs>` bridges dispatch → command handler

use std::path::PathBuf;

use clap::ArgMatches;
use jass2ts_lib::typegen::typescript::OptionalStyle;

use super::ColorChoice;
use crate::commands::generate::GenerateArgs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    TypeScript,
    Json,
}

pub struct GenerateParams {
    pub inputs: Vec<PathBuf>,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub optional: OptionalStyle,
    pub overrides: Option<PathBuf>,
    pub header: bool,
    pub strict: bool,
    pub color: ColorChoice,
    pub verbosity: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let mut inputs: Vec<PathBuf> = m
            .get_many::<PathBuf>("paths")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let output = inputs.pop().filter(|p| p.as_os_str() != "-");

        Self {
            inputs,
            output,
            format: parse_format(m),
            optional: parse_optional(m),
            overrides: m.get_one::<PathBuf>("overrides").cloned(),
            header: !m.get_flag("no_header"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            verbosity: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            inputs: p.inputs,
            output: p.output,
            format: p.format,
            optional: p.optional,
            overrides: p.overrides,
            header: p.header,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::TypeScript,
    }
}

fn parse_optional(m: &ArgMatches) -> OptionalStyle {
    match m.get_one::<String>("optional").map(|s| s.as_str()) {
        Some("undefined") => OptionalStyle::Undefined,
        _ => OptionalStyle::Null,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
