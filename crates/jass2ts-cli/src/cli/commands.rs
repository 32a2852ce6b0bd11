//! Command builder for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI.
pub fn build_cli() -> Command {
    Command::new("jass2ts")
        .about("Generate TypeScript declarations from JASS declaration files")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .override_usage("jass2ts [OPTIONS] <INPUT>... <OUTPUT>")
        .after_help(
            r#"EXAMPLES:
  jass2ts common.j common.d.ts                      # one input
  jass2ts common.j blizzard.j natives.d.ts          # inputs merge in order
  jass2ts common.j -                                # write to stdout
  jass2ts --format json common.j -                  # dump recognized declarations
  jass2ts --overrides extra.json common.j out.d.ts  # custom argument types"#,
        )
        .arg(paths_arg())
        .arg(format_arg())
        .arg(optional_arg())
        .arg(overrides_arg())
        .arg(no_header_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
