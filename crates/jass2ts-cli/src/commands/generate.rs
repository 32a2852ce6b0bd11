use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use jass2ts_lib::typegen::typescript::{Config, OptionalStyle, Overrides};
use jass2ts_lib::{Error, Result, Translation};

use crate::cli::OutputFormat;

pub struct GenerateArgs {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub optional: OptionalStyle,
    pub overrides: Option<PathBuf>,
    pub header: bool,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = generate(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

pub(crate) fn generate(args: &GenerateArgs) -> Result<()> {
    let mut translation = Translation::from_files(&args.inputs)?;

    let strict = if args.strict {
        translation.check_strict()
    } else {
        Ok(())
    };
    let rendered = translation.render_diagnostics(args.color);
    if !rendered.is_empty() {
        eprintln!("{}", rendered);
    }
    strict?;

    let output = render_output(&translation, args)?;
    write_output(args.output.as_deref(), &output)?;

    info!(
        inputs = args.inputs.len(),
        declarations = translation.library().len(),
        "done"
    );
    Ok(())
}

pub(crate) fn render_output(translation: &Translation, args: &GenerateArgs) -> Result<String> {
    match args.format {
        OutputFormat::Json => translation.to_json(),
        OutputFormat::TypeScript => Ok(translation.emit(config(args)?)),
    }
}

fn config(args: &GenerateArgs) -> Result<Config> {
    let overrides = match &args.overrides {
        Some(path) => Overrides::load(path)?,
        None => Overrides::builtin(),
    };
    Ok(Config::new()
        .header(args.header)
        .optional_style(args.optional)
        .overrides(overrides)
        .colored(args.color && args.output.is_none()))
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, output).map_err(|e| Error::io(path, e)),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|e| Error::io("<stdout>", e)),
    }
}
