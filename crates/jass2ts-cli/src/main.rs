mod cli;
mod commands;
mod logging;

use cli::{GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let params = GenerateParams::from_matches(&matches);

    logging::init(params.verbosity);
    commands::generate::run(params.into());
}
