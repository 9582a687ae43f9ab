use clap::Parser;
use grr::cli::{self, Args};
use std::process::ExitCode;

/// A simple CLI to render a template file against a JSON data file.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("grr: {}", e);
            ExitCode::FAILURE
        }
    }
}
