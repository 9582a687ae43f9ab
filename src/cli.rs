//! The `grr` command line: render a template file against JSON data.

use crate::error::CliError;
use clap::{Parser, ValueEnum};
use grr_engine::Engine;
use grr_template_core::EngineConfig;
use grr_types::{Context, Escape, Fragment, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Render a template against JSON data.
#[derive(Debug, Parser)]
#[command(name = "grr", version, about)]
pub struct Args {
    /// Template file with `{{ ... }}` placeholders.
    pub template: PathBuf,

    /// JSON file with the data context. Defaults to an empty object.
    pub data: Option<PathBuf>,

    /// Render the template once per element of the data array.
    #[arg(long)]
    pub each: bool,

    /// Pre-rendered fragment file bound to `{{ yield }}`. Repeatable;
    /// fragments are joined in the order given.
    #[arg(long = "yield", value_name = "FILE")]
    pub yields: Vec<PathBuf>,

    /// Escaping applied to data values.
    #[arg(long, value_enum, default_value_t = EscapeMode::Html)]
    pub escape: EscapeMode,

    /// Write the output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EscapeMode {
    Html,
    None,
}

impl From<EscapeMode> for Escape {
    fn from(mode: EscapeMode) -> Self {
        match mode {
            EscapeMode::Html => Escape::Html,
            EscapeMode::None => Escape::None,
        }
    }
}

/// Renders according to `args` and returns the result, without writing it.
pub fn render(args: &Args) -> Result<Fragment, CliError> {
    log::info!("Loading template from {}", args.template.display());
    let template = read(&args.template)?;

    let data = match &args.data {
        Some(path) => {
            log::info!("Loading data from {}", path.display());
            let json: serde_json::Value = serde_json::from_str(&read(path)?)?;
            Value::from(json)
        }
        None => Value::Map(Context::new()),
    };

    let fragments = args
        .yields
        .iter()
        .map(|path| read(path).map(Fragment::from_trusted))
        .collect::<Result<Vec<_>, _>>()?;

    let engine = Engine::new(EngineConfig::default().with_escape(args.escape.into()));
    let output = if args.each {
        if !fragments.is_empty() {
            log::warn!("--yield is ignored together with --each");
        }
        engine.map_over(&template, data)?
    } else if fragments.is_empty() {
        engine.render(&template, data)?
    } else {
        engine.compose_with(&template, data, &fragments)?
    };

    Ok(output)
}

/// Renders and writes the result to the configured output.
pub fn run(args: &Args) -> Result<(), CliError> {
    let output = render(args)?;
    match &args.output {
        Some(path) => {
            fs::write(path, output.as_str()).map_err(|e| CliError::io(path, e))?;
            log::info!("Wrote {} bytes to {}", output.len(), path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}
