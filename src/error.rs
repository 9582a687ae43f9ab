// src/error.rs
use grr_template_core::TemplateError;
use thiserror::Error;

/// Errors surfaced by the `grr` command line tool.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Rendering failed: {0}")]
    Template(#[from] TemplateError),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON data error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
