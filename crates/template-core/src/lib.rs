//! Core abstractions shared by the grr template crates.
//!
//! This crate defines the contract between the template syntax and the
//! engine that executes it:
//!
//! ## Key Abstractions
//!
//! - **`TemplateError`**: The single error taxonomy every public operation returns
//! - **`EngineConfig`**: Configuration for template execution
//! - **`Scope`**: Name resolution for placeholders, including bound accessors

use grr_types::{Escape, Fragment, Value};
use thiserror::Error;

/// Errors that can occur while rendering.
///
/// Parse and execution errors carry the template source they were raised
/// for, so a caller several compositions up can tell which template failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Template parsing failed: {kind}. Template was: {template}")]
    Parse {
        template: String,
        kind: ParseErrorKind,
    },

    #[error("Template execution failed: {kind}. Template was: {template}")]
    Execution {
        template: String,
        kind: ExecutionErrorKind,
    },

    #[error("Type error: {0}")]
    Type(TypeErrorKind),
}

impl TemplateError {
    /// The template source, when the error is tied to one.
    pub fn template(&self) -> Option<&str> {
        match self {
            TemplateError::Parse { template, .. } | TemplateError::Execution { template, .. } => {
                Some(template)
            }
            TemplateError::Type(_) => None,
        }
    }

    /// The name of the unresolved field, if this is a missing-field error.
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            TemplateError::Execution {
                kind: ExecutionErrorKind::MissingField { name },
                ..
            } => Some(name),
            _ => None,
        }
    }
}

/// Ways template text can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("unterminated placeholder opened at byte {offset}")]
    Unterminated { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    EmptyPlaceholder { offset: usize },

    #[error("unknown directive '{directive}'")]
    UnknownDirective { directive: String },
}

/// Ways a well-formed template can fail against a context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionErrorKind {
    #[error("missing field '{name}'")]
    MissingField { name: String },

    #[error("field '{name}' is a {found}, which cannot be rendered as text")]
    NotScalar { name: String, found: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeErrorKind {
    #[error("expected a sequence of records, found {found}")]
    NotASequence { found: &'static str },
}

/// Configuration for an execution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// How scalar values are escaped. Fragments are never escaped.
    pub escape: Escape,
}

impl EngineConfig {
    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }
}

/// What a placeholder name resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// A value found in the data context.
    Value(&'a Value),
    /// The result of invoking a bound accessor.
    Fragment(Fragment),
}

/// Name resolution for the placeholders of one execution.
pub trait Scope {
    /// The current context value, addressed by `.`.
    fn dot(&self) -> &Value;

    /// Resolves a bare name, such as `yield` or `Title`.
    fn name(&self, name: &str) -> Option<Resolved<'_>>;

    /// Resolves a dotted field path, such as `.Author.Name`.
    fn field(&self, path: &[String]) -> Option<Resolved<'_>> {
        self.dot().lookup(path).map(Resolved::Value)
    }
}
