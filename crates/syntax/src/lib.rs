//! Parsing for grr placeholder templates.
//!
//! A template is literal text interleaved with `{{ ... }}` placeholders.
//! A placeholder holds exactly one reference:
//!
//! - `{{ . }}` the current context value
//! - `{{ .Name }}`, `{{ .Author.Name }}` a field path
//! - `{{ yield }}`, `{{ Name }}` a bare name
//!
//! There are no conditionals, loops or pipelines. Anything else inside the
//! braces is an unknown directive and fails at parse time.

pub mod ast;
pub mod error;
mod parser;
mod template;

// --- Public API ---
pub use ast::{Node, Reference};
pub use error::SyntaxError;
pub use parser::parse_template;
pub use template::Template;
