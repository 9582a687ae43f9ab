//! Composable markup rendering.
//!
//! Templates are strings with `{{ ... }}` placeholders. Rendering one against
//! a context produces a [`Fragment`]: output that is safe to embed into a
//! parent template without being escaped again. Pages are built bottom-up:
//!
//! ```
//! use grr::{Context, Fragment, compose, map_over, render};
//!
//! # fn main() -> Result<(), grr::TemplateError> {
//! let foot = render("<footer>{{.Copy}}</footer>", Context::new().with("Copy", "© 2021"))?;
//! let sections = map_over("<h2>{{.}}</h2>", vec!["One", "Two & Three"])?;
//! let page = compose("<body>{{ yield }}</body>", &[sections, foot])?;
//!
//! assert_eq!(
//!     page.as_str(),
//!     "<body><h2>One</h2><h2>Two &amp; Three</h2><footer>© 2021</footer></body>"
//! );
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;

pub use error::CliError;

pub use grr_engine::{Bindings, Engine, YIELD, compose, compose_with, map_over, map_records, render};
#[cfg(feature = "parallel")]
pub use grr_engine::map_records_par;
pub use grr_syntax::{Node, Reference, SyntaxError, Template};
pub use grr_template_core::{
    EngineConfig, ExecutionErrorKind, ParseErrorKind, Resolved, Scope, TemplateError,
    TypeErrorKind,
};
pub use grr_types::{Context, Escape, Fragment, Record, Value, flatten, impl_record, join, to_context};
