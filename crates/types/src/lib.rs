//! Foundation types for the grr rendering engine.
//!
//! Everything a template is executed against, and everything it produces,
//! lives here:
//!
//! - [`Fragment`]: already-rendered output that is safe to embed verbatim
//! - [`Value`] and [`Context`]: the tagged data model templates resolve against
//! - [`Record`] and [`to_context`]: statically declared field extraction
//! - [`join`] and [`flatten`]: fragment concatenation

pub mod escape;
pub mod fragment;
pub mod join;
pub mod record;
pub mod value;

pub use escape::Escape;
pub use fragment::Fragment;
pub use join::{flatten, join};
pub use record::{Record, to_context};
pub use value::{Context, Value};
