//! Render, compose and map operations for grr templates.
//!
//! This crate executes parsed templates against [`Value`] contexts:
//!
//! - [`render`] substitutes placeholders from a context
//! - [`compose`] and [`compose_with`] additionally bind `{{ yield }}` to a
//!   sequence of pre-rendered fragments
//! - [`map_over`] and [`map_records`] instantiate one template per record
//!
//! The free functions use [`Engine::default`], which escapes for HTML.

mod compose;
mod engine;
mod map;
pub mod scope;

pub use compose::YIELD;
pub use engine::Engine;
pub use scope::Bindings;

use grr_template_core::TemplateError;
use grr_types::{Fragment, Record, Value};

/// Renders `template` against `context`.
pub fn render(template: &str, context: impl Into<Value>) -> Result<Fragment, TemplateError> {
    Engine::default().render(template, context)
}

/// Renders `template` with `yield` bound to the concatenation of `fragments`.
pub fn compose(template: &str, fragments: &[Fragment]) -> Result<Fragment, TemplateError> {
    Engine::default().compose(template, fragments)
}

/// Renders `template` against `context` with `yield` bound to `fragments`.
pub fn compose_with(
    template: &str,
    context: impl Into<Value>,
    fragments: &[Fragment],
) -> Result<Fragment, TemplateError> {
    Engine::default().compose_with(template, context, fragments)
}

/// Renders `template` once per element of the list `records`.
pub fn map_over(template: &str, records: impl Into<Value>) -> Result<Fragment, TemplateError> {
    Engine::default().map_over(template, records)
}

/// Renders `template` once per record.
pub fn map_records<R: Record>(template: &str, records: &[R]) -> Result<Fragment, TemplateError> {
    Engine::default().map_records(template, records)
}

#[cfg(feature = "rayon")]
pub fn map_records_par<R: Record + Sync>(
    template: &str,
    records: &[R],
) -> Result<Fragment, TemplateError> {
    Engine::default().map_records_par(template, records)
}
