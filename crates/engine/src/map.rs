//! Mapping: one template instantiated per record, concatenated in order.

use crate::engine::{Engine, parse};
use crate::scope::Bindings;
use grr_template_core::{TemplateError, TypeErrorKind};
use grr_types::{Fragment, Record, Value, flatten};

impl Engine {
    /// Renders `template` once per element of `records`, which must be a
    /// [`Value::List`], and concatenates the results in order.
    ///
    /// The shape check happens before the template is parsed, and an empty
    /// list yields the empty fragment without parsing it at all. The first
    /// failing element aborts the whole call.
    pub fn map_over(
        &self,
        template: &str,
        records: impl Into<Value>,
    ) -> Result<Fragment, TemplateError> {
        let records = records.into();
        let Value::List(items) = &records else {
            return Err(TemplateError::Type(TypeErrorKind::NotASequence {
                found: records.kind(),
            }));
        };
        if items.is_empty() {
            return Ok(Fragment::empty());
        }

        let template = parse(template)?;
        let rendered = items
            .iter()
            .map(|item| self.execute(&template, &Bindings::new(item)))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Mapped template over {} records", rendered.len());
        Ok(flatten(rendered))
    }

    /// Typed variant of [`Engine::map_over`] for a slice of records.
    pub fn map_records<R: Record>(
        &self,
        template: &str,
        records: &[R],
    ) -> Result<Fragment, TemplateError> {
        if records.is_empty() {
            return Ok(Fragment::empty());
        }

        let template = parse(template)?;
        let rendered = records
            .iter()
            .map(|record| {
                let data = Value::from_record(record);
                self.execute(&template, &Bindings::new(&data))
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Mapped template over {} records", rendered.len());
        Ok(flatten(rendered))
    }

    /// Parallel [`Engine::map_records`] on the rayon pool. Output order is
    /// input order; on failure the error of some failing record is returned.
    #[cfg(feature = "rayon")]
    pub fn map_records_par<R: Record + Sync>(
        &self,
        template: &str,
        records: &[R],
    ) -> Result<Fragment, TemplateError> {
        use rayon::prelude::*;

        if records.is_empty() {
            return Ok(Fragment::empty());
        }

        let template = parse(template)?;
        let rendered = records
            .par_iter()
            .map(|record| {
                let data = Value::from_record(record);
                self.execute(&template, &Bindings::new(&data))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(flatten(rendered))
    }
}
