//! Placeholder name resolution with bound accessors.

use grr_template_core::{Resolved, Scope};
use grr_types::{Fragment, Value};

type Accessor<'a> = Box<dyn Fn() -> Fragment + Send + Sync + 'a>;

/// A data value plus zero or more named, zero-argument accessors.
///
/// Accessors are reserved bare names: `{{ yield }}` invokes the accessor
/// bound to `yield` and shadows a top-level field of the same name, while
/// `{{ .yield }}` still reads the field.
pub struct Bindings<'a> {
    data: &'a Value,
    accessors: Vec<(&'static str, Accessor<'a>)>,
}

impl<'a> Bindings<'a> {
    pub fn new(data: &'a Value) -> Self {
        Self {
            data,
            accessors: Vec::new(),
        }
    }

    /// Binds `name` to `accessor`. Each placeholder that names it invokes
    /// the accessor again.
    pub fn bind<F>(mut self, name: &'static str, accessor: F) -> Self
    where
        F: Fn() -> Fragment + Send + Sync + 'a,
    {
        self.accessors.retain(|(bound, _)| *bound != name);
        self.accessors.push((name, Box::new(accessor)));
        self
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.accessors.iter().any(|(bound, _)| *bound == name)
    }
}

impl Scope for Bindings<'_> {
    fn dot(&self) -> &Value {
        self.data
    }

    fn name(&self, name: &str) -> Option<Resolved<'_>> {
        if let Some((_, accessor)) = self.accessors.iter().find(|(bound, _)| *bound == name) {
            return Some(Resolved::Fragment(accessor()));
        }
        self.data.lookup(&[name]).map(Resolved::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grr_types::Context;

    #[test]
    fn test_bare_name_falls_back_to_field() {
        let data = Value::Map(Context::new().with("Title", "Home"));
        let scope = Bindings::new(&data);
        assert_eq!(
            scope.name("Title"),
            Some(Resolved::Value(&Value::Text("Home".into())))
        );
        assert_eq!(scope.name("yield"), None);
    }

    #[test]
    fn test_accessor_shadows_field_but_not_path() {
        let data = Value::Map(Context::new().with("yield", "field"));
        let scope = Bindings::new(&data).bind("yield", || Fragment::from_trusted("bound"));

        assert_eq!(
            scope.name("yield"),
            Some(Resolved::Fragment(Fragment::from_trusted("bound")))
        );
        assert_eq!(
            scope.field(&["yield".to_string()]),
            Some(Resolved::Value(&Value::Text("field".into())))
        );
    }

    #[test]
    fn test_rebinding_replaces_accessor() {
        let data = Value::Null;
        let scope = Bindings::new(&data)
            .bind("yield", || Fragment::from_trusted("first"))
            .bind("yield", || Fragment::from_trusted("second"));
        assert!(scope.is_bound("yield"));
        assert_eq!(
            scope.name("yield"),
            Some(Resolved::Fragment(Fragment::from_trusted("second")))
        );
    }
}
