//! Template execution against a scope.

use crate::scope::Bindings;
use grr_syntax::{Node, Reference, Template};
use grr_template_core::{EngineConfig, ExecutionErrorKind, Resolved, Scope, TemplateError};
use grr_types::{Fragment, Value};

/// Executes templates under one [`EngineConfig`].
///
/// The engine holds no state besides its configuration; every call parses
/// its template afresh and returns a new [`Fragment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses `template` and executes it against `context`.
    pub fn render(
        &self,
        template: &str,
        context: impl Into<Value>,
    ) -> Result<Fragment, TemplateError> {
        let template = parse(template)?;
        let data = context.into();
        self.execute(&template, &Bindings::new(&data))
    }

    /// Executes an already parsed template against `scope`.
    pub fn execute(
        &self,
        template: &Template,
        scope: &dyn Scope,
    ) -> Result<Fragment, TemplateError> {
        let mut out = String::with_capacity(template.source().len());

        for node in template.nodes() {
            let reference = match node {
                Node::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Node::Placeholder(reference) => reference,
            };

            let resolved = resolve(scope, reference).ok_or_else(|| TemplateError::Execution {
                template: template.source().to_string(),
                kind: ExecutionErrorKind::MissingField {
                    name: field_name(reference),
                },
            })?;

            match resolved {
                Resolved::Fragment(fragment) => out.push_str(fragment.as_str()),
                Resolved::Value(Value::Fragment(fragment)) => out.push_str(fragment.as_str()),
                Resolved::Value(value) => {
                    let text = value.scalar_text().ok_or_else(|| TemplateError::Execution {
                        template: template.source().to_string(),
                        kind: ExecutionErrorKind::NotScalar {
                            name: field_name(reference),
                            found: value.kind(),
                        },
                    })?;
                    self.config.escape.push_escaped(&mut out, &text);
                }
            }
        }

        log::trace!("Rendered {} bytes from {} nodes", out.len(), template.nodes().len());
        Ok(Fragment::from_trusted(out))
    }
}

pub(crate) fn parse(source: &str) -> Result<Template, TemplateError> {
    Template::parse(source).map_err(TemplateError::from)
}

fn resolve<'s>(scope: &'s dyn Scope, reference: &Reference) -> Option<Resolved<'s>> {
    match reference {
        Reference::Dot => Some(Resolved::Value(scope.dot())),
        Reference::Field(path) => scope.field(path),
        Reference::Name(name) => scope.name(name),
    }
}

/// The name reported for an unresolved reference: `Author.Name` for
/// `{{ .Author.Name }}`, `yield` for `{{ yield }}`.
fn field_name(reference: &Reference) -> String {
    match reference {
        Reference::Dot => ".".to_string(),
        Reference::Field(path) => path.join("."),
        Reference::Name(name) => name.clone(),
    }
}
