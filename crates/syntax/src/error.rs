use grr_template_core::{ParseErrorKind, TemplateError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Syntax error in '{template}': {kind}")]
pub struct SyntaxError {
    pub template: String,
    pub kind: ParseErrorKind,
}

impl SyntaxError {
    pub(crate) fn new(template: &str, kind: ParseErrorKind) -> Self {
        Self {
            template: template.to_string(),
            kind,
        }
    }
}

impl From<SyntaxError> for TemplateError {
    fn from(err: SyntaxError) -> Self {
        TemplateError::Parse {
            template: err.template,
            kind: err.kind,
        }
    }
}
