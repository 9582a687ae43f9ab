//! Defines the Abstract Syntax Tree (AST) for placeholder templates.

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted unchanged.
    Text(String),
    /// A `{{ ... }}` placeholder.
    Placeholder(Reference),
}

/// What a placeholder refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// The current context value (`.`).
    Dot,
    /// A field path from the current context (`.Name`, `.Author.Name`).
    Field(Vec<String>),
    /// A bare name (`yield`, `Title`): a bound accessor if one is in scope,
    /// otherwise a top-level field.
    Name(String),
}

impl Reference {
    /// The reference as it would be written in a template, without braces.
    pub fn display_name(&self) -> String {
        match self {
            Reference::Dot => ".".to_string(),
            Reference::Field(path) => format!(".{}", path.join(".")),
            Reference::Name(name) => name.clone(),
        }
    }
}
