use crate::ast::{Node, Reference};
use crate::error::SyntaxError;
use crate::parser::parse_template;

/// A parsed template: its source and the nodes it was split into.
///
/// Parsing is the only fallible step that does not depend on data, so a
/// `Template` is known to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    nodes: Vec<Node>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        let nodes = parse_template(source)?;
        log::trace!("Parsed template into {} nodes", nodes.len());
        Ok(Self {
            source: source.to_string(),
            nodes,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All placeholder references, in template order.
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Placeholder(reference) => Some(reference),
            Node::Text(_) => None,
        })
    }

    /// True if any placeholder is the bare name `name`.
    pub fn uses_name(&self, name: &str) -> bool {
        self.references()
            .any(|reference| matches!(reference, Reference::Name(n) if n == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_in_order() {
        let template = Template::parse("<a>{{.Href}}</a>{{ yield }}{{.}}").unwrap();
        let names: Vec<String> = template.references().map(Reference::display_name).collect();
        assert_eq!(names, vec![".Href", "yield", "."]);
        assert_eq!(template.source(), "<a>{{.Href}}</a>{{ yield }}{{.}}");
    }

    #[test]
    fn test_uses_name() {
        let template = Template::parse("<body>{{ yield }}</body>").unwrap();
        assert!(template.uses_name("yield"));
        assert!(!Template::parse("{{.yield}}").unwrap().uses_name("yield"));
    }
}
