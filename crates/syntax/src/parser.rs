//! A `nom`-based parser for placeholder templates.
use super::ast::{Node, Reference};
use crate::error::SyntaxError;
use grr_template_core::ParseErrorKind;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::char,
    combinator::{map, recognize},
    multi::many1,
    sequence::{delimited, pair, preceded},
};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Control keywords of fuller template languages. They are rejected rather
/// than resolved as names, so `{{ range .Items }}` fails loudly.
const KEYWORDS: &[&str] = &[
    "if", "else", "end", "range", "with", "define", "template", "block", "break", "continue",
    "nil",
];

// --- Main Public Parser ---

/// Splits `source` into literal text and placeholder nodes.
pub fn parse_template(source: &str) -> Result<Vec<Node>, SyntaxError> {
    let mut nodes = Vec::new();
    let mut input = source;

    while !input.is_empty() {
        let (text, rest) = match input.find(OPEN) {
            Some(start) => input.split_at(start),
            None => (input, ""),
        };
        if !text.is_empty() {
            nodes.push(Node::Text(text.to_string()));
        }
        if rest.is_empty() {
            break;
        }

        let offset = source.len() - rest.len();
        let (after, body) = placeholder(rest).map_err(|_: nom::Err<nom::error::Error<&str>>| {
            SyntaxError::new(source, ParseErrorKind::Unterminated { offset })
        })?;
        nodes.push(Node::Placeholder(parse_reference(source, body, offset)?));
        input = after;
    }

    Ok(nodes)
}

fn parse_reference(source: &str, body: &str, offset: usize) -> Result<Reference, SyntaxError> {
    let directive = body.trim();
    if directive.is_empty() {
        return Err(SyntaxError::new(
            source,
            ParseErrorKind::EmptyPlaceholder { offset },
        ));
    }

    match reference(directive) {
        Ok(("", Reference::Name(name))) if KEYWORDS.contains(&name.as_str()) => {
            Err(unknown(source, directive))
        }
        Ok(("", reference)) => Ok(reference),
        _ => Err(unknown(source, directive)),
    }
}

fn unknown(source: &str, directive: &str) -> SyntaxError {
    SyntaxError::new(
        source,
        ParseErrorKind::UnknownDirective {
            directive: directive.to_string(),
        },
    )
}

// --- Combinators ---

fn placeholder(input: &str) -> IResult<&str, &str> {
    delimited(tag(OPEN), take_until(CLOSE), tag(CLOSE)).parse(input)
}

fn reference(input: &str) -> IResult<&str, Reference> {
    alt((
        map(field_path, Reference::Field),
        map(char('.'), |_| Reference::Dot),
        map(identifier, |name: &str| Reference::Name(name.to_string())),
    ))
    .parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

fn field_path(input: &str) -> IResult<&str, Vec<String>> {
    many1(map(preceded(char('.'), identifier), |key: &str| {
        key.to_string()
    }))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    fn field(path: &[&str]) -> Node {
        Node::Placeholder(Reference::Field(
            path.iter().map(|s| s.to_string()).collect(),
        ))
    }

    fn kind(source: &str) -> ParseErrorKind {
        parse_template(source).unwrap_err().kind
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(parse_template("<p>hi</p>").unwrap(), vec![text("<p>hi</p>")]);
        assert_eq!(parse_template("").unwrap(), vec![]);
    }

    #[test]
    fn test_fields_with_and_without_spaces() {
        let nodes = parse_template("<h2>{{.Title}}</h2>{{ .Author.Name }}").unwrap();
        assert_eq!(
            nodes,
            vec![
                text("<h2>"),
                field(&["Title"]),
                text("</h2>"),
                field(&["Author", "Name"]),
            ]
        );
    }

    #[test]
    fn test_dot_and_bare_names() {
        let nodes = parse_template("{{.}}{{ yield }}{{Title}}").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Placeholder(Reference::Dot),
                Node::Placeholder(Reference::Name("yield".into())),
                Node::Placeholder(Reference::Name("Title".into())),
            ]
        );
    }

    #[test]
    fn test_unicode_identifiers() {
        assert_eq!(parse_template("{{.Ñame}}").unwrap(), vec![field(&["Ñame"])]);
        assert_eq!(parse_template("{{ .aÑ }}").unwrap(), vec![field(&["aÑ"])]);
        assert_eq!(
            parse_template("{{ _größe }}").unwrap(),
            vec![Node::Placeholder(Reference::Name("_größe".into()))]
        );
        assert_eq!(
            kind("{{ .1st }}"),
            ParseErrorKind::UnknownDirective {
                directive: ".1st".to_string()
            }
        );
    }

    #[test]
    fn test_stray_close_is_literal() {
        assert_eq!(parse_template("a }} b").unwrap(), vec![text("a }} b")]);
    }

    #[test]
    fn test_unterminated_reports_offset() {
        assert_eq!(
            kind("<p>{{.Title</p>"),
            ParseErrorKind::Unterminated { offset: 3 }
        );
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(
            kind("ab{{  }}"),
            ParseErrorKind::EmptyPlaceholder { offset: 2 }
        );
    }

    #[test]
    fn test_unknown_directives() {
        for (source, directive) in [
            ("{{ if .X }}", "if .X"),
            ("{{ range }}", "range"),
            ("{{ .A | upper }}", ".A | upper"),
            ("{{ $x }}", "$x"),
            ("{{ .A {{ .B }}", ".A {{ .B"),
            ("{{end}}", "end"),
        ] {
            assert_eq!(
                kind(source),
                ParseErrorKind::UnknownDirective {
                    directive: directive.to_string()
                },
                "source: {source}"
            );
        }
    }

    #[test]
    fn test_error_carries_template_source() {
        let err = parse_template("<nav>{{.A</nav>").unwrap_err();
        assert_eq!(err.template, "<nav>{{.A</nav>");
    }
}
