//! Composition: embedding pre-rendered fragments through `{{ yield }}`.

use crate::engine::{Engine, parse};
use crate::scope::Bindings;
use grr_template_core::TemplateError;
use grr_types::{Context, Fragment, Value, flatten};

/// The reserved name bound to the caller's fragments.
pub const YIELD: &str = "yield";

impl Engine {
    /// Renders `template` with an empty context, binding `yield` to the
    /// concatenation of `fragments`.
    ///
    /// Fragments are dropped if the template never yields.
    pub fn compose(
        &self,
        template: &str,
        fragments: &[Fragment],
    ) -> Result<Fragment, TemplateError> {
        self.compose_with(template, Context::new(), fragments)
    }

    /// Like [`Engine::compose`], but over `context` instead of an empty one.
    pub fn compose_with(
        &self,
        template: &str,
        context: impl Into<Value>,
        fragments: &[Fragment],
    ) -> Result<Fragment, TemplateError> {
        let template = parse(template)?;
        if !fragments.is_empty() && !template.uses_name(YIELD) {
            log::debug!(
                "Template does not yield; discarding {} fragments",
                fragments.len()
            );
        }

        let data = context.into();
        let scope = Bindings::new(&data).bind(YIELD, || flatten(fragments));
        self.execute(&template, &scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grr_types::join;

    fn frags(parts: &[&str]) -> Vec<Fragment> {
        parts.iter().map(|p| Fragment::from_trusted(*p)).collect()
    }

    #[test]
    fn test_yield_inserts_joined_fragments() {
        let children = frags(&["<nav></nav>", "<main></main>", "<footer></footer>"]);
        let out = Engine::default()
            .compose("<body>{{yield}}</body>", &children)
            .unwrap();
        assert_eq!(
            out.as_str(),
            format!("<body>{}</body>", join(&children, ""))
        );
    }

    #[test]
    fn test_each_yield_repeats_the_fragments() {
        let out = Engine::default()
            .compose("{{ yield }}|{{ yield }}", &frags(&["a", "b"]))
            .unwrap();
        assert_eq!(out, "ab|ab");
    }

    #[test]
    fn test_unused_fragments_are_discarded() {
        let out = Engine::default()
            .compose("<hr>", &frags(&["ignored"]))
            .unwrap();
        assert_eq!(out, "<hr>");
    }

    #[test]
    fn test_no_fragments_yields_nothing() {
        let out = Engine::default().compose("<p>{{yield}}</p>", &[]).unwrap();
        assert_eq!(out, "<p></p>");
    }

    #[test]
    fn test_compose_has_no_fields() {
        let err = Engine::default()
            .compose("{{.Title}}{{yield}}", &frags(&["x"]))
            .unwrap_err();
        assert_eq!(err.missing_field(), Some("Title"));
    }

    #[test]
    fn test_compose_with_context_and_yield() {
        let ctx = Context::new()
            .with("Copy", "© 2021")
            .with("yield", "shadowed");
        let out = Engine::default()
            .compose_with(
                "<footer>{{.Copy}}{{yield}}{{.yield}}</footer>",
                ctx,
                &frags(&["<a>1</a>"]),
            )
            .unwrap();
        assert_eq!(out, "<footer>© 2021<a>1</a>shadowed</footer>");
    }
}
