//! Text escaping applied to scalar values before they are embedded.

/// How scalar text is made safe for the output markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Escape `&`, `<`, `>`, `"` and `'` for HTML/XML output.
    #[default]
    Html,
    /// Emit text unchanged, for plain-text output.
    None,
}

impl Escape {
    /// Appends `text` to `out`, escaped according to this mode.
    pub fn push_escaped(self, out: &mut String, text: &str) {
        match self {
            Escape::Html => push_html_escaped(out, text),
            Escape::None => out.push_str(text),
        }
    }

    /// Returns `text` escaped according to this mode.
    pub fn apply(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.push_escaped(&mut out, text);
        out
    }
}

fn push_html_escaped(out: &mut String, text: &str) {
    // Copy unescaped runs in one go.
    let mut last = 0;
    for (i, c) in text.char_indices() {
        let replacement = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&#34;",
            '\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(replacement);
        last = i + c.len_utf8();
    }
    out.push_str(&text[last..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escapes_markup_characters() {
        assert_eq!(
            Escape::Html.apply(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_html_keeps_multibyte_text() {
        assert_eq!(Escape::Html.apply("© 2021 <ü>"), "© 2021 &lt;ü&gt;");
    }

    #[test]
    fn test_none_is_identity() {
        assert_eq!(Escape::None.apply("<b>"), "<b>");
    }
}
