//! Typed HTML for bot answers.
//!
//! An [`AnswerHtml`] is a sequence of fragments. Raw fragments carry model or
//! visitor text and are escaped on render; trusted fragments carry canned
//! markup and are emitted verbatim. Trusted fragments can only be created
//! from inside the classifier module, so anything rendered from an
//! `AnswerHtml` is safe to embed without further escaping.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Fragment {
    Raw(String),
    Trusted(String),
}

/// Rendered-on-demand answer body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerHtml {
    fragments: Vec<Fragment>,
}

impl AnswerHtml {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Append text that must be escaped before it reaches the page.
    pub(super) fn raw(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(Fragment::Raw(text.into()));
        self
    }

    /// Append pre-rendered markup.
    pub(super) fn trusted(mut self, markup: impl Into<String>) -> Self {
        self.fragments.push(Fragment::Trusted(markup.into()));
        self
    }

    /// Render to a string that may be embedded directly into HTML.
    pub fn render(&self) -> String {
        self.render_with(escape_text)
    }

    /// Raw text as written plus canned markup. For plain-text sinks such as
    /// transcripts, never for the page.
    pub fn render_unescaped(&self) -> String {
        self.render_with(str::to_string)
    }

    fn render_with(&self, raw: impl Fn(&str) -> String) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Raw(text) => out.push_str(&raw(text)),
                Fragment::Trusted(markup) => out.push_str(markup),
            }
        }
        out
    }
}

/// Escape text placed between tags. Quotes are left alone.
pub fn escape_text(text: &str) -> String {
    escape(text, false)
}

/// Escape a value placed inside a quoted attribute.
pub fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, quotes: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(
            escape_text(r#"<a href="x">Tom & Jerry's</a>"#),
            r#"&lt;a href="x"&gt;Tom &amp; Jerry's&lt;/a&gt;"#
        );
        assert_eq!(escape_text("plain text"), "plain text");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(
            escape_attr(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_escapes_raw_only() {
        let html = AnswerHtml::new()
            .raw("<b>model</b> ")
            .trusted("<a href='/x'>link</a>");
        assert_eq!(
            html.render(),
            "&lt;b&gt;model&lt;/b&gt; <a href='/x'>link</a>"
        );
    }

    #[test]
    fn test_render_unescaped_keeps_raw_text() {
        let html = AnswerHtml::new()
            .raw("We're 5 < 6 & proud. ")
            .trusted("<a href='/x'>link</a>");
        assert_eq!(
            html.render_unescaped(),
            "We're 5 < 6 & proud. <a href='/x'>link</a>"
        );
    }
}
