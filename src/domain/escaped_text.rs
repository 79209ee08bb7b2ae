//! src/domain/escaped_text.rs

/// Text that is safe to interpolate into HTML.
///
/// The only way to build one is [`EscapedText::escape`], so anything holding an
/// `EscapedText` has already gone through HTML escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedText(String);

impl EscapedText {
    pub fn escape(raw: &str) -> Self {
        Self(htmlescape::encode_minimal(raw))
    }

    /// Inserts `<br />` before every line break, keeping the break itself.
    /// `\r\n` and `\n\r` count as a single break.
    pub fn with_line_breaks(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut chars = self.0.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\r' | '\n' => {
                    out.push_str("<br />");
                    out.push(c);
                    let pair = if c == '\r' { '\n' } else { '\r' };
                    if chars.peek() == Some(&pair) {
                        out.push(pair);
                        chars.next();
                    }
                }
                other => out.push(other),
            }
        }

        out
    }
}

impl AsRef<str> for EscapedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EscapedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::EscapedText;

    #[test]
    fn markup_is_escaped() {
        let text = EscapedText::escape(r#"<script>alert("hi")</script> & co"#);
        assert_eq!(
            text.as_ref(),
            "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn plain_text_is_left_alone() {
        assert_eq!(EscapedText::escape("Asha Rao").as_ref(), "Asha Rao");
    }

    #[test]
    fn every_kind_of_line_break_gets_a_br() {
        let text = EscapedText::escape("one\ntwo\r\nthree\rfour");
        assert_eq!(
            text.with_line_breaks(),
            "one<br />\ntwo<br />\r\nthree<br />\rfour"
        );
    }

    #[test]
    fn text_without_breaks_is_unchanged() {
        let text = EscapedText::escape("Need a lehenga for Saturday");
        assert_eq!(text.with_line_breaks(), "Need a lehenga for Saturday");
    }
}
