//! Rich output lines for the scrollback.
//!
//! Output is modeled as a small structured content type rather than
//! renderer markup: a line is a sequence of tagged spans (styled text or a
//! labeled link). The renderer decides what each style looks like, which
//! keeps the dispatcher testable without a terminal.

use serde::{Deserialize, Serialize};


/// Unique identifier of a scrollback line within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u64);


/// How a span of text should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    /// Ordinary body text.
    Plain,
    /// Emphasized text, e.g. section headings.
    Heading,
    /// Underlined text, e.g. project names.
    Underline,
    /// De-emphasized text, e.g. usage hints.
    Dim,
    /// Attention-grabbing text for reported outcomes (unknown command,
    /// project not found).
    Warning,
    /// Informational accents.
    Info,
    /// The shell prompt label in echoed command lines.
    Prompt,
}


/// A piece of renderable content within a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    /// Styled text.
    Text { text: String, style: SpanStyle },
    /// A labeled hyperlink.
    Link { label: String, url: String },
}

impl Span {
    /// Plain body text.
    pub fn plain(text: &str) -> Span {
        Span::Text {
            text: text.to_string(),
            style: SpanStyle::Plain,
        }
    }

    /// Text with an explicit style.
    pub fn styled(text: &str, style: SpanStyle) -> Span {
        Span::Text {
            text: text.to_string(),
            style,
        }
    }

    /// A link with a display label.
    pub fn link(label: &str, url: &str) -> Span {
        Span::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    /// The visible text of this span (the label, for links).
    pub fn text(&self) -> &str {
        match self {
            Span::Text { text, .. } => text,
            Span::Link { label, .. } => label,
        }
    }
}


/// One immutable line of scrollback output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub spans: Vec<Span>,
}

impl Line {
    /// Concatenated visible text of all spans.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_constructors() {
        assert_eq!(
            Span::plain("hi"),
            Span::Text {
                text: "hi".into(),
                style: SpanStyle::Plain
            }
        );
        assert_eq!(
            Span::styled("warn", SpanStyle::Warning),
            Span::Text {
                text: "warn".into(),
                style: SpanStyle::Warning
            }
        );
    }

    #[test]
    fn link_text_is_label() {
        let span = Span::link("github.com/mowhry", "https://github.com/mowhry");
        assert_eq!(span.text(), "github.com/mowhry");
    }

    #[test]
    fn plain_text_concatenates_spans() {
        let line = Line {
            id: LineId(7),
            spans: vec![
                Span::plain("URL: "),
                Span::link("example.org", "https://example.org"),
            ],
        };
        assert_eq!(line.plain_text(), "URL: example.org");
    }

    #[test]
    fn span_serde_round_trip() {
        let span = Span::styled("Projects", SpanStyle::Heading);
        let json = serde_json::to_string(&span).unwrap();
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
