/// A styled span of text (UI-agnostic).
///
/// Minimal representation converted to ratatui spans at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// Creates an empty line.
    pub fn empty() -> Self {
        StyledLine { spans: vec![] }
    }
}

/// Semantic style identifiers (UI-agnostic).
///
/// Translated to actual terminal styles by the renderer, which keeps this
/// module free of terminal dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No styling.
    Plain,
    /// Regular paragraph text.
    Body,
    /// Inline code (`code`).
    CodeInline,
    /// Fenced code block content.
    CodeBlock,
    /// Code fence markers (rendered subtly).
    CodeFence,
    /// Emphasized text (*italic*).
    Emphasis,
    /// Strong text (**bold**).
    Strong,
    /// Heading level 1.
    H1,
    /// Heading level 2.
    H2,
    /// Heading level 3+.
    H3,
    /// Link text.
    Link,
    /// Blockquote content.
    BlockQuote,
    /// List bullet marker.
    ListBullet,
    /// List number marker.
    ListNumber,
}

impl Style {
    /// Whether whitespace inside spans of this style is significant.
    pub fn preserves_whitespace(self) -> bool {
        matches!(self, Style::CodeInline | Style::CodeBlock)
    }
}
