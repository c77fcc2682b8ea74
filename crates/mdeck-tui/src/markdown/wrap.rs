//! Width-aware wrapping of styled spans.
//!
//! Wraps at word boundaries for normal text, preserves whitespace inside
//! code spans, breaks over-long words by character, and supports hanging
//! indents (list markers on the first line, alignment on the rest).

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::style::{Style, StyledLine, StyledSpan};

/// Options for wrapping styled spans with hanging indents.
#[derive(Debug, Clone, Default)]
pub struct WrapOptions {
    /// Maximum display width for lines.
    pub width: usize,
    /// Prefix spans for the first line (e.g. "• " for a list bullet).
    pub first_prefix: Vec<StyledSpan>,
    /// Prefix spans for continuation lines (e.g. "  " for alignment).
    pub rest_prefix: Vec<StyledSpan>,
}

impl WrapOptions {
    /// Creates wrap options with just a width (no prefixes).
    pub fn new(width: usize) -> Self {
        Self {
            width,
            first_prefix: vec![],
            rest_prefix: vec![],
        }
    }
}

/// Wrap tokens: words carry text verbatim, spaces collapse, breaks force
/// a new line.
enum Token {
    Word { text: String, style: Style },
    Space(Style),
    Break,
}

fn tokenize(spans: &[StyledSpan]) -> Vec<Token> {
    let mut tokens = Vec::new();

    for span in spans {
        if span.style.preserves_whitespace() {
            // Code: whitespace is significant, only newlines split.
            for (i, part) in span.text.split('\n').enumerate() {
                if i > 0 {
                    tokens.push(Token::Break);
                }
                if !part.is_empty() {
                    tokens.push(Token::Word {
                        text: part.to_string(),
                        style: span.style,
                    });
                }
            }
            continue;
        }

        let mut word = String::new();
        for ch in span.text.chars() {
            if ch == '\n' {
                flush_word(&mut tokens, &mut word, span.style);
                tokens.push(Token::Break);
            } else if ch.is_whitespace() {
                flush_word(&mut tokens, &mut word, span.style);
                tokens.push(Token::Space(span.style));
            } else {
                word.push(ch);
            }
        }
        flush_word(&mut tokens, &mut word, span.style);
    }

    tokens
}

fn flush_word(tokens: &mut Vec<Token>, word: &mut String, style: Style) {
    if !word.is_empty() {
        tokens.push(Token::Word {
            text: std::mem::take(word),
            style,
        });
    }
}

fn prefix_width(prefix: &[StyledSpan]) -> usize {
    prefix.iter().map(|s| s.text.width()).sum()
}

/// Wraps styled spans while preserving style across line breaks.
pub fn wrap_styled_spans(spans: &[StyledSpan], opts: &WrapOptions) -> Vec<StyledLine> {
    if opts.width == 0 || spans.is_empty() {
        // Degenerate case: return everything as a single line.
        let mut all = opts.first_prefix.clone();
        all.extend(spans.iter().cloned());
        return vec![StyledLine { spans: all }];
    }

    let mut wrapper = Wrapper {
        out: Vec::new(),
        current: Vec::new(),
        used: 0,
        pending_space: None,
        first_prefix: &opts.first_prefix,
        rest_prefix: &opts.rest_prefix,
        first_width: opts.width.saturating_sub(prefix_width(&opts.first_prefix)).max(1),
        rest_width: opts.width.saturating_sub(prefix_width(&opts.rest_prefix)).max(1),
    };

    for token in tokenize(spans) {
        match token {
            Token::Break => {
                wrapper.flush();
            }
            Token::Space(style) => {
                if !wrapper.current.is_empty() {
                    wrapper.pending_space = Some(style);
                }
            }
            Token::Word { text, style } => wrapper.push_word(&text, style),
        }
    }

    if !wrapper.current.is_empty() {
        wrapper.flush();
    }
    if wrapper.out.is_empty() {
        wrapper.out.push(StyledLine {
            spans: opts.first_prefix.clone(),
        });
    }
    wrapper.out
}

struct Wrapper<'a> {
    out: Vec<StyledLine>,
    current: Vec<StyledSpan>,
    used: usize,
    pending_space: Option<Style>,
    first_prefix: &'a [StyledSpan],
    rest_prefix: &'a [StyledSpan],
    first_width: usize,
    rest_width: usize,
}

impl Wrapper<'_> {
    fn avail(&self) -> usize {
        if self.out.is_empty() {
            self.first_width
        } else {
            self.rest_width
        }
    }

    fn flush(&mut self) {
        let prefix = if self.out.is_empty() {
            self.first_prefix.to_vec()
        } else {
            self.rest_prefix.to_vec()
        };
        let mut spans = prefix;
        spans.append(&mut self.current);
        self.out.push(StyledLine { spans });
        self.used = 0;
        self.pending_space = None;
    }

    fn push_word(&mut self, text: &str, style: Style) {
        let word_width = text.width();
        let space_style = self.pending_space.take();
        let space_width = usize::from(space_style.is_some() && !self.current.is_empty());

        if self.used + space_width + word_width <= self.avail() {
            if space_width == 1 {
                self.current
                    .push(StyledSpan::new(" ", space_style.unwrap_or(style)));
            }
            self.current.push(StyledSpan::new(text, style));
            self.used += space_width + word_width;
        } else if word_width <= self.rest_width {
            // Fits on a fresh line; the separating space is dropped.
            self.flush();
            self.current.push(StyledSpan::new(text, style));
            self.used = word_width;
        } else {
            self.push_long_word(text, style);
        }
    }

    /// Breaks a word wider than a whole line by character.
    fn push_long_word(&mut self, text: &str, style: Style) {
        let mut chunk = String::new();
        let mut chunk_width = 0usize;
        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if ch_width > 0 && self.used + chunk_width + ch_width > self.avail() {
                if !chunk.is_empty() {
                    let done = std::mem::take(&mut chunk);
                    self.current.push(StyledSpan::new(done, style));
                    self.used += chunk_width;
                    chunk_width = 0;
                }
                if self.used > 0 {
                    self.flush();
                }
            }
            chunk.push(ch);
            chunk_width += ch_width;
        }
        if !chunk.is_empty() {
            self.current.push(StyledSpan::new(chunk, style));
            self.used += chunk_width;
        }
    }
}
