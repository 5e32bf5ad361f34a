//! Styled text model produced by the renderers
//!
//! A `Frame` is a screen's worth of lines. Renderers build frames without
//! touching the terminal; the terminal driver paints them.

use crossterm::style::Color;

/// A run of text with a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            bold: false,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// One terminal row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::from_spans(vec![Span::raw(text)])
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn extend(&mut self, other: Line) {
        self.spans.extend(other.spans);
    }

    /// Plain text of the line with styling dropped
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }
}

/// A full screen of rendered lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of every line, for assertions and logging
    pub fn text(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text().contains(needle))
    }
}
