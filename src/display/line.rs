/// A 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Style for a span of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl SpanStyle {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set foreground color
    pub fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// A span of styled text: one token of the highlighted stream
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl StyledSpan {
    /// Create a new styled span
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled text, including its line terminator if it had one
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub spans: Vec<StyledSpan>,
}

/// A highlighted document, one entry per input line
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    /// Iterate over every span in order
    pub fn spans(&self) -> impl Iterator<Item = &StyledSpan> {
        self.lines.iter().flat_map(|line| line.spans.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_style_builder() {
        let style = SpanStyle::new().fg(Rgb::new(255, 0, 0)).bold().underline();
        assert_eq!(style.fg, Some(Rgb::new(255, 0, 0)));
        assert!(style.bold);
        assert!(style.underline);
        assert!(!style.italic);
        assert_eq!(SpanStyle::new(), SpanStyle::default());
    }

    #[test]
    fn test_spans_cross_lines_in_order() {
        let doc = Document {
            lines: vec![
                Line {
                    spans: vec![
                        StyledSpan::new("Hello", SpanStyle::new().bold()),
                        StyledSpan::new(", World!\n", SpanStyle::new()),
                    ],
                },
                Line {
                    spans: vec![StyledSpan::new("bye", SpanStyle::new())],
                },
            ],
        };

        let texts: Vec<&str> = doc.spans().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["Hello", ", World!\n", "bye"]);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Document::default().spans().count(), 0);
    }
}
