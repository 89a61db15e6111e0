use std::io::Write;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color as SyntectColor, FontStyle, Style as SyntectStyle, Theme};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::debug;

use crate::cli::UnmatchedPolicy;
use crate::config::EffectiveConfig;
use crate::display::{Document, Line, Rgb, SpanStyle, StyledSpan};
use crate::error::HypeError;
use crate::format::FormatSelection;
use crate::input::{line_terminator, trim_text, InputDocument};

use super::catalog::SyntectCatalog;
use super::lexer::{select_lexer, LexerQuery, SelectionOrigin};

/// Convert syntect color to our color
fn syntect_to_rgb(color: SyntectColor) -> Rgb {
    Rgb::new(color.r, color.g, color.b)
}

/// Convert syntect style to our span style
fn syntect_to_span_style(style: SyntectStyle) -> SpanStyle {
    // Background is left to the terminal
    let mut span = SpanStyle::new().fg(syntect_to_rgb(style.foreground));
    if style.font_style.contains(FontStyle::BOLD) {
        span = span.bold();
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        span = span.italic();
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        span = span.underline();
    }
    span
}

/// Tokenize `text` with the named grammar into a styled document.
/// Every byte of `text` ends up in exactly one span.
pub fn highlight_text(
    text: &str,
    grammar: &str,
    syntaxes: &SyntaxSet,
    theme: &Theme,
) -> Result<Document, syntect::Error> {
    let syntax = syntaxes
        .find_syntax_by_name(grammar)
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text());

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();

    for line in LinesWithEndings::from(text) {
        let ranges = highlighter.highlight_line(line, syntaxes)?;
        let spans = ranges
            .into_iter()
            .filter(|(_, fragment)| !fragment.is_empty())
            .map(|(style, fragment)| StyledSpan::new(fragment, syntect_to_span_style(style)))
            .collect();
        lines.push(Line { spans });
    }

    Ok(Document { lines })
}

/// Highlight one input and write it out, followed by a newline if the
/// content did not already end with one
pub fn process_document(
    input: &InputDocument,
    config: &EffectiveConfig,
    catalog: &SyntectCatalog,
    format: &FormatSelection,
    out: &mut dyn Write,
) -> Result<(), HypeError> {
    let text = if config.trim {
        trim_text(&input.text)
    } else {
        input.text.as_str()
    };

    let query = LexerQuery {
        explicit: config.lexer.as_deref(),
        path: input.source.path(),
        content: text,
    };
    let grammar = select_lexer(catalog, &query);

    if grammar.origin == SelectionOrigin::Fallback && config.unmatched == UnmatchedPolicy::Verbatim {
        debug!("No lexer for {}, writing verbatim", input.source_name());
        out.write_all(&input.bytes)?;
        let terminator = line_terminator(input.encoding);
        if !input.bytes.ends_with(terminator) {
            out.write_all(terminator)?;
        }
        return Ok(());
    }

    let document = highlight_text(text, &grammar.name, catalog.syntax_set(), &format.theme)
        .map_err(|source| HypeError::Highlight {
            source,
            path: input.source_name().into(),
        })?;

    format.formatter.render(&document, &format.theme, out)?;

    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}
