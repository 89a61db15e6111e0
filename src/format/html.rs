use std::io::Write;

use syntect::highlighting::{Color, FontStyle, Style, Theme};
use syntect::html::{start_highlighted_html_snippet, styled_line_to_highlighted_html, IncludeBackground};

use crate::display::{Document, Rgb, SpanStyle};
use crate::error::HypeError;

fn to_syntect_color(color: Rgb) -> Color {
    Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: 0xFF,
    }
}

/// Rebuild the syntect style for a span; unset colours come from the theme
fn to_syntect_style(style: &SpanStyle, theme: &Theme) -> Style {
    let mut font_style = FontStyle::empty();
    if style.bold {
        font_style |= FontStyle::BOLD;
    }
    if style.italic {
        font_style |= FontStyle::ITALIC;
    }
    if style.underline {
        font_style |= FontStyle::UNDERLINE;
    }

    Style {
        foreground: style
            .fg
            .map(to_syntect_color)
            .or(theme.settings.foreground)
            .unwrap_or(Color::BLACK),
        background: theme.settings.background.unwrap_or(Color::WHITE),
        font_style,
    }
}

/// Write the document as a `<pre>` block on the theme's background
pub fn write_html(document: &Document, theme: &Theme, out: &mut dyn Write) -> Result<(), HypeError> {
    let (opening, _) = start_highlighted_html_snippet(theme);
    out.write_all(opening.as_bytes())?;

    for line in &document.lines {
        let ranges: Vec<(Style, &str)> = line
            .spans
            .iter()
            .map(|span| (to_syntect_style(&span.style, theme), span.text.as_str()))
            .collect();
        let html = styled_line_to_highlighted_html(&ranges, IncludeBackground::No)?;
        out.write_all(html.as_bytes())?;
    }

    out.write_all(b"</pre>")?;
    Ok(())
}
