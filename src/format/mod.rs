mod html;
mod terminal;

use std::io::Write;

use syntect::highlighting::{Theme, ThemeSet};
use tracing::debug;

use crate::config::{EffectiveConfig, DEFAULT_STYLE};
use crate::display::Document;
use crate::error::HypeError;

use terminal::ColorDepth;

/// Output renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Formatter {
    /// 24-bit colour escapes
    #[default]
    TrueColor,
    /// xterm 256-colour palette
    Ansi256,
    /// 16 ANSI colours including the bright variants
    Ansi16,
    /// 8 basic ANSI colours
    Ansi8,
    /// `<pre>` block with inline styles
    Html,
    /// Text only
    Noop,
}

/// Every formatter name, including aliases
const CATALOG: &[(&str, Formatter)] = &[
    ("html", Formatter::Html),
    ("noop", Formatter::Noop),
    ("terminal", Formatter::Ansi8),
    ("terminal16", Formatter::Ansi16),
    ("terminal16m", Formatter::TrueColor),
    ("terminal256", Formatter::Ansi256),
    ("terminal8", Formatter::Ansi8),
];

impl Formatter {
    /// Look up a formatter by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
            .map(|&(_, formatter)| formatter)
    }

    /// All formatter names, sorted
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = CATALOG.iter().map(|&(name, _)| name).collect();
        names.sort_unstable();
        names
    }

    /// Write the document in this format
    pub fn render(&self, document: &Document, theme: &Theme, out: &mut dyn Write) -> Result<(), HypeError> {
        match self {
            Formatter::TrueColor => terminal::write_ansi(document, ColorDepth::TrueColor, out)?,
            Formatter::Ansi256 => terminal::write_ansi(document, ColorDepth::Palette256, out)?,
            Formatter::Ansi16 => terminal::write_ansi(document, ColorDepth::Palette16, out)?,
            Formatter::Ansi8 => terminal::write_ansi(document, ColorDepth::Palette8, out)?,
            Formatter::Html => html::write_html(document, theme, out)?,
            Formatter::Noop => {
                for span in document.spans() {
                    out.write_all(span.text.as_bytes())?;
                }
            }
        }
        Ok(())
    }
}

/// Resolve a formatter name, falling back to the default when unknown
pub fn resolve_formatter(name: &str) -> Formatter {
    Formatter::from_name(name).unwrap_or_else(|| {
        debug!("Unknown formatter '{}', using default", name);
        Formatter::default()
    })
}

/// Resolve a style name to a theme, falling back to the default style,
/// then to any theme, then to syntect's empty theme
pub fn resolve_style(themes: &ThemeSet, name: &str) -> (String, Theme) {
    if let Some(theme) = themes.themes.get(name) {
        return (name.to_string(), theme.clone());
    }

    debug!("Unknown style '{}', using default", name);
    themes
        .themes
        .get_key_value(DEFAULT_STYLE)
        .or_else(|| themes.themes.iter().next())
        .map(|(name, theme)| (name.clone(), theme.clone()))
        .unwrap_or_else(|| (DEFAULT_STYLE.to_string(), Theme::default()))
}

/// All style names, sorted
pub fn style_names(themes: &ThemeSet) -> Vec<&str> {
    // BTreeMap keys are already ordered
    themes.themes.keys().map(String::as_str).collect()
}

/// The renderer and theme pair used for every input of a run
#[derive(Debug, Clone)]
pub struct FormatSelection {
    pub formatter: Formatter,
    pub style_name: String,
    pub theme: Theme,
}

impl FormatSelection {
    pub fn new(formatter: Formatter, style: &str, themes: &ThemeSet) -> Self {
        let (style_name, theme) = resolve_style(themes, style);
        Self {
            formatter,
            style_name,
            theme,
        }
    }

    /// Resolve both names from the effective configuration
    pub fn resolve(config: &EffectiveConfig, themes: &ThemeSet) -> Self {
        let selection = Self::new(resolve_formatter(&config.formatter), &config.style, themes);
        debug!(
            "Using formatter {:?} with style '{}'",
            selection.formatter, selection.style_name
        );
        selection
    }
}
