use std::io::{self, Write};

use syntect::highlighting::ThemeSet;

use crate::cli::Args;
use crate::format::{style_names, Formatter};
use crate::highlight::GrammarCatalog;

/// Catalog listings requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoAction {
    Styles,
    Lexers,
    Formatters,
}

impl InfoAction {
    /// The listing requested by `args`, if any
    pub fn from_args(args: &Args) -> Option<Self> {
        if args.style_list {
            Some(InfoAction::Styles)
        } else if args.lexer_list {
            Some(InfoAction::Lexers)
        } else if args.formatter_list {
            Some(InfoAction::Formatters)
        } else {
            None
        }
    }

    /// Print the listing: a header, then one entry per line
    pub fn run(
        self,
        catalog: &dyn GrammarCatalog,
        themes: &ThemeSet,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match self {
            InfoAction::Styles => {
                writeln!(out, "Available styles:")?;
                for name in style_names(themes) {
                    writeln!(out, "{}", name)?;
                }
            }
            InfoAction::Lexers => {
                writeln!(out, "Available lexers and aliases:")?;
                for entry in catalog.entries() {
                    if entry.aliases.is_empty() {
                        writeln!(out, "{}", entry.name)?;
                    } else {
                        writeln!(out, "{} [{}]", entry.name, entry.aliases.join(" "))?;
                    }
                }
            }
            InfoAction::Formatters => {
                writeln!(out, "Available formatters:")?;
                for name in Formatter::names() {
                    writeln!(out, "{}", name)?;
                }
            }
        }
        Ok(())
    }
}
