use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// What to do with input that no grammar recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Highlight with the plain text grammar
    #[default]
    Plain,
    /// Write the original bytes unchanged
    Verbatim,
}

/// hype - Format files for display using syntax highlighting
#[derive(Parser, Debug, Default)]
#[command(name = "hype")]
#[command(version)]
#[command(disable_version_flag = true)]
#[command(about = "Format files for display using syntax highlighting")]
#[command(long_about = None)]
pub struct Args {
    /// Input file(s) (use - for stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// The specific lexer to use if the default is not appropriate
    #[arg(short = 'l', long = "lexer", value_name = "NAME")]
    pub lexer: Option<String>,

    /// The output formatter to use [default: terminal16m]
    #[arg(short = 'f', long = "formatter", value_name = "NAME")]
    pub formatter: Option<String>,

    /// The theme name of the desired output style [default: base16-ocean.dark]
    #[arg(short = 's', long = "style", value_name = "NAME")]
    pub style: Option<String>,

    /// Strip leading blank lines and trailing whitespace before highlighting
    #[arg(short = 't', long = "trim")]
    pub trim: bool,

    /// Behaviour when no lexer matches the input
    #[arg(long = "unmatched", value_enum, value_name = "POLICY")]
    pub unmatched: Option<UnmatchedPolicy>,

    /// Show version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Show list of available styles (themes)
    #[arg(long = "style-list")]
    pub style_list: bool,

    /// Show list of available lexers
    #[arg(long = "lexer-list")]
    pub lexer_list: bool,

    /// Show list of available formatters
    #[arg(long = "formatter-list")]
    pub formatter_list: bool,
}

impl Args {
    /// Input paths, defaulting to stdin when none were given
    pub fn inputs(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.files.clone()
        }
    }
}
