mod file;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::cli::{Args, UnmatchedPolicy};

pub use file::ConfigFile;
use file::{discover, search_dirs};

/// Formatter used when neither the flags nor the config file name one
pub const DEFAULT_FORMATTER: &str = "terminal16m";

/// Style used when neither the flags nor the config file name one
pub const DEFAULT_STYLE: &str = "base16-ocean.dark";

/// Merged run-time settings, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Explicit lexer override
    pub lexer: Option<String>,
    pub formatter: String,
    pub style: String,
    /// Strip leading blank lines and trailing whitespace
    pub trim: bool,
    pub unmatched: UnmatchedPolicy,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            lexer: None,
            formatter: DEFAULT_FORMATTER.to_string(),
            style: DEFAULT_STYLE.to_string(),
            trim: false,
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl EffectiveConfig {
    /// Resolve from the standard search directories and the CLI flags
    pub fn resolve(args: &Args) -> Self {
        Self::resolve_in(args, &search_dirs())
    }

    /// Resolve using an explicit list of search directories
    pub fn resolve_in(args: &Args, dirs: &[PathBuf]) -> Self {
        let file = match discover(dirs) {
            Some(path) => match ConfigFile::load(&path) {
                Ok(config) => {
                    debug!("Using config file: {}", path.display());
                    config
                }
                Err(err) => {
                    warn!("Ignoring config file: {:#}", err);
                    ConfigFile::default()
                }
            },
            None => ConfigFile::default(),
        };

        Self::merge(args, file)
    }

    /// Apply precedence: CLI flag > config file value > default
    pub fn merge(args: &Args, file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            lexer: non_empty(args.lexer.clone()).or(non_empty(file.lexer)),
            formatter: non_empty(args.formatter.clone())
                .or(non_empty(file.formatter))
                .unwrap_or(defaults.formatter),
            style: non_empty(args.style.clone())
                .or(non_empty(file.style))
                .unwrap_or(defaults.style),
            trim: args.trim || file.trim.unwrap_or(defaults.trim),
            unmatched: args
                .unmatched
                .or(file.unmatched)
                .unwrap_or(defaults.unmatched),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::file::CONFIG_FILE_NAME;
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["hype"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = EffectiveConfig::merge(&args(&[]), ConfigFile::default());
        assert_eq!(config, EffectiveConfig::default());
        assert_eq!(config.formatter, "terminal16m");
        assert_eq!(config.style, "base16-ocean.dark");
        assert!(config.lexer.is_none());
        assert!(!config.trim);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = ConfigFile {
            lexer: Some("Go".into()),
            formatter: Some("terminal256".into()),
            style: Some("InspiredGitHub".into()),
            trim: Some(true),
            unmatched: Some(UnmatchedPolicy::Verbatim),
        };
        let config = EffectiveConfig::merge(&args(&[]), file);
        assert_eq!(config.lexer.as_deref(), Some("Go"));
        assert_eq!(config.formatter, "terminal256");
        assert_eq!(config.style, "InspiredGitHub");
        assert!(config.trim);
        assert_eq!(config.unmatched, UnmatchedPolicy::Verbatim);
    }

    #[test]
    fn test_flags_override_file() {
        let file = ConfigFile {
            lexer: Some("Go".into()),
            formatter: Some("terminal256".into()),
            style: Some("InspiredGitHub".into()),
            trim: None,
            unmatched: Some(UnmatchedPolicy::Verbatim),
        };
        let config = EffectiveConfig::merge(
            &args(&["-l", "rust", "-f", "noop", "-s", "base16-mocha.dark", "--unmatched", "plain"]),
            file,
        );
        assert_eq!(config.lexer.as_deref(), Some("rust"));
        assert_eq!(config.formatter, "noop");
        assert_eq!(config.style, "base16-mocha.dark");
        assert_eq!(config.unmatched, UnmatchedPolicy::Plain);
    }

    #[test]
    fn test_empty_names_count_as_unset() {
        let file = ConfigFile {
            style: Some("".into()),
            ..Default::default()
        };
        let config = EffectiveConfig::merge(&args(&["-l", ""]), file);
        assert!(config.lexer.is_none());
        assert_eq!(config.style, DEFAULT_STYLE);
    }

    #[test]
    fn test_resolve_in_reads_discovered_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "Style: Solarized (light)\nTrim: true\n").unwrap();

        let config = EffectiveConfig::resolve_in(&args(&[]), &[dir.path().to_path_buf()]);
        assert_eq!(config.style, "Solarized (light)");
        assert!(config.trim);
    }

    #[test]
    fn test_resolve_in_malformed_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "Style: [unclosed\n").unwrap();

        let config = EffectiveConfig::resolve_in(&args(&["-f", "noop"]), &[dir.path().to_path_buf()]);
        assert_eq!(config.style, DEFAULT_STYLE);
        assert_eq!(config.formatter, "noop");
    }
}
