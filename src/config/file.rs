use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::UnmatchedPolicy;

/// Name of the configuration file looked up in each search directory
pub const CONFIG_FILE_NAME: &str = ".hype";

/// Settings read from a `.hype` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigFile {
    pub lexer: Option<String>,
    pub formatter: Option<String>,
    pub style: Option<String>,
    pub trim: Option<bool>,
    pub unmatched: Option<UnmatchedPolicy>,
}

impl ConfigFile {
    /// Parse YAML text. An empty document yields all-unset settings.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// Directories searched for a config file, in priority order:
/// executable directory, home directory, current directory.
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }
    if let Some(home) = dirs::home_dir() {
        dirs.push(home);
    }
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    dirs
}

/// First existing config file among `dirs`. Later candidates are never consulted.
pub fn discover(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
