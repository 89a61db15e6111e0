use std::path::Path;

use syntect::parsing::SyntaxSet;
use tracing::warn;

use super::heuristic;

/// Syntax set compiled by the build script: syntect defaults plus `assets/syntaxes/`
static BUNDLED_SYNTAXES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/syntax_set.packdump"));

/// Name of the grammar that treats all text as undifferentiated
pub const PLAIN_TEXT: &str = "Plain Text";

/// One entry of the grammar listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarEntry {
    pub name: String,
    /// Alternative names the grammar answers to (file extensions)
    pub aliases: Vec<String>,
}

/// Source of grammars the lexer selector can query
pub trait GrammarCatalog {
    /// Grammar with this name or alias
    fn by_name(&self, name: &str) -> Option<String>;

    /// Grammar registered for this file name or extension
    fn by_filename(&self, path: &Path) -> Option<String>;

    /// Grammar inferred from the text itself
    fn by_content(&self, text: &str) -> Option<String>;

    /// Grammar used when nothing else matches
    fn fallback(&self) -> String;

    /// Every grammar, sorted by name
    fn entries(&self) -> Vec<GrammarEntry>;
}

/// Map common extensions to syntect grammar names where the
/// extension alone picks the wrong grammar or none at all
pub fn detect_language(extension: &str) -> Option<&'static str> {
    match extension.to_lowercase().as_str() {
        "rs" => Some("Rust"),
        "py" | "pyw" | "pyi" => Some("Python"),
        "js" | "jsx" | "mjs" | "cjs" => Some("JavaScript"),
        "c" | "h" => Some("C"),
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Some("C++"),
        "go" => Some("Go"),
        "java" => Some("Java"),
        "rb" => Some("Ruby"),
        "sh" | "bash" | "zsh" | "ksh" => Some("Bourne Again Shell (bash)"),
        "json" => Some("JSON"),
        "yaml" | "yml" => Some("YAML"),
        "xml" | "xsd" | "svg" => Some("XML"),
        "html" | "htm" | "xhtml" => Some("HTML"),
        "css" => Some("CSS"),
        "sql" => Some("SQL"),
        "md" | "markdown" | "mdown" | "mkd" | "mkdn" => Some("Markdown"),
        "php" => Some("PHP"),
        "scala" => Some("Scala"),
        "r" => Some("R"),
        "lua" => Some("Lua"),
        "pl" | "pm" => Some("Perl"),
        "hs" => Some("Haskell"),
        "erl" => Some("Erlang"),
        "clj" | "cljs" => Some("Clojure"),
        "cs" => Some("C#"),
        "mk" => Some("Makefile"),
        "diff" | "patch" => Some("Diff"),
        "bat" | "cmd" => Some("Batch File"),
        "txt" | "text" => Some(PLAIN_TEXT),
        _ => None,
    }
}

/// Registered entries like `Makefile`, `PKGBUILD` or `.bashrc` name whole
/// files; short or all-lowercase entries are plain extensions
fn is_file_name_entry(entry: &str) -> bool {
    entry.starts_with('.') || (entry.len() > 3 && entry.chars().any(|c| c.is_ascii_uppercase()))
}

/// `GrammarCatalog` backed by a syntect `SyntaxSet`
pub struct SyntectCatalog {
    syntaxes: SyntaxSet,
}

impl SyntectCatalog {
    pub fn new(syntaxes: SyntaxSet) -> Self {
        Self { syntaxes }
    }

    /// Load the syntax set compiled into the binary
    pub fn bundled() -> Self {
        match syntect::dumps::from_uncompressed_data::<SyntaxSet>(BUNDLED_SYNTAXES) {
            Ok(syntaxes) => Self::new(syntaxes),
            Err(err) => {
                warn!("Bundled syntaxes unreadable, using defaults: {}", err);
                Self::new(SyntaxSet::load_defaults_newlines())
            }
        }
    }

    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntaxes
    }

    fn by_whole_name(&self, name: &str) -> Option<String> {
        self.syntaxes
            .syntaxes()
            .iter()
            .find(|syntax| {
                syntax
                    .file_extensions
                    .iter()
                    .any(|entry| is_file_name_entry(entry) && entry.eq_ignore_ascii_case(name))
            })
            .map(|syntax| syntax.name.clone())
    }

    fn by_extension(&self, extension: &str) -> Option<String> {
        detect_language(extension)
            .and_then(|lang| self.syntaxes.find_syntax_by_name(lang))
            .or_else(|| self.syntaxes.find_syntax_by_extension(extension))
            .map(|syntax| syntax.name.clone())
    }
}

impl GrammarCatalog for SyntectCatalog {
    fn by_name(&self, name: &str) -> Option<String> {
        self.syntaxes
            .find_syntax_by_name(name)
            .or_else(|| self.syntaxes.find_syntax_by_token(name))
            .map(|syntax| syntax.name.clone())
    }

    fn by_filename(&self, path: &Path) -> Option<String> {
        let by_file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.by_whole_name(name));

        by_file_name.or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| self.by_extension(ext))
        })
    }

    fn by_content(&self, text: &str) -> Option<String> {
        heuristic::analyse(&self.syntaxes, text).map(|syntax| syntax.name.clone())
    }

    fn fallback(&self) -> String {
        self.syntaxes.find_syntax_plain_text().name.clone()
    }

    fn entries(&self) -> Vec<GrammarEntry> {
        let mut entries: Vec<GrammarEntry> = self
            .syntaxes
            .syntaxes()
            .iter()
            .map(|syntax| GrammarEntry {
                name: syntax.name.clone(),
                aliases: syntax.file_extensions.clone(),
            })
            .collect();

        entries.sort_by_key(|entry| entry.name.to_lowercase());
        entries.dedup_by(|a, b| a.name == b.name);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SyntectCatalog {
        SyntectCatalog::new(SyntaxSet::load_defaults_newlines())
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language("rs"), Some("Rust"));
        assert_eq!(detect_language("PY"), Some("Python"));
        assert_eq!(detect_language("jsx"), Some("JavaScript"));
        assert_eq!(detect_language("h"), Some("C"));
        assert_eq!(detect_language("xyz"), None);
    }

    #[test]
    fn test_by_name_exact_and_token() {
        let catalog = catalog();
        assert_eq!(catalog.by_name("Rust").as_deref(), Some("Rust"));
        assert_eq!(catalog.by_name("python").as_deref(), Some("Python"));
        assert_eq!(catalog.by_name("rs").as_deref(), Some("Rust"));
        assert_eq!(catalog.by_name("no-such-language"), None);
    }

    #[test]
    fn test_by_filename() {
        let catalog = catalog();
        assert_eq!(catalog.by_filename(Path::new("example.py")).as_deref(), Some("Python"));
        assert_eq!(catalog.by_filename(Path::new("src/main.rs")).as_deref(), Some("Rust"));
        assert_eq!(catalog.by_filename(Path::new("Makefile")).as_deref(), Some("Makefile"));
        assert_eq!(catalog.by_filename(Path::new("header.h")).as_deref(), Some("C"));
        assert_eq!(catalog.by_filename(Path::new("unknown.xyz")), None);
        assert_eq!(catalog.by_filename(Path::new("no_extension")), None);
    }

    #[test]
    fn test_whole_file_names() {
        let catalog = catalog();
        assert_eq!(catalog.by_filename(Path::new("build/makefile")).as_deref(), Some("Makefile"));
        assert_eq!(catalog.by_filename(Path::new("GNUmakefile")).as_deref(), Some("Makefile"));
    }

    #[test]
    fn test_bare_extension_token_is_not_a_file_name() {
        let catalog = catalog();
        assert_eq!(catalog.by_filename(Path::new("go")), None);
        assert_eq!(catalog.by_filename(Path::new("c")), None);
        assert_eq!(catalog.by_filename(Path::new("r")), None);
        assert_eq!(catalog.by_filename(Path::new("docs/rs")), None);
    }

    #[test]
    fn test_file_name_entries() {
        assert!(is_file_name_entry("Makefile"));
        assert!(is_file_name_entry("PKGBUILD"));
        assert!(is_file_name_entry(".bashrc"));
        assert!(!is_file_name_entry("go"));
        assert!(!is_file_name_entry("R"));
        assert!(!is_file_name_entry("json"));
    }

    #[test]
    fn test_fallback_is_plain_text() {
        assert_eq!(catalog().fallback(), PLAIN_TEXT);
    }

    #[test]
    fn test_entries_sorted_with_aliases() {
        let entries = catalog().entries();
        assert!(!entries.is_empty());

        let keys: Vec<String> = entries.iter().map(|e| e.name.to_lowercase()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        let rust = entries.iter().find(|e| e.name == "Rust").unwrap();
        assert!(rust.aliases.contains(&"rs".to_string()));
        assert!(entries.iter().any(|e| e.name == PLAIN_TEXT));
    }

    #[test]
    fn test_bundled_matches_defaults() {
        let bundled = SyntectCatalog::bundled();
        assert_eq!(bundled.by_name("Rust").as_deref(), Some("Rust"));
        assert_eq!(bundled.fallback(), PLAIN_TEXT);
    }
}
