mod encoding;
mod file;
mod stdin;

use std::path::{Path, PathBuf};

use crate::error::HypeError;

pub use encoding::{decode_bytes, detect_encoding, line_terminator};
pub use file::read_file;
pub use stdin::read_stdin;

/// Represents the source of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from a file
    File(PathBuf),
    /// Read from stdin
    Stdin,
}

impl InputSource {
    /// Map a command-line argument to a source; `-` means stdin
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    /// Real filename, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::File(path) => Some(path),
            InputSource::Stdin => None,
        }
    }

    /// Name used in messages (filename or "stdin")
    pub fn name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}

/// The text to highlight, plus the bytes it was decoded from
#[derive(Debug)]
pub struct InputDocument {
    /// Original bytes, written back untouched by the verbatim policy
    pub bytes: Vec<u8>,
    /// Decoded text content
    pub text: String,
    pub source: InputSource,
    /// Detected encoding
    pub encoding: &'static str,
}

impl InputDocument {
    pub fn source_name(&self) -> String {
        self.source.name()
    }
}

/// Rejoin every line with a single `\n`, dropping any `\r\n` endings.
/// A lone `\r` is not a line break and is kept. Non-empty text always
/// ends with a newline afterwards.
pub fn normalize_line_endings(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        result.push_str(line);
        result.push('\n');
    }
    result
}

/// Remove leading blank lines and trailing whitespace
pub fn trim_text(text: &str) -> &str {
    let start = text
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .filter(|(_, c)| *c == '\n')
        .last()
        .map(|(i, _)| i + 1)
        .unwrap_or(0);
    text[start..].trim_end()
}

/// Load content from the given input source
pub fn load_content(source: InputSource) -> Result<InputDocument, HypeError> {
    let raw_bytes = match &source {
        InputSource::File(path) => read_file(path)?,
        InputSource::Stdin => read_stdin()?,
    };

    let encoding_name = detect_encoding(&raw_bytes);
    let text = decode_bytes(&raw_bytes, encoding_name);

    // Stream input is consumed line by line, so its endings are normalised
    let text = match source {
        InputSource::Stdin => normalize_line_endings(&text),
        InputSource::File(_) => text,
    };

    Ok(InputDocument {
        bytes: raw_bytes,
        text,
        source,
        encoding: encoding_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("main.rs")),
            InputSource::File(PathBuf::from("main.rs"))
        );
    }

    #[test]
    fn test_source_names() {
        assert_eq!(InputSource::Stdin.name(), "stdin");
        assert_eq!(InputSource::Stdin.path(), None);
        let file = InputSource::File(PathBuf::from("dir/file.py"));
        assert_eq!(file.path(), Some(Path::new("dir/file.py")));
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\nc"), "a\nb\nc\n");
        assert_eq!(normalize_line_endings("one\n"), "one\n");
        assert_eq!(normalize_line_endings(""), "");
        assert_eq!(normalize_line_endings("\n\n"), "\n\n");
    }

    #[test]
    fn test_normalize_keeps_lone_carriage_return() {
        assert_eq!(normalize_line_endings("one\rtwo\n"), "one\rtwo\n");
        assert_eq!(normalize_line_endings("a\r\r\nb"), "a\r\nb\n");
    }

    #[test]
    fn test_trim_text() {
        assert_eq!(trim_text("\n\n  fn main() {}\n\n  "), "  fn main() {}");
        assert_eq!(trim_text("x = 1\n"), "x = 1");
        assert_eq!(trim_text("   \n\t\n"), "");
        assert_eq!(trim_text("no change"), "no change");
    }

    #[test]
    fn test_load_file_keeps_crlf() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"line one\r\nline two").unwrap();

        let doc = load_content(InputSource::File(temp.path().to_path_buf())).unwrap();
        assert_eq!(doc.text, "line one\r\nline two");
        assert_eq!(doc.bytes, b"line one\r\nline two");
        assert_eq!(doc.encoding, "UTF-8");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_content(InputSource::File(PathBuf::from("nonexistent_file_12345.txt")))
            .unwrap_err();
        assert!(matches!(err, HypeError::Io { .. }));
        assert!(err.to_string().contains("nonexistent_file_12345.txt"));
    }
}
