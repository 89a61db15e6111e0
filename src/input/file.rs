use std::fs;
use std::path::Path;

use crate::error::HypeError;

/// Read file contents as raw bytes
pub fn read_file(path: &Path) -> Result<Vec<u8>, HypeError> {
    fs::read(path).map_err(|source| HypeError::Io {
        source,
        path: path.to_path_buf(),
    })
}
