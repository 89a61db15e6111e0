use std::io::{self, Read};

use crate::error::HypeError;

/// Read all content from stdin into a buffer
pub fn read_stdin() -> Result<Vec<u8>, HypeError> {
    let mut buffer = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buffer)
        .map_err(|source| HypeError::Io {
            source,
            path: std::path::PathBuf::from("stdin"),
        })?;
    Ok(buffer)
}
