//! Decoding JSON documents to dig into.

use std::{fs::File, io::{BufReader, Read}, path::Path};

use serde_json::Value;
use tracing::debug;

use crate::error::AppError;

/// Read and decode a JSON document from `path`.
pub fn load_path(path: &Path) -> Result<Value, AppError> {
    let file = File::open(path)?;
    let value = load_reader(BufReader::new(file))?;
    debug!(path = %path.display(), "source loaded");
    Ok(value)
}

/// Decode a JSON document from any reader (stdin, a file, a byte slice).
pub fn load_reader<R: Read>(reader: R) -> Result<Value, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_from_slice() {
        let value = load_reader(&br#"{"a": [1, 2]}"#[..]).unwrap();
        assert_eq!(value["a"][1], 2);
    }

    #[test]
    fn reads_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"[9, 8, 7]").unwrap();
        let value = load_path(f.path()).unwrap();
        assert_eq!(value, serde_json::json!([9, 8, 7]));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_path(Path::new("/nonexistent/source.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let result = load_reader(&b"{\"a\": "[..]);
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
