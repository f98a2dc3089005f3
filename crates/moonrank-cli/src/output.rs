use std::path::Path;

use moonrank_common::{MoonrankError, Result};
use serde::Serialize;

/// Serialize `value` as JSON and write it to `path`, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)?;
    std::fs::write(path, bytes).map_err(|e| MoonrankError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.json");
        let clusters = vec![vec!["a".to_string(), "b".to_string()]];
        write_json(&path, &clusters).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"[["a","b"]]"#);
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_json(&path, &Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, MoonrankError::Io { .. }));
    }
}
