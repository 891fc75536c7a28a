use crate::error::{PermfixError, Result};
use std::path::Path;

/// Read the whole input document as UTF-8 text.
///
/// A missing file, a permission problem and non-UTF-8 content all surface as
/// [`PermfixError::InputUnavailable`].
pub fn read_source(path: &Path) -> Result<String> {
	tracing::debug!(path = %path.display(), "reading input");
	std::fs::read_to_string(path).map_err(|source| PermfixError::InputUnavailable {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_read_existing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("server.rs");
		fs::write(&path, "line one\nline two").unwrap();

		assert_eq!(read_source(&path).unwrap(), "line one\nline two");
	}

	#[test]
	fn test_read_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("missing.rs");

		match read_source(&path).unwrap_err() {
			PermfixError::InputUnavailable { path: err_path, source } => {
				assert_eq!(err_path, path);
				assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
			}
			_ => panic!("Expected InputUnavailable error"),
		}
	}

	#[test]
	fn test_read_invalid_utf8() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("binary.rs");
		fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

		match read_source(&path).unwrap_err() {
			PermfixError::InputUnavailable { source, .. } => {
				assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
			}
			_ => panic!("Expected InputUnavailable error"),
		}
	}

	#[test]
	fn test_read_directory_fails() {
		let temp_dir = tempfile::tempdir().unwrap();
		let result = read_source(temp_dir.path());
		assert!(matches!(
			result,
			Err(PermfixError::InputUnavailable { .. })
		));
	}
}
