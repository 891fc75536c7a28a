use crate::config::types::Config;
use crate::error::{PermfixError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content =
		std::fs::read_to_string(path).map_err(|source| PermfixError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	toml::from_str(content).map_err(|source| PermfixError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rewrite::Style;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(!config.root);
		assert!(config.input.is_none());
		assert!(config.style.is_none());
		assert!(config.replace_all.is_none());
		assert!(config.user_config_disable_env_var.is_none());
	}

	#[test]
	fn test_parse_full_config() {
		let content = r#"
root = true
input = "src/server.rs"
style = "joined"
replace-all = true
user-config-disable-env-var = "CI"
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.root);
		assert_eq!(config.input, Some(PathBuf::from("src/server.rs")));
		assert_eq!(config.style, Some(Style::Joined));
		assert_eq!(config.replace_all, Some(true));
		assert_eq!(config.user_config_disable_env_var, Some("CI".to_string()));
	}

	#[test]
	fn test_unknown_key_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str("pattern = \"foo\"", &path);

		match result.unwrap_err() {
			PermfixError::ConfigParseError { path: err_path, .. } => {
				assert_eq!(err_path, path);
			}
			_ => panic!("Expected ConfigParseError"),
		}
	}

	#[test]
	fn test_unknown_style_rejected() {
		let path = PathBuf::from("test.toml");
		assert!(parse_config_str("style = \"fancy\"", &path).is_err());
	}

	#[test]
	fn test_invalid_toml() {
		let path = PathBuf::from("test.toml");
		assert!(parse_config_str("invalid toml [[[", &path).is_err());
	}

	#[test]
	fn test_parse_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".permfix.toml");

		match parse_config_file(&path).unwrap_err() {
			PermfixError::ConfigReadError { path: err_path, .. } => {
				assert_eq!(err_path, path);
			}
			_ => panic!("Expected ConfigReadError"),
		}
	}
}
