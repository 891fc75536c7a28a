use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig};
use crate::error::{PermfixError, Result};
use std::path::{Path, PathBuf};

/// File name looked up in each directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".permfix.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.permfix.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.permfix.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let home_dir = dirs::home_dir().ok_or(PermfixError::HomeDirectoryNotFound)?;
	discover_configs_with_home(start_dir, &home_dir)
}

/// Same as [`discover_configs`], with an explicit home directory.
pub fn discover_configs_with_home(start_dir: &Path, home_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	// Walk up the directory tree
	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			let config = parse_config_file(&config_path)?;
			let is_root = config.root;

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		match current_dir.parent() {
			Some(parent) => current_dir = parent.to_path_buf(),
			None => break,
		}
	}

	if let Some(user_config) = load_user_config(&configs, home_dir)? {
		configs.push(user_config);
	}

	tracing::debug!(count = configs.len(), "discovered config files");
	Ok(configs)
}

/// Load ~/.permfix.toml if it exists, isn't disabled, and wasn't already
/// picked up by the directory walk.
fn load_user_config(
	existing_configs: &[LoadedConfig],
	home_dir: &Path,
) -> Result<Option<LoadedConfig>> {
	for loaded in existing_configs {
		if let Some(ref env_var) = loaded.config.user_config_disable_env_var
			&& is_env_truthy(env_var)
		{
			tracing::debug!(env_var = %env_var, "user config lookup disabled");
			return Ok(None);
		}
	}

	let user_config_path = home_dir.join(CONFIG_FILE_NAME);

	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.is_file() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// Configs are given most specific first; for each setting the first config
/// that sets it wins.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		if merged.input.is_none() {
			merged.input = loaded.resolved_input();
		}
		if merged.style.is_none() {
			merged.style = loaded.config.style;
		}
		if merged.replace_all.is_none() {
			merged.replace_all = loaded.config.replace_all;
		}
		merged.sources.push(loaded.path.clone());
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(PermfixError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
