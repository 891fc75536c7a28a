use crate::rewrite::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Input path used when neither the command line nor a config file names one.
pub const DEFAULT_INPUT: &str = "server.rs";

/// Top-level configuration from a `.permfix.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// If true, stop the directory cascade and jump directly to ~/.permfix.toml.
	#[serde(default)]
	pub root: bool,

	/// Default input file, relative to the directory holding this config.
	pub input: Option<PathBuf>,

	/// Replacement style for matched calls.
	pub style: Option<Style>,

	/// Rewrite every match on a line instead of only the first.
	pub replace_all: Option<bool>,

	/// Environment variable name that, if truthy, skips ~/.permfix.toml lookup.
	/// Useful for CI environments.
	pub user_config_disable_env_var: Option<String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl LoadedConfig {
	/// The configured input, resolved against this config's directory.
	pub fn resolved_input(&self) -> Option<PathBuf> {
		let input = self.config.input.as_ref()?;
		let base = self.path.parent().unwrap_or_else(|| Path::new(""));
		Some(base.join(input))
	}
}

/// Merged configuration from multiple config files in the cascade.
///
/// Each field holds the value from the most specific config that set it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedConfig {
	pub input: Option<PathBuf>,
	pub style: Option<Style>,
	pub replace_all: Option<bool>,

	/// Config files that contributed, most specific first.
	pub sources: Vec<PathBuf>,
}

/// Values supplied on the command line. They take precedence over config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub input: Option<PathBuf>,
	pub style: Option<Style>,

	/// `--all` can only switch global replacement on.
	pub replace_all: bool,
}

/// Effective settings for one rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub input: PathBuf,
	pub style: Style,
	pub replace_all: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			input: PathBuf::from(DEFAULT_INPUT),
			style: Style::default(),
			replace_all: false,
		}
	}
}

impl Settings {
	/// Resolve settings with precedence: command line, then config, then defaults.
	pub fn resolve(overrides: Overrides, merged: &MergedConfig) -> Self {
		let defaults = Settings::default();

		Settings {
			input: overrides
				.input
				.or_else(|| merged.input.clone())
				.unwrap_or(defaults.input),
			style: overrides
				.style
				.or(merged.style)
				.unwrap_or(defaults.style),
			replace_all: overrides.replace_all
				|| merged.replace_all.unwrap_or(defaults.replace_all),
		}
	}
}
