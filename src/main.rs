use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use permfix_cli::config::{
	CONFIG_FILE_NAME, MergedConfig, Overrides, Settings, discover_configs,
	generate_init_template, load_merged_config, merge_configs, user_config_path,
};
use permfix_cli::logging::init_cli_logger;
use permfix_cli::rewrite::{Style, rewrite_file};

#[derive(Parser)]
#[command(name = "permfix")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting perms::build calls into permission string literals"
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Source file to rewrite [default: server.rs]
	#[arg(value_name = "INPUT")]
	input: Option<PathBuf>,

	/// How matched calls are rendered
	#[arg(long, value_enum)]
	style: Option<Style>,

	/// Rewrite every match on a line instead of only the first
	#[arg(long)]
	all: bool,

	/// Ignore .permfix.toml files
	#[arg(long)]
	no_config: bool,

	/// Log each rewritten line to stderr
	#[arg(short, long)]
	verbose: bool,

	/// Create a template .permfix.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .permfix.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display each config file in the cascade and the effective settings
	Show,
	/// Check all config files for errors without rewriting anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_cli_logger(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(),
				ConfigAction::Validate => handle_config_validate(),
			},
		};
	}

	let overrides = Overrides {
		input: cli.input,
		style: cli.style,
		replace_all: cli.all,
	};
	handle_rewrite(overrides, cli.no_config)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template();
	std::fs::write(&config_path, template)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rewrite(overrides: Overrides, no_config: bool) -> Result<ExitCode> {
	let merged = if no_config {
		MergedConfig::default()
	} else {
		let cwd = std::env::current_dir().context("Failed to get current directory")?;
		load_merged_config(&cwd).context("Failed to load configuration")?
	};

	let settings = Settings::resolve(overrides, &merged);
	tracing::debug!(
		input = %settings.input.display(),
		style = %settings.style,
		replace_all = settings.replace_all,
		configs = merged.sources.len(),
		"resolved settings"
	);

	let rewritten = rewrite_file(&settings)
		.with_context(|| format!("Failed to rewrite {}", settings.input.display()))?;

	let mut stdout = std::io::stdout().lock();
	writeln!(stdout, "{}", rewritten.text).context("Failed to write to stdout")?;
	stdout.flush().context("Failed to flush stdout")?;

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):\n");

		for loaded in &configs {
			println!("# Source: {}", loaded.path.display());
			println!("# root: {}", loaded.config.root);
			if let Some(input) = loaded.resolved_input() {
				println!("  input: {}", input.display());
			}
			if let Some(style) = loaded.config.style {
				println!("  style: {}", style);
			}
			if let Some(replace_all) = loaded.config.replace_all {
				println!("  replace-all: {}", replace_all);
			}
			if let Some(ref env_var) = loaded.config.user_config_disable_env_var {
				println!("  user-config-disable-env-var: {}", env_var);
			}
			println!();
		}
	}

	let merged = merge_configs(&configs);
	let settings = Settings::resolve(Overrides::default(), &merged);
	print_settings(&settings);

	// Show user config path
	if let Ok(user_path) = user_config_path() {
		println!();
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn print_settings(settings: &Settings) {
	println!("Effective settings:");
	println!("  input: {}", settings.input.display());
	println!("  style: {}", settings.style);
	println!("  replace-all: {}", settings.replace_all);
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!("  {}", loaded.path.display());
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
