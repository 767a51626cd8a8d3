// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Playground - demo host for the crash reporting facade
//!
//! Loads configuration, starts the global crash tracker and runs one demo
//! subcommand against it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playground_cli_config::{
	load_config_with_cli, CliOverrides, ConfigError, LogFormat, LoggingConfig, PlaygroundConfig,
};
use playground_crash::{AppStartup, ApplicationContext, ContextInitializer, TrackableException};
use playground_platform::{get_platform, Greeting};

mod repository;

use repository::CrashRepository;

/// Playground - crash reporting demo host
#[derive(Parser, Debug)]
#[command(name = "playground", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long)]
	json_logs: bool,

	/// Release stage reported with every crash (overrides config)
	#[arg(long)]
	release_stage: Option<String>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
	/// Print a greeting naming the current platform
	Greet,
	/// Report a handled exception
	Notify {
		/// Exception name
		#[arg(long, default_value = "NamedException")]
		name: String,
		/// Exception reason
		#[arg(long, default_value = "Something happened")]
		reason: String,
	},
	/// Run background tasks that fail and report each failure
	Crash,
	/// Print the effective configuration as JSON
	Config,
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		Self {
			config_file: args.config.clone(),
			release_stage: args.release_stage.clone(),
			log_level: args.log_level.clone(),
			log_format: if args.json_logs {
				Some("json".to_string())
			} else {
				None
			},
		}
	}
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

/// Captures the application context and starts the global tracker.
///
/// A missing API key leaves crash reporting off; any other configuration
/// problem is fatal.
fn init_crash_reporting(config: &PlaygroundConfig) -> Result<()> {
	let context = ApplicationContext::new(
		concat!("com.example.", env!("CARGO_PKG_NAME")),
		std::env::temp_dir().join("playground"),
	);
	AppStartup::new()
		.with(ContextInitializer::new())
		.start(&context)
		.context("failed to run startup initializers")?;

	match config.crash_configuration() {
		Ok(crash_config) => playground_crash::initialize(crash_config)
			.context("failed to initialize crash reporting")?,
		Err(ConfigError::MissingField(field)) => {
			warn!(field = %field, "no API key configured, crash reporting disabled");
		}
		Err(e) => return Err(e).context("invalid crash reporting configuration"),
	}

	Ok(())
}

#[cfg(not(target_os = "android"))]
fn named_exception(name: String, reason: String) -> TrackableException {
	playground_crash::NativeException::new(name, reason)
}

#[cfg(target_os = "android")]
fn named_exception(name: String, reason: String) -> TrackableException {
	#[derive(Debug, thiserror::Error)]
	#[error("{name}: {reason}")]
	struct NamedException {
		name: String,
		reason: String,
	}

	<TrackableException as playground_crash::Trackable>::from_error(NamedException { name, reason })
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let cli_overrides = CliOverrides::from(&args);
	let config = load_config_with_cli(cli_overrides).context("failed to load configuration")?;

	init_tracing(&config.logging);

	info!(
		platform = %get_platform().name(),
		release_stage = %config.bugsnag.release_stage,
		"starting playground"
	);

	init_crash_reporting(&config)?;

	match args.command.unwrap_or(Command::Greet) {
		Command::Greet => {
			println!("{}", Greeting::new().greet());
		}
		Command::Notify { name, reason } => {
			let tracker = playground_crash::global();
			if !tracker.is_initialized() {
				warn!("crash reporting not initialized, exception will not be delivered");
			}
			tracker
				.track(named_exception(name.clone(), reason.clone()))
				.context("failed to track exception")?;
			println!("Tracked {name}: {reason}");
		}
		Command::Crash => {
			let summary = CrashRepository::new(playground_crash::global()).crash().await;
			println!(
				"{} task(s) failed, {} completed, {} cancelled",
				summary.failed, summary.completed, summary.cancelled
			);
		}
		Command::Config => {
			let json =
				serde_json::to_string_pretty(&config).context("failed to serialize configuration")?;
			println!("{json}");
		}
	}

	Ok(())
}
