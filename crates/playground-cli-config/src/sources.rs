// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::env::load_secret_with;
use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	WorkspaceFile = 40,
	ExplicitFile = 45,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Defaults are applied when the runtime config is built.
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
	required: bool,
}

impl FileSource {
	/// System config: /etc/playground/config.toml
	pub fn system(paths: &PathsConfig) -> Self {
		Self::optional(paths.system_config_file.clone(), Precedence::SystemFile, "system-config")
	}

	/// User config: ~/.config/playground/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self::optional(paths.user_config_file.clone(), Precedence::UserFile, "user-config")
	}

	/// Workspace config: .playground/config.toml
	pub fn workspace(paths: &PathsConfig) -> Self {
		Self::optional(
			paths.workspace_config_file.clone(),
			Precedence::WorkspaceFile,
			"workspace-config",
		)
	}

	/// File named with `--config`; it must exist.
	pub fn explicit(path: PathBuf) -> Self {
		Self {
			path,
			precedence: Precedence::ExplicitFile,
			name: "explicit-config",
			required: true,
		}
	}

	pub fn optional(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
			required: false,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}

	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			if self.required {
				return Err(ConfigError::FileNotFound(self.path.clone()));
			}
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `PLAYGROUND_<FIELD>`. The API key also honors
/// `PLAYGROUND_BUGSNAG_API_KEY_FILE` and the vendor's `BUGSNAG_API_KEY`.
pub struct EnvSource {
	snapshot: Option<HashMap<String, String>>,
}

impl EnvSource {
	/// Reads the process environment at load time.
	pub fn new() -> Self {
		Self { snapshot: None }
	}

	/// Reads from a fixed set of variables instead of the process environment.
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			snapshot: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
		}
	}

	fn var(&self, name: &str) -> Option<String> {
		let value = match &self.snapshot {
			Some(vars) => vars.get(name).cloned(),
			None => std::env::var(name).ok(),
		};
		value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
	}

	fn bool_var(&self, name: &str) -> Result<Option<bool>, ConfigError> {
		match self.var(name) {
			Some(v) => match v.to_ascii_lowercase().as_str() {
				"1" | "true" | "yes" => Ok(Some(true)),
				"0" | "false" | "no" => Ok(Some(false)),
				_ => Err(ConfigError::invalid_value(name, format!("invalid boolean '{v}'"))),
			},
			None => Ok(None),
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = ConfigLayer::default();
		let lookup = |name: &str| self.var(name);

		let api_key = match load_secret_with("PLAYGROUND_BUGSNAG_API_KEY", lookup)? {
			Some(key) => Some(key),
			None => load_secret_with("BUGSNAG_API_KEY", lookup)?,
		};
		if let Some(key) = api_key {
			trace!("loaded API key from environment");
			layer.bugsnag_mut().api_key = Some(key);
		}

		if let Some(stage) = self.var("PLAYGROUND_RELEASE_STAGE") {
			layer.bugsnag_mut().release_stage = Some(stage);
		}
		if let Some(version) = self.var("PLAYGROUND_APP_VERSION") {
			layer.bugsnag_mut().app_version = Some(version);
		}
		if let Some(app_type) = self.var("PLAYGROUND_APP_TYPE") {
			layer.bugsnag_mut().app_type = Some(app_type);
		}
		if let Some(stages) = self.var("PLAYGROUND_ENABLED_RELEASE_STAGES") {
			layer.bugsnag_mut().enabled_release_stages = Some(
				stages
					.split(',')
					.map(|s| s.trim().to_string())
					.filter(|s| !s.is_empty())
					.collect(),
			);
		}
		if let Some(enabled) = self.bool_var("PLAYGROUND_AUTO_TRACK_SESSIONS")? {
			layer.bugsnag_mut().auto_track_sessions = Some(enabled);
		}
		if let Some(enabled) = self.bool_var("PLAYGROUND_AUTO_DETECT_ERRORS")? {
			layer.bugsnag_mut().auto_detect_errors = Some(enabled);
		}
		if let Some(max) = self.var("PLAYGROUND_MAX_BREADCRUMBS") {
			let max = max.parse().map_err(|_| {
				ConfigError::invalid_value(
					"PLAYGROUND_MAX_BREADCRUMBS",
					format!("invalid usize value '{max}'"),
				)
			})?;
			layer.bugsnag_mut().max_breadcrumbs = Some(max);
		}

		if let Some(level) = self.var("PLAYGROUND_LOG_LEVEL") {
			layer.logging_mut().level = Some(level);
		}
		if let Some(format) = self.var("PLAYGROUND_LOG_FORMAT") {
			layer.logging_mut().format = Some(format);
		}

		Ok(layer)
	}
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub config_file: Option<PathBuf>,
	pub release_stage: Option<String>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer::default();

		if let Some(ref stage) = self.overrides.release_stage {
			layer.bugsnag_mut().release_stage = Some(stage.clone());
		}
		if let Some(ref level) = self.overrides.log_level {
			layer.logging_mut().level = Some(level.clone());
		}
		if let Some(ref format) = self.overrides.log_format {
			layer.logging_mut().format = Some(format.clone());
		}

		Ok(layer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Cli > Precedence::Environment);
		assert!(Precedence::Environment > Precedence::ExplicitFile);
		assert!(Precedence::ExplicitFile > Precedence::WorkspaceFile);
		assert!(Precedence::WorkspaceFile > Precedence::UserFile);
		assert!(Precedence::UserFile > Precedence::SystemFile);
		assert!(Precedence::SystemFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.bugsnag.is_none());
		assert!(layer.logging.is_none());
	}

	#[test]
	fn test_missing_optional_file_returns_empty() {
		let source = FileSource::optional(
			PathBuf::from("/nonexistent/config.toml"),
			Precedence::UserFile,
			"test",
		);
		assert!(source.load().unwrap().bugsnag.is_none());
	}

	#[test]
	fn test_missing_explicit_file_is_an_error() {
		let source = FileSource::explicit(PathBuf::from("/nonexistent/config.toml"));
		assert!(matches!(source.load(), Err(ConfigError::FileNotFound(_))));
	}

	#[test]
	fn test_malformed_file_reports_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[bugsnag").unwrap();

		let source = FileSource::explicit(file.path().to_path_buf());
		match source.load() {
			Err(ConfigError::TomlParse { path, .. }) => assert_eq!(path, file.path()),
			other => panic!("expected parse error, got {other:?}"),
		}
	}

	#[test]
	fn test_env_source_reads_prefixed_vars() {
		let source = EnvSource::from_vars([
			("PLAYGROUND_BUGSNAG_API_KEY", "0123456789abcdef0123456789abcdef"),
			("PLAYGROUND_RELEASE_STAGE", "staging"),
			("PLAYGROUND_ENABLED_RELEASE_STAGES", "staging, production,"),
			("PLAYGROUND_AUTO_TRACK_SESSIONS", "false"),
			("PLAYGROUND_MAX_BREADCRUMBS", "25"),
			("PLAYGROUND_LOG_FORMAT", "json"),
		]);
		let layer = source.load().unwrap();
		let bugsnag = layer.bugsnag.unwrap();

		assert!(bugsnag.api_key.is_some());
		assert_eq!(bugsnag.release_stage.as_deref(), Some("staging"));
		assert_eq!(
			bugsnag.enabled_release_stages,
			Some(vec!["staging".to_string(), "production".to_string()])
		);
		assert_eq!(bugsnag.auto_track_sessions, Some(false));
		assert_eq!(bugsnag.max_breadcrumbs, Some(25));
		assert_eq!(layer.logging.unwrap().format.as_deref(), Some("json"));
	}

	#[test]
	fn test_prefixed_api_key_wins_over_vendor_var() {
		let source = EnvSource::from_vars([
			("PLAYGROUND_BUGSNAG_API_KEY", "prefixed"),
			("BUGSNAG_API_KEY", "vendor"),
		]);
		let key = source.load().unwrap().bugsnag.unwrap().api_key.unwrap();
		assert_eq!(key.expose(), "prefixed");

		let source = EnvSource::from_vars([("BUGSNAG_API_KEY", "vendor")]);
		let key = source.load().unwrap().bugsnag.unwrap().api_key.unwrap();
		assert_eq!(key.expose(), "vendor");
	}

	#[test]
	fn test_invalid_env_values_are_rejected() {
		let source = EnvSource::from_vars([("PLAYGROUND_MAX_BREADCRUMBS", "lots")]);
		assert!(matches!(source.load(), Err(ConfigError::InvalidValue { .. })));

		let source = EnvSource::from_vars([("PLAYGROUND_AUTO_DETECT_ERRORS", "maybe")]);
		assert!(matches!(source.load(), Err(ConfigError::InvalidValue { .. })));
	}

	#[test]
	fn test_cli_source_sets_overrides() {
		let source = CliSource::new(CliOverrides {
			release_stage: Some("development".into()),
			log_level: Some("trace".into()),
			..Default::default()
		});
		let layer = source.load().unwrap();
		assert_eq!(
			layer.bugsnag.unwrap().release_stage.as_deref(),
			Some("development")
		);
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("trace"));
	}
}
