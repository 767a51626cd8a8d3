// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use playground_crash_core::{ApiKey, Configuration, DEFAULT_MAX_BREADCRUMBS, DEFAULT_RELEASE_STAGE};
use serde::Serialize;

use crate::layer::{BugsnagLayer, ConfigLayer, LoggingLayer};
use crate::paths::PathsConfig;
use crate::ConfigError;

/// The final, validated configuration for the playground host.
#[derive(Debug, Clone, Serialize)]
pub struct PlaygroundConfig {
	pub bugsnag: BugsnagConfig,
	pub logging: LoggingConfig,

	/// Resolved config file locations (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

/// Crash reporting backend settings.
#[derive(Debug, Clone, Serialize)]
pub struct BugsnagConfig {
	/// Serialized as `[REDACTED]`.
	pub api_key: Option<ApiKey>,
	pub release_stage: String,
	pub app_version: Option<String>,
	pub app_type: Option<String>,
	pub enabled_release_stages: Option<Vec<String>>,
	pub auto_track_sessions: bool,
	pub auto_detect_errors: bool,
	pub max_breadcrumbs: usize,
	pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Default for BugsnagConfig {
	fn default() -> Self {
		Self {
			api_key: None,
			release_stage: DEFAULT_RELEASE_STAGE.to_string(),
			app_version: Some(env!("CARGO_PKG_VERSION").to_string()),
			app_type: None,
			enabled_release_stages: None,
			auto_track_sessions: true,
			auto_detect_errors: true,
			max_breadcrumbs: DEFAULT_MAX_BREADCRUMBS,
			metadata: BTreeMap::new(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	/// Directive understood by `tracing_subscriber::EnvFilter`.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Warn => "warn",
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Trace => "trace",
		}
	}
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"error" => Ok(Self::Error),
			"warn" | "warning" => Ok(Self::Warn),
			"info" => Ok(Self::Info),
			"debug" => Ok(Self::Debug),
			"trace" => Ok(Self::Trace),
			_ => Err(ConfigError::invalid_value(
				"logging.level",
				format!("unknown log level '{s}'"),
			)),
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

impl FromStr for LogFormat {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" => Ok(Self::Pretty),
			"json" => Ok(Self::Json),
			"compact" => Ok(Self::Compact),
			_ => Err(ConfigError::invalid_value(
				"logging.format",
				format!("unknown log format '{s}'"),
			)),
		}
	}
}

impl PlaygroundConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		Ok(Self {
			bugsnag: build_bugsnag_config(layer.bugsnag),
			logging: build_logging_config(layer.logging)?,
			paths,
		})
	}

	/// Settings for `playground_crash::initialize`.
	///
	/// Fails with [`ConfigError::MissingField`] when no API key is configured.
	pub fn crash_configuration(&self) -> Result<Configuration, ConfigError> {
		let bugsnag = &self.bugsnag;
		let api_key = bugsnag
			.api_key
			.clone()
			.ok_or_else(|| ConfigError::missing_field("bugsnag.api_key"))?;

		let mut config = Configuration::new(api_key)
			.release_stage(bugsnag.release_stage.clone())
			.auto_track_sessions(bugsnag.auto_track_sessions)
			.auto_detect_errors(bugsnag.auto_detect_errors)
			.max_breadcrumbs(bugsnag.max_breadcrumbs);
		if let Some(version) = &bugsnag.app_version {
			config = config.app_version(version.clone());
		}
		if let Some(app_type) = &bugsnag.app_type {
			config = config.app_type(app_type.clone());
		}
		if let Some(stages) = &bugsnag.enabled_release_stages {
			config = config.enabled_release_stages(stages.iter().cloned());
		}
		for (key, value) in &bugsnag.metadata {
			config = config.metadata(key.clone(), value.clone());
		}

		Ok(config)
	}
}

fn build_bugsnag_config(layer: Option<BugsnagLayer>) -> BugsnagConfig {
	let layer = layer.unwrap_or_default();
	let defaults = BugsnagConfig::default();

	BugsnagConfig {
		api_key: layer.api_key,
		release_stage: layer.release_stage.unwrap_or(defaults.release_stage),
		app_version: layer.app_version.or(defaults.app_version),
		app_type: layer.app_type,
		enabled_release_stages: layer.enabled_release_stages,
		auto_track_sessions: layer
			.auto_track_sessions
			.unwrap_or(defaults.auto_track_sessions),
		auto_detect_errors: layer
			.auto_detect_errors
			.unwrap_or(defaults.auto_detect_errors),
		max_breadcrumbs: layer.max_breadcrumbs.unwrap_or(defaults.max_breadcrumbs),
		metadata: layer.metadata.unwrap_or_default(),
	}
}

fn build_logging_config(layer: Option<LoggingLayer>) -> Result<LoggingConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	Ok(LoggingConfig {
		level: layer.level.as_deref().map(str::parse::<LogLevel>).transpose()?.unwrap_or_default(),
		format: layer.format.as_deref().map(str::parse::<LogFormat>).transpose()?.unwrap_or_default(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const KEY: &str = "0123456789abcdef0123456789abcdef";

	#[test]
	fn test_defaults_applied() {
		let config = PlaygroundConfig::from_layer(ConfigLayer::default(), PathsConfig::default())
			.unwrap();
		assert_eq!(config.bugsnag.release_stage, "production");
		assert_eq!(config.bugsnag.max_breadcrumbs, DEFAULT_MAX_BREADCRUMBS);
		assert_eq!(config.logging.level, LogLevel::Info);
		assert_eq!(config.logging.format, LogFormat::Pretty);
	}

	#[test]
	fn test_crash_configuration_requires_api_key() {
		let config = PlaygroundConfig::from_layer(ConfigLayer::default(), PathsConfig::default())
			.unwrap();
		match config.crash_configuration() {
			Err(ConfigError::MissingField(field)) => assert_eq!(field, "bugsnag.api_key"),
			other => panic!("expected missing field, got {other:?}"),
		}
	}

	#[test]
	fn test_crash_configuration_copies_settings() {
		let mut layer = ConfigLayer::default();
		let bugsnag = layer.bugsnag_mut();
		bugsnag.api_key = Some(ApiKey::new(KEY));
		bugsnag.release_stage = Some("staging".into());
		bugsnag.app_version = Some("1.0.0-alpha".into());
		bugsnag.enabled_release_stages = Some(vec!["staging".into()]);
		bugsnag.metadata = Some(BTreeMap::from([(
			"team".to_string(),
			serde_json::json!("mobile"),
		)]));

		let config = PlaygroundConfig::from_layer(layer, PathsConfig::default())
			.unwrap()
			.crash_configuration()
			.unwrap();

		assert_eq!(config.api_key.expose(), KEY);
		assert_eq!(config.release_stage, "staging");
		assert_eq!(config.app_version.as_deref(), Some("1.0.0-alpha"));
		assert!(config.release_stage_enabled());
		assert_eq!(config.metadata["team"], serde_json::json!("mobile"));
	}

	#[test]
	fn test_unknown_log_level_is_rejected() {
		let mut layer = ConfigLayer::default();
		layer.logging_mut().level = Some("loud".into());
		assert!(matches!(
			PlaygroundConfig::from_layer(layer, PathsConfig::default()),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[test]
	fn test_log_values_parse_case_insensitively() {
		assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
		assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
		assert!("xml".parse::<LogFormat>().is_err());
	}

	#[test]
	fn test_serialized_config_redacts_api_key() {
		let mut layer = ConfigLayer::default();
		layer.bugsnag_mut().api_key = Some(ApiKey::new(KEY));
		let config = PlaygroundConfig::from_layer(layer, PathsConfig::default()).unwrap();

		let json = serde_json::to_string(&config).unwrap();
		assert!(!json.contains(KEY));
		assert!(json.contains("[REDACTED]"));
		assert!(!format!("{config:?}").contains(KEY));
	}
}
