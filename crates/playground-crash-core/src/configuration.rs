// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Settings handed to a native crash reporting SDK at startup.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::api_key::ApiKey;

/// Release stage used when none is configured.
pub const DEFAULT_RELEASE_STAGE: &str = "production";

/// Breadcrumbs retained by the native SDK when none is configured.
pub const DEFAULT_MAX_BREADCRUMBS: usize = 100;

/// Configuration for the crash reporting backend.
///
/// Built once by host startup code and consumed by `initialize`. The facade
/// never reads these fields; they exist for the native SDK.
///
/// # Example
///
/// ```
/// use playground_crash_core::{ApiKey, Configuration};
///
/// let config = Configuration::new(ApiKey::new("0123456789abcdef0123456789abcdef"))
///     .release_stage("staging")
///     .app_version("1.0.0-alpha");
///
/// assert_eq!(config.release_stage, "staging");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
	pub api_key: ApiKey,
	pub release_stage: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub app_version: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub app_type: Option<String>,
	/// Release stages that may send reports. `None` enables every stage.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub enabled_release_stages: Option<BTreeSet<String>>,
	pub auto_track_sessions: bool,
	pub auto_detect_errors: bool,
	pub max_breadcrumbs: usize,
	#[serde(default)]
	pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Configuration {
	pub fn new(api_key: ApiKey) -> Self {
		Self {
			api_key,
			release_stage: DEFAULT_RELEASE_STAGE.to_string(),
			app_version: None,
			app_type: None,
			enabled_release_stages: None,
			auto_track_sessions: true,
			auto_detect_errors: true,
			max_breadcrumbs: DEFAULT_MAX_BREADCRUMBS,
			metadata: BTreeMap::new(),
		}
	}

	/// Sets the release stage, e.g. `production`, `staging`, `development`.
	pub fn release_stage(mut self, stage: impl Into<String>) -> Self {
		self.release_stage = stage.into();
		self
	}

	pub fn app_version(mut self, version: impl Into<String>) -> Self {
		self.app_version = Some(version.into());
		self
	}

	pub fn app_type(mut self, app_type: impl Into<String>) -> Self {
		self.app_type = Some(app_type.into());
		self
	}

	/// Restricts reporting to the given release stages.
	pub fn enabled_release_stages<I, S>(mut self, stages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.enabled_release_stages = Some(stages.into_iter().map(Into::into).collect());
		self
	}

	pub fn auto_track_sessions(mut self, enabled: bool) -> Self {
		self.auto_track_sessions = enabled;
		self
	}

	pub fn auto_detect_errors(mut self, enabled: bool) -> Self {
		self.auto_detect_errors = enabled;
		self
	}

	pub fn max_breadcrumbs(mut self, max: usize) -> Self {
		self.max_breadcrumbs = max;
		self
	}

	/// Adds a metadata entry attached to every report.
	pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
		self.metadata.insert(key.into(), value);
		self
	}

	/// Whether reports from the configured release stage should be sent.
	pub fn release_stage_enabled(&self) -> bool {
		match &self.enabled_release_stages {
			Some(stages) => stages.contains(&self.release_stage),
			None => true,
		}
	}
}
