// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use std::collections::BTreeMap;

use playground_crash_core::ApiKey;
use serde::Deserialize;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub bugsnag: Option<BugsnagLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BugsnagLayer {
	#[serde(default)]
	pub api_key: Option<ApiKey>,
	#[serde(default)]
	pub release_stage: Option<String>,
	#[serde(default)]
	pub app_version: Option<String>,
	#[serde(default)]
	pub app_type: Option<String>,
	#[serde(default)]
	pub enabled_release_stages: Option<Vec<String>>,
	#[serde(default)]
	pub auto_track_sessions: Option<bool>,
	#[serde(default)]
	pub auto_detect_errors: Option<bool>,
	#[serde(default)]
	pub max_breadcrumbs: Option<usize>,
	#[serde(default)]
	pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub format: Option<String>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.bugsnag, other.bugsnag, BugsnagLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}

	pub(crate) fn bugsnag_mut(&mut self) -> &mut BugsnagLayer {
		self.bugsnag.get_or_insert_with(BugsnagLayer::default)
	}

	pub(crate) fn logging_mut(&mut self) -> &mut LoggingLayer {
		self.logging.get_or_insert_with(LoggingLayer::default)
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

fn replace_if_some<T>(target: &mut Option<T>, source: Option<T>) {
	if source.is_some() {
		*target = source;
	}
}

impl BugsnagLayer {
	fn merge(&mut self, other: BugsnagLayer) {
		replace_if_some(&mut self.api_key, other.api_key);
		replace_if_some(&mut self.release_stage, other.release_stage);
		replace_if_some(&mut self.app_version, other.app_version);
		replace_if_some(&mut self.app_type, other.app_type);
		replace_if_some(&mut self.enabled_release_stages, other.enabled_release_stages);
		replace_if_some(&mut self.auto_track_sessions, other.auto_track_sessions);
		replace_if_some(&mut self.auto_detect_errors, other.auto_detect_errors);
		replace_if_some(&mut self.max_breadcrumbs, other.max_breadcrumbs);
		// Metadata keys accumulate across layers.
		merge_option(&mut self.metadata, other.metadata, |t, s| t.extend(s));
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		replace_if_some(&mut self.level, other.level);
		replace_if_some(&mut self.format, other.format);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_parse_toml_layer() {
		let layer: ConfigLayer = toml::from_str(
			r#"
			[bugsnag]
			api_key = "0123456789abcdef0123456789abcdef"
			release_stage = "staging"
			enabled_release_stages = ["staging", "production"]

			[bugsnag.metadata]
			team = "mobile"

			[logging]
			level = "debug"
			"#,
		)
		.unwrap();

		let bugsnag = layer.bugsnag.unwrap();
		assert_eq!(
			bugsnag.api_key.as_ref().map(ApiKey::expose),
			Some("0123456789abcdef0123456789abcdef")
		);
		assert_eq!(bugsnag.release_stage.as_deref(), Some("staging"));
		assert_eq!(bugsnag.metadata.unwrap()["team"], serde_json::json!("mobile"));
		assert_eq!(layer.logging.unwrap().level.as_deref(), Some("debug"));
	}

	#[test]
	fn test_unknown_keys_are_rejected() {
		let result: Result<ConfigLayer, _> = toml::from_str("[bugsnag]\napi_kye = \"x\"\n");
		assert!(result.is_err());
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = ConfigLayer::default();
		base.bugsnag_mut().release_stage = Some("staging".into());
		base.bugsnag_mut().app_version = Some("1.0.0".into());

		let mut over = ConfigLayer::default();
		over.bugsnag_mut().release_stage = Some("production".into());

		base.merge(over);
		let bugsnag = base.bugsnag.unwrap();
		assert_eq!(bugsnag.release_stage.as_deref(), Some("production"));
		assert_eq!(bugsnag.app_version.as_deref(), Some("1.0.0"));
	}

	#[test]
	fn test_metadata_accumulates() {
		let mut base = ConfigLayer::default();
		base.bugsnag_mut().metadata = Some(BTreeMap::from([
			("a".to_string(), serde_json::json!(1)),
			("b".to_string(), serde_json::json!(1)),
		]));

		let mut over = ConfigLayer::default();
		over.bugsnag_mut().metadata =
			Some(BTreeMap::from([("b".to_string(), serde_json::json!(2))]));

		base.merge(over);
		let metadata = base.bugsnag.unwrap().metadata.unwrap();
		assert_eq!(metadata["a"], serde_json::json!(1));
		assert_eq!(metadata["b"], serde_json::json!(2));
	}

	proptest! {
		#[test]
		fn later_layer_wins(first in "[a-z]{1,8}", second in proptest::option::of("[a-z]{1,8}")) {
			let mut base = ConfigLayer::default();
			base.logging_mut().level = Some(first.clone());

			let mut over = ConfigLayer::default();
			over.logging_mut().level = second.clone();

			base.merge(over);
			let expected = second.unwrap_or(first);
			prop_assert_eq!(base.logging.unwrap().level, Some(expected));
		}
	}
}
