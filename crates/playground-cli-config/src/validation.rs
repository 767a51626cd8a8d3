// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use tracing::warn;

use crate::runtime::PlaygroundConfig;
use crate::ConfigError;

/// Upper bound the backend accepts for retained breadcrumbs.
const MAX_BREADCRUMBS_LIMIT: usize = 500;

/// Validate the configuration.
///
/// Returns Ok(()) if valid, or the first rule that failed.
pub fn validate_config(config: &PlaygroundConfig) -> Result<(), ConfigError> {
	validate_bugsnag(config)?;
	Ok(())
}

fn validate_bugsnag(config: &PlaygroundConfig) -> Result<(), ConfigError> {
	let bugsnag = &config.bugsnag;

	match &bugsnag.api_key {
		Some(key) if !key.is_well_formed() => {
			return Err(ConfigError::invalid_value(
				"bugsnag.api_key",
				format!(
					"must be 32 hexadecimal characters (got {} characters)",
					key.expose().chars().count()
				),
			));
		}
		Some(_) => {}
		None => warn!("bugsnag.api_key not configured, crash reporting will stay disabled"),
	}

	if bugsnag.release_stage.trim().is_empty() {
		return Err(ConfigError::invalid_value(
			"bugsnag.release_stage",
			"release_stage cannot be empty",
		));
	}

	if let Some(stages) = &bugsnag.enabled_release_stages {
		if stages.iter().any(|s| s.trim().is_empty()) {
			return Err(ConfigError::invalid_value(
				"bugsnag.enabled_release_stages",
				"release stages cannot be empty",
			));
		}
		if !stages.contains(&bugsnag.release_stage) {
			warn!(
				release_stage = %bugsnag.release_stage,
				enabled = ?stages,
				"release stage not enabled, reports will be dropped"
			);
		}
	}

	if bugsnag.max_breadcrumbs > MAX_BREADCRUMBS_LIMIT {
		return Err(ConfigError::invalid_value(
			"bugsnag.max_breadcrumbs",
			format!("must be at most {MAX_BREADCRUMBS_LIMIT}"),
		));
	}

	Ok(())
}
