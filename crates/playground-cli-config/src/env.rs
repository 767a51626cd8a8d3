// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret loading with the `VAR` / `VAR_FILE` convention.

use std::fs;
use std::path::PathBuf;

use playground_crash_core::ApiKey;

use crate::ConfigError;

/// Load an API key from the process environment.
///
/// 1. If `{var}_FILE` is set, the key is read from that path with a single
///    trailing newline stripped.
/// 2. Otherwise, if `{var}` is set, its value is used directly.
/// 3. Otherwise, `Ok(None)`.
pub fn load_secret_env(var: &str) -> Result<Option<ApiKey>, ConfigError> {
	load_secret_with(var, |name| std::env::var(name).ok())
}

/// [`load_secret_env`] over an arbitrary variable lookup.
pub fn load_secret_with<F>(var: &str, lookup: F) -> Result<Option<ApiKey>, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let file_var = format!("{var}_FILE");

	if let Some(path) = lookup(&file_var) {
		if path.is_empty() {
			return Err(ConfigError::Secret(format!("secret file path in {file_var} is empty")));
		}

		let path = PathBuf::from(path);
		let content = fs::read_to_string(&path).map_err(|e| {
			ConfigError::Secret(format!("failed to read secret file at {}: {e}", path.display()))
		})?;

		let secret = content.trim_end_matches(['\r', '\n']);
		return Ok(Some(ApiKey::new(secret)));
	}

	Ok(lookup(var).filter(|v| !v.is_empty()).map(ApiKey::new))
}
