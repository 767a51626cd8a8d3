// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

/// Resolved config file locations for the playground host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/playground/config.toml
	pub user_config_file: PathBuf,
	/// System config file: /etc/playground/config.toml
	pub system_config_file: PathBuf,
	/// Workspace config file: ./.playground/config.toml
	pub workspace_config_file: PathBuf,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config/playground/config.toml"),
			system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
			workspace_config_file: PathBuf::from(WORKSPACE_CONFIG_FILE),
		}
	}
}

pub const SYSTEM_CONFIG_FILE: &str = "/etc/playground/config.toml";
pub const WORKSPACE_CONFIG_FILE: &str = ".playground/config.toml";

/// Resolve config paths, honoring `XDG_CONFIG_HOME` and falling back to
/// `~/.config`.
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let config_home = match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
		Some(dir) => PathBuf::from(dir),
		None => dirs::home_dir()
			.ok_or(ConfigError::HomeDirNotFound)?
			.join(".config"),
	};
	let cwd = std::env::current_dir()?;

	tracing::debug!(config_home = %config_home.display(), "resolved XDG paths");

	Ok(PathsConfig {
		user_config_file: config_home.join("playground/config.toml"),
		system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
		workspace_config_file: cwd.join(WORKSPACE_CONFIG_FILE),
	})
}
