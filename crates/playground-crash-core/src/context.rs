// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application-wide handle required by the Android SDK.

use std::path::{Path, PathBuf};

/// The process-wide application context.
///
/// Android hands this to the host during startup; shared code never builds one
/// and only the Android tracker reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationContext {
	package_name: String,
	data_dir: PathBuf,
}

impl ApplicationContext {
	pub fn new(package_name: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
		Self {
			package_name: package_name.into(),
			data_dir: data_dir.into(),
		}
	}

	pub fn package_name(&self) -> &str {
		&self.package_name
	}

	/// Private storage directory of the application.
	pub fn data_dir(&self) -> &Path {
		&self.data_dir
	}
}
