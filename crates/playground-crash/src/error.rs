// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for application startup.

use thiserror::Error;

/// Errors raised while running startup initializers.
#[derive(Debug, Error)]
pub enum StartupError {
	/// Startup already ran for this process.
	#[error("application startup already ran")]
	AlreadyStarted,

	/// The application context was captured before.
	#[error("application context already captured")]
	ContextAlreadyCaptured,

	/// An initializer depends on one that is not registered ahead of it.
	#[error("initializer {initializer} depends on {dependency}, which is not registered before it")]
	MissingDependency {
		initializer: &'static str,
		dependency: &'static str,
	},

	/// An initializer failed.
	#[error("initializer {initializer} failed: {message}")]
	Failed {
		initializer: &'static str,
		message: String,
	},
}
