// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for native SDK calls.

use thiserror::Error;

/// Errors raised by a native crash reporting SDK.
///
/// The facade never produces these itself; it hands them back to the caller
/// exactly as the SDK returned them.
#[derive(Debug, Error)]
pub enum SdkError {
	/// The SDK rejected the configuration it was started with.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// The SDK library is not linked into this build.
	#[error("native SDK unavailable: {0}")]
	Unavailable(String),

	/// Any other failure inside the SDK.
	#[error("native SDK call failed: {0}")]
	Native(String),
}

/// Result type for native SDK calls.
pub type Result<T> = std::result::Result<T, SdkError>;
