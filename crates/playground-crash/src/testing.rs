// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Recording SDK for tests of code that reports crashes.

use std::sync::{Arc, Mutex, MutexGuard};

use playground_crash_core::{
	ApplicationContext, Configuration, NativeException, Result, SdkError, Throwable,
};

use crate::sdk::{AndroidSdk, CocoaSdk};

/// A report received by [`RecordingSdk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub error_class: String,
	pub message: String,
}

#[derive(Debug)]
struct Start {
	context: Option<ApplicationContext>,
	config: Configuration,
}

#[derive(Debug, Default)]
struct Recorded {
	starts: Vec<Start>,
	notified: Vec<Notification>,
}

/// Stands in for both native SDKs and records every call.
///
/// Clones share their recordings, so a test keeps one clone and hands the
/// other to the tracker.
#[derive(Debug, Clone, Default)]
pub struct RecordingSdk {
	recorded: Arc<Mutex<Recorded>>,
	start_error: Option<String>,
}

impl RecordingSdk {
	pub fn new() -> Self {
		Self::default()
	}

	/// An SDK whose start always fails with [`SdkError::Native`].
	pub fn failing_start(message: impl Into<String>) -> Self {
		Self {
			start_error: Some(message.into()),
			..Self::default()
		}
	}

	pub fn start_count(&self) -> usize {
		self.lock().starts.len()
	}

	/// Context passed to each accepted start; `None` for Cocoa starts.
	pub fn start_contexts(&self) -> Vec<Option<ApplicationContext>> {
		self.lock().starts.iter().map(|s| s.context.clone()).collect()
	}

	pub fn configurations(&self) -> Vec<Configuration> {
		self.lock().starts.iter().map(|s| s.config.clone()).collect()
	}

	pub fn notified(&self) -> Vec<Notification> {
		self.lock().notified.clone()
	}

	fn lock(&self) -> MutexGuard<'_, Recorded> {
		self.recorded.lock().unwrap_or_else(|e| e.into_inner())
	}

	fn record_start(&self, context: Option<ApplicationContext>, config: Configuration) -> Result<()> {
		if let Some(message) = &self.start_error {
			return Err(SdkError::Native(message.clone()));
		}
		self.lock().starts.push(Start { context, config });
		Ok(())
	}

	fn record_notification(&self, error_class: &str, message: &str) {
		self.lock().notified.push(Notification {
			error_class: error_class.to_string(),
			message: message.to_string(),
		});
	}
}

impl AndroidSdk for RecordingSdk {
	fn start(&self, context: &ApplicationContext, config: Configuration) -> Result<()> {
		self.record_start(Some(context.clone()), config)
	}

	fn notify(&self, exception: Throwable) -> Result<()> {
		let message = exception.message().unwrap_or_default();
		self.record_notification(exception.type_name(), &message);
		Ok(())
	}
}

impl CocoaSdk for RecordingSdk {
	fn start_with_configuration(&self, config: Configuration) -> Result<()> {
		self.record_start(None, config)
	}

	fn notify(&self, exception: NativeException) -> Result<()> {
		self.record_notification(exception.name(), exception.reason());
		Ok(())
	}
}
