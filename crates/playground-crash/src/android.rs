// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Android tracker: context-gated start, notify with the original error.

use std::sync::atomic::{AtomicBool, Ordering};

use playground_crash_core::{ApplicationContext, Configuration, Result, Throwable};
use tracing::{debug, warn};

use crate::context::{captured_context, ContextHolder};
use crate::sdk::AndroidSdk;
use crate::tracker::PlatformTracker;

/// Where the tracker finds the application context.
#[derive(Debug)]
enum ContextSource {
	Captured(&'static ContextHolder),
	Explicit(ApplicationContext),
}

impl ContextSource {
	fn get(&self) -> Option<&ApplicationContext> {
		match self {
			Self::Captured(holder) => holder.get(),
			Self::Explicit(context) => Some(context),
		}
	}
}

/// Forwards to the Android SDK once an application context is available.
///
/// If no context has been captured when `initialize` runs, the SDK is not
/// started and the call still succeeds; every later `track` is then dropped
/// without reaching the SDK.
pub struct AndroidTracker<S> {
	sdk: S,
	context: ContextSource,
	started: AtomicBool,
}

impl<S: AndroidSdk> AndroidTracker<S> {
	/// Reads the context captured by [`ContextInitializer`](crate::ContextInitializer).
	pub fn new(sdk: S) -> Self {
		Self::with_holder(sdk, captured_context())
	}

	/// Uses an explicitly supplied context instead of the captured one.
	pub fn with_context(sdk: S, context: ApplicationContext) -> Self {
		Self {
			sdk,
			context: ContextSource::Explicit(context),
			started: AtomicBool::new(false),
		}
	}

	pub fn with_holder(sdk: S, holder: &'static ContextHolder) -> Self {
		Self {
			sdk,
			context: ContextSource::Captured(holder),
			started: AtomicBool::new(false),
		}
	}

	pub fn sdk(&self) -> &S {
		&self.sdk
	}
}

impl<S: AndroidSdk + Default> Default for AndroidTracker<S> {
	fn default() -> Self {
		Self::new(S::default())
	}
}

impl<S: AndroidSdk> PlatformTracker for AndroidTracker<S> {
	type Configuration = Configuration;
	type Exception = Throwable;

	fn initialize(&self, config: Configuration) -> Result<()> {
		let Some(context) = self.context.get() else {
			warn!("Application context not captured, crash reporting disabled");
			return Ok(());
		};

		self.sdk.start(context, config)?;
		self.started.store(true, Ordering::SeqCst);
		Ok(())
	}

	fn track(&self, exception: Throwable) -> Result<()> {
		if !self.started.load(Ordering::SeqCst) {
			debug!(
				error_class = exception.type_name(),
				"Crash reporting not started, dropping exception"
			);
			return Ok(());
		}

		self.sdk.notify(exception)
	}

	fn is_started(&self) -> bool {
		self.started.load(Ordering::SeqCst)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::RecordingSdk;
	use playground_crash_core::{ApiKey, SdkError, Trackable};

	fn config() -> Configuration {
		Configuration::new(ApiKey::new("0123456789abcdef0123456789abcdef"))
	}

	fn context() -> ApplicationContext {
		ApplicationContext::new("com.example.app", "/data/data/com.example.app")
	}

	fn error() -> Throwable {
		Throwable::from_error(std::fmt::Error)
	}

	#[test]
	fn test_missing_context_makes_initialize_a_no_op() {
		static HOLDER: ContextHolder = ContextHolder::new();
		let sdk = RecordingSdk::new();
		let tracker = AndroidTracker::with_holder(sdk.clone(), &HOLDER);

		tracker.initialize(config()).unwrap();
		tracker.track(error()).unwrap();

		assert!(!tracker.is_started());
		assert_eq!(sdk.start_count(), 0);
		assert!(sdk.notified().is_empty());
	}

	#[test]
	fn test_track_before_initialize_skips_notify() {
		let sdk = RecordingSdk::new();
		let tracker = AndroidTracker::with_context(sdk.clone(), context());

		tracker.track(error()).unwrap();
		assert!(sdk.notified().is_empty());
	}

	#[test]
	fn test_captured_context_is_passed_to_start() {
		static HOLDER: ContextHolder = ContextHolder::new();
		let sdk = RecordingSdk::new();
		let tracker = AndroidTracker::with_holder(sdk.clone(), &HOLDER);

		HOLDER.capture(context()).unwrap();
		tracker.initialize(config()).unwrap();
		tracker.track(error()).unwrap();

		assert!(tracker.is_started());
		assert_eq!(sdk.start_contexts(), vec![Some(context())]);
		assert_eq!(sdk.notified().len(), 1);
		assert_eq!(sdk.notified()[0].error_class, "core::fmt::Error");
	}

	#[test]
	fn test_sdk_start_error_propagates() {
		let sdk = RecordingSdk::failing_start("bad api key");
		let tracker = AndroidTracker::with_context(sdk.clone(), context());

		let result = tracker.initialize(config());
		assert!(matches!(result, Err(SdkError::Native(_))));
		assert!(!tracker.is_started());

		tracker.track(error()).unwrap();
		assert!(sdk.notified().is_empty());
	}
}
