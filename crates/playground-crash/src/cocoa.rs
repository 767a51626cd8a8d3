// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cocoa tracker: direct start and notify.

use std::sync::atomic::{AtomicBool, Ordering};

use playground_crash_core::{Configuration, NativeException, Result};

use crate::sdk::CocoaSdk;
use crate::tracker::PlatformTracker;

/// Forwards both calls straight to the Cocoa SDK.
///
/// The SDK reads process-wide state itself, so no context is needed. A
/// `track` before `initialize` still reaches the SDK, which decides what to
/// do with it.
pub struct CocoaTracker<S> {
	sdk: S,
	started: AtomicBool,
}

impl<S: CocoaSdk> CocoaTracker<S> {
	pub fn new(sdk: S) -> Self {
		Self {
			sdk,
			started: AtomicBool::new(false),
		}
	}

	pub fn sdk(&self) -> &S {
		&self.sdk
	}
}

impl<S: CocoaSdk + Default> Default for CocoaTracker<S> {
	fn default() -> Self {
		Self::new(S::default())
	}
}

impl<S: CocoaSdk> PlatformTracker for CocoaTracker<S> {
	type Configuration = Configuration;
	type Exception = NativeException;

	fn initialize(&self, config: Configuration) -> Result<()> {
		self.sdk.start_with_configuration(config)?;
		self.started.store(true, Ordering::SeqCst);
		Ok(())
	}

	fn track(&self, exception: NativeException) -> Result<()> {
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
	use playground_crash_core::ApiKey;

	#[test]
	fn test_forwards_start_and_notify() {
		let sdk = RecordingSdk::new();
		let tracker = CocoaTracker::new(sdk.clone());

		tracker
			.initialize(Configuration::new(ApiKey::new("0123456789abcdef0123456789abcdef")))
			.unwrap();
		tracker
			.track(NativeException::new("NamedException", "Something happened"))
			.unwrap();

		assert!(tracker.is_started());
		assert_eq!(sdk.start_contexts(), vec![None]);
		let notified = sdk.notified();
		assert_eq!(notified.len(), 1);
		assert_eq!(notified[0].error_class, "NamedException");
		assert_eq!(notified[0].message, "Something happened");
	}

	#[test]
	fn test_track_before_initialize_reaches_sdk() {
		let sdk = RecordingSdk::new();
		let tracker = CocoaTracker::new(sdk.clone());

		tracker.track(NativeException::new("Early", "before start")).unwrap();
		assert!(!tracker.is_started());
		assert_eq!(sdk.notified().len(), 1);
	}
}
