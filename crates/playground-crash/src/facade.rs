// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Crash tracking facade and its process-wide instance.

use std::error::Error;
use std::sync::OnceLock;

use playground_crash_core::{Result, Trackable};
use tracing::{debug, error, info};

use crate::supervisor::TaskFailure;
use crate::tracker::{ActiveTracker, Configuration, PlatformTracker, TrackableException};

static GLOBAL: OnceLock<CrashTracker> = OnceLock::new();

/// Single entry point for crash reporting, bound to one platform tracker.
///
/// Calls are forwarded to the tracker unchanged; the facade adds logging and
/// conversion helpers but no state of its own.
pub struct CrashTracker<T: PlatformTracker = ActiveTracker> {
	provider: T,
}

impl<T: PlatformTracker> CrashTracker<T> {
	pub fn new(provider: T) -> Self {
		Self { provider }
	}

	/// Starts the native SDK. Call once, before the first `track`.
	pub fn initialize(&self, config: T::Configuration) -> Result<()> {
		info!("Initializing crash reporting");
		self.provider.initialize(config)
	}

	/// Reports a handled exception.
	pub fn track(&self, exception: T::Exception) -> Result<()> {
		debug!(error_class = exception.error_class(), "Tracking exception");
		self.provider.track(exception)
	}

	/// Converts an error into the tracker's exception model and reports it.
	pub fn track_error<E>(&self, error: E) -> Result<()>
	where
		E: Error + Send + Sync + 'static,
	{
		self.track(<T::Exception as Trackable>::from_error(error))
	}

	pub fn is_initialized(&self) -> bool {
		self.provider.is_started()
	}

	pub fn provider(&self) -> &T {
		&self.provider
	}

	pub fn into_provider(self) -> T {
		self.provider
	}

	/// A [`TaskSupervisor`](crate::TaskSupervisor) sink that tracks each failure.
	///
	/// Tracking errors are logged and swallowed so one bad report does not
	/// hide the remaining failures.
	pub fn failure_sink(&self) -> impl FnMut(TaskFailure) + '_ {
		move |failure| {
			if let Err(e) = self.track(failure.into_exception()) {
				error!(error = %e, "Failed to track task failure");
			}
		}
	}
}

/// Installs the process-wide tracker.
///
/// Fails, returning the tracker, if one was installed or lazily created
/// already.
pub fn install(tracker: ActiveTracker) -> std::result::Result<(), ActiveTracker> {
	GLOBAL
		.set(CrashTracker::new(tracker))
		.map_err(CrashTracker::into_provider)
}

/// The process-wide tracker, created with the default SDK binding on first use.
pub fn global() -> &'static CrashTracker {
	GLOBAL.get_or_init(|| CrashTracker::new(ActiveTracker::default()))
}

/// Initializes the process-wide tracker.
pub fn initialize(config: Configuration) -> Result<()> {
	global().initialize(config)
}

/// Reports an exception through the process-wide tracker.
pub fn track(exception: TrackableException) -> Result<()> {
	global().track(exception)
}
