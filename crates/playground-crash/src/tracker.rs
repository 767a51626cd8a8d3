// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Platform tracker abstraction and compile-time platform selection.

use std::error::Error;

use playground_crash_core::{Result, Trackable};

use crate::sdk::TracingSdk;

/// Per-platform implementation behind the facade.
///
/// A tracker forwards both calls to its native SDK and keeps no state beyond
/// what that SDK needs. Errors returned by the SDK are passed back unchanged.
pub trait PlatformTracker: Send + Sync + 'static {
	/// Native configuration type consumed by `initialize`.
	type Configuration: Send + 'static;
	/// Native exception type consumed by `track`.
	type Exception: Trackable;

	fn initialize(&self, config: Self::Configuration) -> Result<()>;

	fn track(&self, exception: Self::Exception) -> Result<()>;

	/// Whether the native SDK was started by an accepted `initialize`.
	fn is_started(&self) -> bool;
}

/// Tracker compiled in for the current target.
#[cfg(target_os = "android")]
pub type ActiveTracker = crate::android::AndroidTracker<TracingSdk>;

/// Tracker compiled in for the current target.
#[cfg(not(target_os = "android"))]
pub type ActiveTracker = crate::cocoa::CocoaTracker<TracingSdk>;

/// Configuration type of the active platform.
pub type Configuration = <ActiveTracker as PlatformTracker>::Configuration;

/// Exception type of the active platform.
pub type TrackableException = <ActiveTracker as PlatformTracker>::Exception;

/// Converts an error into the active platform's [`TrackableException`].
///
/// On Android the error is wrapped as-is. Elsewhere a `NativeException` is
/// built from the error's type name and message.
pub trait AsTrackableException {
	fn as_trackable_exception(self) -> TrackableException;
}

impl<E> AsTrackableException for E
where
	E: Error + Send + Sync + 'static,
{
	fn as_trackable_exception(self) -> TrackableException {
		<TrackableException as Trackable>::from_error(self)
	}
}
