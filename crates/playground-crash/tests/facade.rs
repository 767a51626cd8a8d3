// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end behavior of the facade over both platform trackers.

use std::fmt;

use playground_crash::testing::RecordingSdk;
use playground_crash::{
	AndroidTracker, ApiKey, AppStartup, ApplicationContext, CocoaTracker, ContextHolder,
	ContextInitializer, CrashTracker, NativeException, SdkError, TaskSupervisor, Throwable,
	Trackable,
};

fn config() -> playground_crash_core::Configuration {
	playground_crash_core::Configuration::new(ApiKey::new("0123456789abcdef0123456789abcdef"))
		.app_version("1.0.0-alpha")
}

fn context() -> ApplicationContext {
	ApplicationContext::new("com.example.playground", "/data/data/com.example.playground")
}

#[derive(Debug)]
struct ArithmeticError;

impl fmt::Display for ArithmeticError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("/ by zero")
	}
}

impl std::error::Error for ArithmeticError {}

#[test]
fn cocoa_track_after_initialize_notifies_once() {
	let sdk = RecordingSdk::new();
	let tracker = CrashTracker::new(CocoaTracker::new(sdk.clone()));

	tracker.initialize(config()).unwrap();
	tracker
		.track(NativeException::new("NamedException", "Something happened"))
		.unwrap();

	let notified = sdk.notified();
	assert_eq!(notified.len(), 1);
	assert_eq!(notified[0].error_class, "NamedException");
	assert_eq!(
		sdk.configurations()[0].app_version.as_deref(),
		Some("1.0.0-alpha")
	);
}

#[test]
fn android_startup_then_initialize_notifies_with_original_error() {
	static HOLDER: ContextHolder = ContextHolder::new();
	let sdk = RecordingSdk::new();
	let tracker = CrashTracker::new(AndroidTracker::with_holder(sdk.clone(), &HOLDER));

	AppStartup::new()
		.with(ContextInitializer::with_holder(&HOLDER))
		.start(&context())
		.unwrap();
	tracker.initialize(config()).unwrap();
	tracker.track(Throwable::from_error(ArithmeticError)).unwrap();

	assert_eq!(sdk.start_contexts(), vec![Some(context())]);
	let notified = sdk.notified();
	assert_eq!(notified.len(), 1);
	assert!(notified[0].error_class.ends_with("ArithmeticError"));
	assert_eq!(notified[0].message, "/ by zero");
}

#[test]
fn android_without_context_never_reaches_the_sdk() {
	static HOLDER: ContextHolder = ContextHolder::new();
	let sdk = RecordingSdk::new();
	let tracker = CrashTracker::new(AndroidTracker::with_holder(sdk.clone(), &HOLDER));

	tracker.track(Throwable::from_error(ArithmeticError)).unwrap();
	tracker.initialize(config()).unwrap();
	tracker.track(Throwable::from_error(ArithmeticError)).unwrap();

	assert!(!tracker.is_initialized());
	assert_eq!(sdk.start_count(), 0);
	assert!(sdk.notified().is_empty());
}

#[test]
fn native_start_errors_propagate_unchanged() {
	let tracker = CrashTracker::new(CocoaTracker::new(RecordingSdk::failing_start(
		"invalid api key",
	)));

	match tracker.initialize(config()) {
		Err(SdkError::Native(message)) => assert_eq!(message, "invalid api key"),
		other => panic!("expected native error, got {other:?}"),
	}
}

#[tokio::test]
async fn two_failing_tasks_are_tracked_twice() {
	let sdk = RecordingSdk::new();
	let tracker = CrashTracker::new(CocoaTracker::new(sdk.clone()));
	tracker.initialize(config()).unwrap();

	let mut supervisor = TaskSupervisor::new(tracker.failure_sink());
	supervisor.spawn(async {
		let divisor = 0;
		assert!(divisor != 0, "divisor must be non-zero");
		Ok::<(), ArithmeticError>(())
	});
	supervisor.spawn(async { Err::<(), _>(ArithmeticError) });
	let summary = supervisor.join_all().await;

	assert_eq!(summary.failed, 2);
	let mut classes: Vec<_> = sdk.notified().into_iter().map(|n| n.error_class).collect();
	classes.sort();
	assert_eq!(classes, vec!["ArithmeticError", "PanicError"]);
}

#[cfg(not(target_os = "android"))]
#[test]
fn global_facade_delivers_through_tracing_sdk() {
	use playground_crash::AsTrackableException;

	playground_crash::initialize(config()).unwrap();
	playground_crash::track(ArithmeticError.as_trackable_exception()).unwrap();

	let tracker = playground_crash::global();
	assert!(tracker.is_initialized());
	assert_eq!(tracker.provider().sdk().delivered(), 1);
	assert_eq!(
		NativeException::from_error(ArithmeticError).error_class(),
		"ArithmeticError"
	);
}
