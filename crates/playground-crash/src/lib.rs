// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cross-platform crash reporting facade.
//!
//! Shared code reports failures through one API, [`initialize`] and [`track`],
//! while each platform binds the facade to its own native crash reporting SDK.
//! The configuration and exception types are chosen at compile time from the
//! active [`PlatformTracker`]:
//!
//! | target          | tracker                        | exception model     |
//! |-----------------|--------------------------------|---------------------|
//! | `android`       | [`AndroidTracker`]             | [`Throwable`]       |
//! | everything else | [`CocoaTracker`]               | [`NativeException`] |
//!
//! # Quick Start
//!
//! ```ignore
//! use playground_crash::{AsTrackableException, Configuration, ApiKey};
//!
//! // Once, from the host's entry point.
//! playground_crash::initialize(
//!     Configuration::new(ApiKey::new("0123456789abcdef0123456789abcdef"))
//!         .app_version("1.0.0-alpha"),
//! )?;
//!
//! // Anywhere a failure is observed.
//! if let Err(e) = "x".parse::<u32>() {
//!     playground_crash::track(e.as_trackable_exception())?;
//! }
//! ```
//!
//! # Android
//!
//! The Android SDK needs the application context to start. Hosts capture it
//! during startup, before anything calls `initialize`:
//!
//! ```ignore
//! use playground_crash::{AppStartup, ApplicationContext, ContextInitializer};
//!
//! AppStartup::new()
//!     .with(ContextInitializer::new())
//!     .start(&ApplicationContext::new("com.example.app", "/data/data/com.example.app"))?;
//! ```
//!
//! Without a captured context `initialize` silently does nothing and every
//! later `track` is dropped.

mod android;
mod cocoa;
mod context;
mod error;
mod facade;
mod sdk;
mod startup;
mod supervisor;
pub mod testing;
mod tracker;

pub use android::AndroidTracker;
pub use cocoa::CocoaTracker;
pub use context::{application_context, captured_context, ContextHolder};
pub use error::StartupError;
pub use facade::{global, initialize, install, track, CrashTracker};
pub use sdk::{AndroidSdk, CocoaSdk, TracingSdk};
pub use startup::{AppStartup, ContextInitializer, Initializer};
pub use supervisor::{SupervisorSummary, TaskFailure, TaskSupervisor};
pub use tracker::{ActiveTracker, AsTrackableException, Configuration, PlatformTracker, TrackableException};

// Re-export core types for convenience
pub use playground_crash_core::{
	ApiKey, ApplicationContext, NativeException, PanicError, Result, SdkError, Throwable, Trackable,
};
