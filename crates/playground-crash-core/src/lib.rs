// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the playground crash reporting facade.
//!
//! This crate holds the values that cross the boundary between shared
//! application code and a platform's native crash reporting SDK. None of them
//! are inspected by the facade itself; they are built by host startup code or
//! at the call site that observed a failure and handed through unchanged.
//!
//! # Overview
//!
//! - [`Configuration`]: settings for the crash reporting backend (API key,
//!   release stage, app version, ...)
//! - [`Throwable`]: the Android exception model, a boxed error plus the name of
//!   its concrete type
//! - [`NativeException`]: the Cocoa exception model, a `name`/`reason` pair
//! - [`Trackable`]: conversion from generic errors and panics into either model
//! - [`ApplicationContext`]: the application-wide handle the Android SDK needs
//!   to start
//! - [`SdkError`]: failures reported by a native SDK call

pub mod api_key;
pub mod configuration;
pub mod context;
pub mod error;
pub mod exception;

pub use api_key::{ApiKey, REDACTED};
pub use configuration::{Configuration, DEFAULT_MAX_BREADCRUMBS, DEFAULT_RELEASE_STAGE};
pub use context::ApplicationContext;
pub use error::{Result, SdkError};
pub use exception::{panic_message, simple_type_name, NativeException, PanicError, Throwable, Trackable};
