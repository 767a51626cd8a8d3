// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Native SDK boundary.
//!
//! These traits are the minimal surface the trackers need from a vendor crash
//! reporting library. Batching, persistence and upload of reports belong to
//! the implementation behind them.

use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use chrono::Utc;
use playground_crash_core::{ApplicationContext, Configuration, NativeException, Result, Throwable};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Entry points of the Android crash reporting SDK.
pub trait AndroidSdk: Send + Sync + 'static {
	/// Starts the SDK; the context is required on this platform.
	fn start(&self, context: &ApplicationContext, config: Configuration) -> Result<()>;

	fn notify(&self, exception: Throwable) -> Result<()>;
}

/// Entry points of the Cocoa crash reporting SDK.
pub trait CocoaSdk: Send + Sync + 'static {
	fn start_with_configuration(&self, config: Configuration) -> Result<()>;

	fn notify(&self, exception: NativeException) -> Result<()>;
}

/// Settings retained from the first accepted start.
#[derive(Debug)]
struct StartedState {
	release_stage: String,
	app_version: Option<String>,
	reporting_enabled: bool,
}

/// SDK binding that writes every report to the `tracing` pipeline.
///
/// Used on hosts where no vendor library is linked. Follows the vendor
/// semantics that matter to callers: the first start wins, notifications
/// before start are dropped, and release stages outside the enabled set are
/// not reported.
#[derive(Debug, Default)]
pub struct TracingSdk {
	state: OnceLock<StartedState>,
	delivered: AtomicU64,
}

impl TracingSdk {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_started(&self) -> bool {
		self.state.get().is_some()
	}

	/// Number of reports written since start.
	pub fn delivered(&self) -> u64 {
		self.delivered.load(Ordering::SeqCst)
	}

	fn start_inner(&self, config: Configuration, package_name: Option<&str>) {
		let state = StartedState {
			reporting_enabled: config.release_stage_enabled(),
			release_stage: config.release_stage.clone(),
			app_version: config.app_version.clone(),
		};

		match self.state.set(state) {
			Ok(()) => {
				info!(
					api_key = %config.api_key,
					release_stage = %config.release_stage,
					app_version = ?config.app_version,
					package_name = ?package_name,
					"Crash reporting started"
				);
			}
			Err(_) => {
				warn!("Crash reporting already started, ignoring repeated start");
			}
		}
	}

	fn deliver(&self, error_class: &str, message: &str, causes: &[String]) {
		let Some(state) = self.state.get() else {
			warn!(error_class, "Crash reporting not started, dropping report");
			return;
		};

		if !state.reporting_enabled {
			debug!(
				release_stage = %state.release_stage,
				error_class,
				"Release stage not enabled, dropping report"
			);
			return;
		}

		let event_id = Uuid::now_v7();
		error!(
			event_id = %event_id,
			error_class,
			message,
			causes = ?causes,
			release_stage = %state.release_stage,
			app_version = ?state.app_version,
			timestamp = %Utc::now().to_rfc3339(),
			"Crash report"
		);
		self.delivered.fetch_add(1, Ordering::SeqCst);
	}
}

fn cause_chain(error: &(dyn Error + 'static)) -> Vec<String> {
	let mut causes = Vec::new();
	let mut current = error.source();
	while let Some(cause) = current {
		causes.push(cause.to_string());
		current = cause.source();
	}
	causes
}

impl AndroidSdk for TracingSdk {
	fn start(&self, context: &ApplicationContext, config: Configuration) -> Result<()> {
		self.start_inner(config, Some(context.package_name()));
		Ok(())
	}

	fn notify(&self, exception: Throwable) -> Result<()> {
		let causes = cause_chain(exception.get_ref());
		let message = exception.message().unwrap_or_default();
		self.deliver(exception.type_name(), &message, &causes);
		Ok(())
	}
}

impl CocoaSdk for TracingSdk {
	fn start_with_configuration(&self, config: Configuration) -> Result<()> {
		self.start_inner(config, None);
		Ok(())
	}

	fn notify(&self, exception: NativeException) -> Result<()> {
		self.deliver(exception.name(), exception.reason(), &[]);
		Ok(())
	}
}
