// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Startup initializers run before application code.

use std::sync::atomic::{AtomicBool, Ordering};

use playground_crash_core::ApplicationContext;
use tracing::{debug, info, warn};

use crate::context::{captured_context, ContextHolder};
use crate::error::StartupError;

/// A component initialized once at application startup.
pub trait Initializer: Send + Sync {
	/// Name other initializers refer to in [`Initializer::dependencies`].
	fn name(&self) -> &'static str;

	/// Initializers that must run before this one.
	fn dependencies(&self) -> &'static [&'static str] {
		&[]
	}

	fn create(&self, context: &ApplicationContext) -> Result<(), StartupError>;
}

/// Records the application context for the Android tracker.
pub struct ContextInitializer {
	holder: &'static ContextHolder,
}

impl ContextInitializer {
	/// Writes into the process-wide holder.
	pub fn new() -> Self {
		Self::with_holder(captured_context())
	}

	pub fn with_holder(holder: &'static ContextHolder) -> Self {
		Self { holder }
	}
}

impl Default for ContextInitializer {
	fn default() -> Self {
		Self::new()
	}
}

impl Initializer for ContextInitializer {
	fn name(&self) -> &'static str {
		"context"
	}

	fn create(&self, context: &ApplicationContext) -> Result<(), StartupError> {
		self
			.holder
			.capture(context.clone())
			.map_err(|_| StartupError::ContextAlreadyCaptured)?;
		debug!(package_name = context.package_name(), "Application context captured");
		Ok(())
	}
}

/// Runs registered initializers once, in registration order.
pub struct AppStartup {
	initializers: Vec<Box<dyn Initializer>>,
	started: AtomicBool,
}

impl AppStartup {
	pub fn new() -> Self {
		Self {
			initializers: Vec::new(),
			started: AtomicBool::new(false),
		}
	}

	/// Registers an initializer after those already registered.
	pub fn with(mut self, initializer: impl Initializer + 'static) -> Self {
		self.initializers.push(Box::new(initializer));
		self
	}

	/// Runs every initializer and returns how many ran.
	///
	/// Dependencies are checked before anything runs, so a misordered
	/// registration fails without side effects.
	pub fn start(&self, context: &ApplicationContext) -> Result<usize, StartupError> {
		for (index, initializer) in self.initializers.iter().enumerate() {
			for dependency in initializer.dependencies() {
				let registered_before = self.initializers[..index]
					.iter()
					.any(|earlier| earlier.name() == *dependency);
				if !registered_before {
					return Err(StartupError::MissingDependency {
						initializer: initializer.name(),
						dependency: *dependency,
					});
				}
			}
		}

		if self.started.swap(true, Ordering::SeqCst) {
			return Err(StartupError::AlreadyStarted);
		}

		for initializer in &self.initializers {
			if let Err(e) = initializer.create(context) {
				warn!(initializer = initializer.name(), error = %e, "Startup initializer failed");
				return Err(e);
			}
		}

		info!(
			initializer_count = self.initializers.len(),
			package_name = context.package_name(),
			"Application startup complete"
		);
		Ok(self.initializers.len())
	}
}

impl Default for AppStartup {
	fn default() -> Self {
		Self::new()
	}
}
