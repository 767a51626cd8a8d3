// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide application context captured during startup.

use std::sync::OnceLock;

use playground_crash_core::ApplicationContext;

static APPLICATION_CONTEXT: ContextHolder = ContextHolder::new();

/// Single-assignment holder for the application context.
///
/// Written once during startup and read-only afterward.
#[derive(Debug)]
pub struct ContextHolder {
	cell: OnceLock<ApplicationContext>,
}

impl ContextHolder {
	pub const fn new() -> Self {
		Self {
			cell: OnceLock::new(),
		}
	}

	/// Stores the context. Returns it back if one was already captured.
	pub fn capture(&self, context: ApplicationContext) -> Result<(), ApplicationContext> {
		self.cell.set(context)
	}

	pub fn get(&self) -> Option<&ApplicationContext> {
		self.cell.get()
	}
}

impl Default for ContextHolder {
	fn default() -> Self {
		Self::new()
	}
}

/// The process-wide holder written by [`ContextInitializer`](crate::ContextInitializer).
pub fn captured_context() -> &'static ContextHolder {
	&APPLICATION_CONTEXT
}

/// The captured application context, if startup has run.
pub fn application_context() -> Option<&'static ApplicationContext> {
	APPLICATION_CONTEXT.get()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_capture_wins() {
		let holder = ContextHolder::new();
		assert!(holder.get().is_none());

		let first = ApplicationContext::new("com.example.first", "/data/first");
		let second = ApplicationContext::new("com.example.second", "/data/second");

		assert!(holder.capture(first.clone()).is_ok());
		assert_eq!(holder.capture(second.clone()), Err(second));
		assert_eq!(holder.get(), Some(&first));
	}
}
