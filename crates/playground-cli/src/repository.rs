// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Demo workloads that fail on purpose.

use playground_crash::{CrashTracker, PlatformTracker, SupervisorSummary, TaskSupervisor};
use tracing::info;

#[derive(Debug, thiserror::Error)]
#[error("/ by zero")]
pub struct ArithmeticError;

/// Integer division that reports a zero divisor or overflow as an error.
pub fn divide(dividend: i64, divisor: i64) -> Result<i64, ArithmeticError> {
	dividend.checked_div(divisor).ok_or(ArithmeticError)
}

/// Runs failing background work and reports every failure to a tracker.
pub struct CrashRepository<'a, T: PlatformTracker> {
	tracker: &'a CrashTracker<T>,
}

impl<'a, T: PlatformTracker> CrashRepository<'a, T> {
	pub fn new(tracker: &'a CrashTracker<T>) -> Self {
		Self { tracker }
	}

	/// Launches two tasks, one panicking on a failed assertion and one
	/// dividing by zero, and waits until both failures have been tracked.
	pub async fn crash(&self) -> SupervisorSummary {
		let mut supervisor = TaskSupervisor::new(self.tracker.failure_sink());

		supervisor.spawn(async {
			let expected = 1;
			let actual = divide(1, 2)?;
			assert_eq!(actual, expected, "integer division rounded toward zero");
			Ok::<(), ArithmeticError>(())
		});
		supervisor.spawn(async {
			let quotient = divide(1, 0)?;
			info!(quotient, "division succeeded");
			Ok::<(), ArithmeticError>(())
		});

		let summary = supervisor.join_all().await;
		info!(
			completed = summary.completed,
			failed = summary.failed,
			"crash workload finished"
		);
		summary
	}
}
