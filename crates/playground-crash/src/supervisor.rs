// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Structured task group whose failures are routed to a single sink.

use std::error::Error;
use std::fmt;
use std::future::Future;

use playground_crash_core::{panic_message, Trackable};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Why a supervised task did not complete.
#[derive(Debug)]
pub enum TaskFailure {
	/// The task returned an error.
	Failed {
		type_name: &'static str,
		error: Box<dyn Error + Send + Sync>,
	},
	/// The task panicked.
	Panicked { message: String },
}

impl TaskFailure {
	/// Converts the failure into a platform exception.
	pub fn into_exception<X: Trackable>(self) -> X {
		match self {
			Self::Failed { type_name, error } => X::from_boxed(type_name, error),
			Self::Panicked { message } => X::from_panic(message),
		}
	}
}

impl fmt::Display for TaskFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Failed { type_name, error } => write!(f, "{type_name}: {error}"),
			Self::Panicked { message } => write!(f, "panicked: {message}"),
		}
	}
}

/// Outcome counts of a supervised group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupervisorSummary {
	pub completed: usize,
	pub failed: usize,
	pub cancelled: usize,
}

/// Runs tasks side by side; one task failing does not stop the others.
///
/// Every error or panic is handed to the sink exactly once, on the task that
/// calls [`TaskSupervisor::join_all`], before `join_all` returns.
pub struct TaskSupervisor<S> {
	tasks: JoinSet<Result<(), TaskFailure>>,
	sink: S,
}

impl<S> TaskSupervisor<S>
where
	S: FnMut(TaskFailure),
{
	pub fn new(sink: S) -> Self {
		Self {
			tasks: JoinSet::new(),
			sink,
		}
	}

	/// Spawns a task on the current tokio runtime.
	///
	/// # Panics
	///
	/// Panics when called outside a tokio runtime.
	pub fn spawn<F, E>(&mut self, future: F)
	where
		F: Future<Output = Result<(), E>> + Send + 'static,
		E: Error + Send + Sync + 'static,
	{
		self.tasks.spawn(async move {
			future.await.map_err(|error| TaskFailure::Failed {
				type_name: std::any::type_name::<E>(),
				error: Box::new(error),
			})
		});
	}

	pub fn len(&self) -> usize {
		self.tasks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tasks.is_empty()
	}

	/// Waits for every task and routes each failure to the sink.
	pub async fn join_all(mut self) -> SupervisorSummary {
		let mut summary = SupervisorSummary::default();

		while let Some(joined) = self.tasks.join_next().await {
			let failure = match joined {
				Ok(Ok(())) => {
					summary.completed += 1;
					continue;
				}
				Ok(Err(failure)) => failure,
				Err(e) if e.is_panic() => TaskFailure::Panicked {
					message: panic_message(e.into_panic().as_ref()),
				},
				Err(e) => {
					debug!(error = %e, "Supervised task cancelled");
					summary.cancelled += 1;
					continue;
				}
			};

			warn!(failure = %failure, "Supervised task failed");
			summary.failed += 1;
			(self.sink)(failure);
		}

		summary
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use playground_crash_core::{NativeException, PanicError, Throwable};

	#[derive(Debug)]
	struct DivisionByZero;

	impl fmt::Display for DivisionByZero {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("attempt to divide by zero")
		}
	}

	impl Error for DivisionByZero {}

	#[tokio::test]
	async fn test_each_failure_reaches_sink_once() {
		let mut failures = Vec::new();
		let mut supervisor = TaskSupervisor::new(|f: TaskFailure| failures.push(f.to_string()));

		supervisor.spawn(async { Err::<(), _>(DivisionByZero) });
		supervisor.spawn(async {
			assert!(1 + 1 == 3, "math is broken");
			Ok::<(), DivisionByZero>(())
		});
		supervisor.spawn(async { Ok::<(), DivisionByZero>(()) });
		assert_eq!(supervisor.len(), 3);

		let summary = supervisor.join_all().await;
		assert_eq!(
			summary,
			SupervisorSummary {
				completed: 1,
				failed: 2,
				cancelled: 0
			}
		);
		assert_eq!(failures.len(), 2);
		assert!(failures.iter().any(|f| f.contains("attempt to divide by zero")));
		assert!(failures.iter().any(|f| f.contains("math is broken")));
	}

	#[tokio::test]
	async fn test_empty_group_joins_immediately() {
		let supervisor = TaskSupervisor::new(|_: TaskFailure| panic!("no failures expected"));
		assert!(supervisor.is_empty());
		assert_eq!(supervisor.join_all().await, SupervisorSummary::default());
	}

	#[test]
	fn test_failure_converts_to_each_exception_model() {
		let failure = TaskFailure::Failed {
			type_name: std::any::type_name::<DivisionByZero>(),
			error: Box::new(DivisionByZero),
		};
		let exception: NativeException = failure.into_exception();
		assert_eq!(exception.name(), "DivisionByZero");
		assert_eq!(exception.reason(), "attempt to divide by zero");

		let failure = TaskFailure::Panicked {
			message: "assertion failed".into(),
		};
		let throwable: Throwable = failure.into_exception();
		assert_eq!(throwable.downcast_ref::<PanicError>().map(PanicError::message), Some("assertion failed"));
	}
}
