// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exception models accepted by the native SDKs.
//!
//! Android reports a [`Throwable`] as-is. Cocoa reports a [`NativeException`]
//! built from the error's type name and message; stack traces and cause
//! chains do not survive that conversion.

use std::any::Any;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversion from generic errors and panics into a platform exception model.
pub trait Trackable: Send + Sized + 'static {
	/// Builds the exception from a boxed error and the name of its concrete type.
	fn from_boxed(type_name: &'static str, error: Box<dyn Error + Send + Sync>) -> Self;

	/// Class name reported to the backend.
	fn error_class(&self) -> &str;

	fn from_error<E>(error: E) -> Self
	where
		E: Error + Send + Sync + 'static,
	{
		Self::from_boxed(std::any::type_name::<E>(), Box::new(error))
	}

	fn from_panic(message: impl Into<String>) -> Self {
		Self::from_error(PanicError::new(message))
	}
}

/// Returns the last path segment of a type name with generic arguments removed.
///
/// `alloc::vec::Vec<u8>` becomes `Vec`, `std::io::error::Error` becomes `Error`.
pub fn simple_type_name(type_name: &str) -> &str {
	let base = type_name.split('<').next().unwrap_or(type_name);
	let simple = base.rsplit("::").next().unwrap_or(base);
	if simple.is_empty() {
		type_name
	} else {
		simple
	}
}

/// Extracts the message carried by a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		s.to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"Box<dyn Any>".to_string()
	}
}

/// Message rendering for the Cocoa model: the display message, else the debug
/// rendering, else the full type name.
fn render_reason(type_name: &str, error: &(dyn Error + Send + Sync)) -> String {
	let message = error.to_string();
	if !message.trim().is_empty() {
		return message;
	}
	let debug = format!("{error:?}");
	if debug.trim().is_empty() {
		type_name.to_string()
	} else {
		debug
	}
}

/// A panic raised by a task, reported like any other error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
	message: String,
}

impl PanicError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl fmt::Display for PanicError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl Error for PanicError {}

/// Android exception model: the original error, untouched.
pub struct Throwable {
	type_name: &'static str,
	error: Box<dyn Error + Send + Sync>,
}

impl Throwable {
	pub fn new<E>(error: E) -> Self
	where
		E: Error + Send + Sync + 'static,
	{
		Self::from_error(error)
	}

	/// Fully qualified name of the wrapped error type.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn simple_name(&self) -> &'static str {
		simple_type_name(self.type_name)
	}

	/// The error message, or `None` when the error renders as empty.
	pub fn message(&self) -> Option<String> {
		let message = self.error.to_string();
		if message.trim().is_empty() {
			None
		} else {
			Some(message)
		}
	}

	pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
		self.error.as_ref()
	}

	pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
		self.error.downcast_ref::<E>()
	}

	pub fn into_inner(self) -> Box<dyn Error + Send + Sync> {
		self.error
	}
}

impl Trackable for Throwable {
	fn from_boxed(type_name: &'static str, error: Box<dyn Error + Send + Sync>) -> Self {
		Self { type_name, error }
	}

	fn error_class(&self) -> &str {
		self.type_name
	}
}

impl fmt::Debug for Throwable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Throwable")
			.field("type_name", &self.type_name)
			.field("error", &self.error)
			.finish()
	}
}

impl fmt::Display for Throwable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.message() {
			Some(message) => write!(f, "{}: {}", self.type_name, message),
			None => f.write_str(self.type_name),
		}
	}
}

/// Cocoa exception model, shaped like `NSException`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeException {
	name: String,
	reason: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	user_info: Option<BTreeMap<String, String>>,
}

impl NativeException {
	pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			reason: reason.into(),
			user_info: None,
		}
	}

	pub fn with_user_info(mut self, user_info: BTreeMap<String, String>) -> Self {
		self.user_info = Some(user_info);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn reason(&self) -> &str {
		&self.reason
	}

	pub fn user_info(&self) -> Option<&BTreeMap<String, String>> {
		self.user_info.as_ref()
	}
}

impl Trackable for NativeException {
	fn from_boxed(type_name: &'static str, error: Box<dyn Error + Send + Sync>) -> Self {
		Self::new(simple_type_name(type_name), render_reason(type_name, error.as_ref()))
	}

	fn error_class(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for NativeException {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.reason)
	}
}
