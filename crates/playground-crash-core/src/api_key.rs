// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Notifier API key wrapper that never appears in logs or config dumps.
//!
//! ```
//! use playground_crash_core::ApiKey;
//!
//! let key = ApiKey::new("0123456789abcdef0123456789abcdef");
//!
//! assert_eq!(format!("{key}"), "[REDACTED]");
//! assert_eq!(format!("{key:?}"), "ApiKey(\"[REDACTED]\")");
//! assert_eq!(key.expose(), "0123456789abcdef0123456789abcdef");
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Placeholder printed wherever a key would otherwise be rendered.
pub const REDACTED: &str = "[REDACTED]";

/// Length of a notifier API key in hex characters.
const API_KEY_LEN: usize = 32;

/// API key for the crash reporting backend.
///
/// Debug, Display and Serialize are redacted; the key is zeroed on drop and
/// read only through [`ApiKey::expose`].
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct ApiKey {
	inner: String,
}

impl ApiKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self { inner: key.into() }
	}

	/// Explicitly access the key.
	pub fn expose(&self) -> &str {
		&self.inner
	}

	/// Whether the key has the shape of a notifier key (32 hex characters).
	pub fn is_well_formed(&self) -> bool {
		self.inner.len() == API_KEY_LEN && self.inner.chars().all(|c| c.is_ascii_hexdigit())
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl Serialize for ApiKey {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for ApiKey {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let inner = String::deserialize(deserializer)?;
		Ok(ApiKey::new(inner))
	}
}
