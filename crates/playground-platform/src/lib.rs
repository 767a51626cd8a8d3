// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Platform identity for the playground host.
//!
//! [`get_platform`] returns the platform compiled in for the current target;
//! [`Greeting`] uses it for the demo greeting.

mod probe;

use std::fmt;

/// A named runtime platform.
pub trait Platform: Send + Sync {
	/// Human-readable name, e.g. `"Android 34"` or `"iOS 17.0"`.
	fn name(&self) -> String;
}

/// Android, identified by its SDK level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidPlatform {
	pub sdk_int: u32,
}

impl Platform for AndroidPlatform {
	fn name(&self) -> String {
		format!("Android {}", self.sdk_int)
	}
}

/// iOS and other Apple systems, identified by system name and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IosPlatform {
	pub system_name: String,
	pub system_version: String,
}

impl Platform for IosPlatform {
	fn name(&self) -> String {
		format!("{} {}", self.system_name, self.system_version)
	}
}

/// Any other host, identified by OS name and, when known, its release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
	pub os: String,
	pub version: Option<String>,
}

impl HostPlatform {
	pub fn current() -> Self {
		Self {
			os: std::env::consts::OS.to_string(),
			version: probe::os_release(),
		}
	}
}

impl Platform for HostPlatform {
	fn name(&self) -> String {
		match &self.version {
			Some(version) => format!("{} {}", self.os, version),
			None => self.os.clone(),
		}
	}
}

/// The platform the binary is running on.
#[cfg(target_os = "android")]
pub fn get_platform() -> Box<dyn Platform> {
	Box::new(AndroidPlatform {
		sdk_int: probe::android_sdk_int().unwrap_or(0),
	})
}

/// The platform the binary is running on.
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub fn get_platform() -> Box<dyn Platform> {
	let system_name = if cfg!(target_os = "ios") { "iOS" } else { "macOS" };
	Box::new(IosPlatform {
		system_name: system_name.to_string(),
		system_version: probe::apple_product_version().unwrap_or_else(|| "unknown".to_string()),
	})
}

/// The platform the binary is running on.
#[cfg(not(any(target_os = "android", target_os = "ios", target_os = "macos")))]
pub fn get_platform() -> Box<dyn Platform> {
	Box::new(HostPlatform::current())
}

/// Demo greeting naming the current platform.
pub struct Greeting {
	platform: Box<dyn Platform>,
}

impl Greeting {
	pub fn new() -> Self {
		Self::with_platform(get_platform())
	}

	pub fn with_platform(platform: Box<dyn Platform>) -> Self {
		Self { platform }
	}

	pub fn greet(&self) -> String {
		format!("Hello, {}!", self.platform.name())
	}
}

impl Default for Greeting {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Greeting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Greeting")
			.field("platform", &self.platform.name())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_android_name() {
		assert_eq!(AndroidPlatform { sdk_int: 34 }.name(), "Android 34");
	}

	#[test]
	fn test_ios_name() {
		let platform = IosPlatform {
			system_name: "iOS".into(),
			system_version: "17.0".into(),
		};
		assert_eq!(platform.name(), "iOS 17.0");
	}

	#[test]
	fn test_host_name_omits_unknown_version() {
		let platform = HostPlatform {
			os: "linux".into(),
			version: None,
		};
		assert_eq!(platform.name(), "linux");
	}

	#[test]
	fn test_greeting_uses_platform_name() {
		let greeting = Greeting::with_platform(Box::new(AndroidPlatform { sdk_int: 34 }));
		assert_eq!(greeting.greet(), "Hello, Android 34!");
	}

	#[test]
	fn test_current_platform_has_a_name() {
		let greeting = Greeting::new().greet();
		assert!(greeting.starts_with("Hello, "));
		assert!(greeting.len() > "Hello, !".len());
	}

	proptest! {
		#[test]
		fn android_name_embeds_sdk_level(sdk_int in 1u32..100) {
			prop_assert_eq!(AndroidPlatform { sdk_int }.name(), format!("Android {sdk_int}"));
		}
	}
}
