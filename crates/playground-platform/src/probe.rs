// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OS version probes.

#[cfg(unix)]
use std::ffi::CStr;

#[cfg(unix)]
use tracing::debug;

/// SDK level from the `ro.build.version.sdk` system property.
#[cfg(target_os = "android")]
pub(crate) fn android_sdk_int() -> Option<u32> {
	// PROP_VALUE_MAX
	let mut value = [0 as libc::c_char; 92];
	let len = unsafe { libc::__system_property_get(c"ro.build.version.sdk".as_ptr(), value.as_mut_ptr()) };
	if len <= 0 {
		debug!("ro.build.version.sdk not set");
		return None;
	}
	let value = unsafe { CStr::from_ptr(value.as_ptr()) };
	value.to_str().ok()?.trim().parse().ok()
}

/// Product version such as `17.0` from `kern.osproductversion`.
#[cfg(any(target_os = "ios", target_os = "macos"))]
pub(crate) fn apple_product_version() -> Option<String> {
	let mut buf = [0u8; 64];
	let mut len: libc::size_t = buf.len();
	let rc = unsafe {
		libc::sysctlbyname(
			c"kern.osproductversion".as_ptr(),
			buf.as_mut_ptr().cast(),
			&mut len,
			std::ptr::null_mut(),
			0,
		)
	};
	if rc != 0 {
		debug!(errno = std::io::Error::last_os_error().raw_os_error(), "sysctlbyname failed");
		return None;
	}
	let version = CStr::from_bytes_until_nul(&buf[..len]).ok()?;
	Some(version.to_str().ok()?.to_string())
}

/// Kernel release reported by `uname`.
#[cfg(unix)]
pub(crate) fn os_release() -> Option<String> {
	let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
	if unsafe { libc::uname(&mut uts) } != 0 {
		debug!("uname failed");
		return None;
	}
	let release = unsafe { CStr::from_ptr(uts.release.as_ptr()) };
	let release = release.to_str().ok()?.trim();
	(!release.is_empty()).then(|| release.to_string())
}

#[cfg(not(unix))]
pub(crate) fn os_release() -> Option<String> {
	None
}

#[cfg(all(test, unix))]
mod tests {
	use super::*;

	#[test]
	fn test_os_release_is_not_blank() {
		if let Some(release) = os_release() {
			assert!(!release.trim().is_empty());
		}
	}
}
