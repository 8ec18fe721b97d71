// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reporter behaviour switches.

use serde::Deserialize;

/// Options configuration (runtime, fully resolved).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsConfig {
	pub track_user: bool,
	/// Only the default exit handler can be selected from configuration;
	/// custom callbacks are supplied in code.
	pub patch_global: bool,
}

/// Options configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsConfigLayer {
	#[serde(default)]
	pub track_user: Option<bool>,
	#[serde(default)]
	pub patch_global: Option<bool>,
}

impl OptionsConfigLayer {
	pub fn merge(&mut self, other: OptionsConfigLayer) {
		if other.track_user.is_some() {
			self.track_user = other.track_user;
		}
		if other.patch_global.is_some() {
			self.patch_global = other.patch_global;
		}
	}

	pub fn finalize(self) -> OptionsConfig {
		OptionsConfig {
			track_user: self.track_user.unwrap_or(false),
			patch_global: self.patch_global.unwrap_or(false),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_off() {
		let config = OptionsConfigLayer::default().finalize();
		assert!(!config.track_user);
		assert!(!config.patch_global);
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = OptionsConfigLayer {
			track_user: Some(true),
			patch_global: None,
		};
		base.merge(OptionsConfigLayer {
			track_user: None,
			patch_global: Some(true),
		});
		let config = base.finalize();
		assert!(config.track_user);
		assert!(config.patch_global);
	}
}
