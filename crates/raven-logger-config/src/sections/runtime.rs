// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime selection.

use raven_logger_core::Runtime;
use serde::Deserialize;

/// Runtime configuration (runtime, fully resolved).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
	pub runtime: Runtime,
}

impl Default for RuntimeConfig {
	fn default() -> Self {
		Self {
			runtime: Runtime::detect(),
		}
	}
}

/// Runtime configuration layer (partial, for merging).
///
/// Unset means "detect from the compilation target".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfigLayer {
	#[serde(default)]
	pub kind: Option<Runtime>,
}

impl RuntimeConfigLayer {
	pub fn merge(&mut self, other: RuntimeConfigLayer) {
		if other.kind.is_some() {
			self.kind = other.kind;
		}
	}

	pub fn finalize(self) -> RuntimeConfig {
		RuntimeConfig {
			runtime: self.kind.unwrap_or_else(Runtime::detect),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_explicit_runtime_wins() {
		let layer = RuntimeConfigLayer {
			kind: Some(Runtime::Client),
		};
		assert_eq!(layer.finalize().runtime, Runtime::Client);
	}

	#[test]
	fn test_unset_detects() {
		assert_eq!(RuntimeConfigLayer::default().finalize().runtime, Runtime::detect());
	}
}
