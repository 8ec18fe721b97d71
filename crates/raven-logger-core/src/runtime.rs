// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Which side of the application the reporter runs on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReporterError;

/// Execution context of the reporter.
///
/// `Client` is a session-bound frontend (browser build, desktop shell) that
/// belongs to exactly one user. `Server` is a long-running process that
/// serves many users and never attaches user identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Runtime {
	Client,
	Server,
}

impl Runtime {
	/// Runtime implied by the compilation target.
	pub const fn detect() -> Self {
		if cfg!(target_arch = "wasm32") {
			Self::Client
		} else {
			Self::Server
		}
	}

	pub fn is_client(self) -> bool {
		matches!(self, Self::Client)
	}

	pub fn is_server(self) -> bool {
		matches!(self, Self::Server)
	}
}

impl Default for Runtime {
	fn default() -> Self {
		Self::detect()
	}
}

impl fmt::Display for Runtime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Client => write!(f, "client"),
			Self::Server => write!(f, "server"),
		}
	}
}

impl FromStr for Runtime {
	type Err = ReporterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"client" | "browser" => Ok(Self::Client),
			"server" | "process" => Ok(Self::Server),
			_ => Err(ReporterError::InvalidRuntime(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_flags_are_mutually_exclusive() {
		for runtime in [Runtime::Client, Runtime::Server] {
			assert_ne!(runtime.is_client(), runtime.is_server());
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn test_detect_native_is_server() {
		assert_eq!(Runtime::detect(), Runtime::Server);
		assert_eq!(Runtime::default(), Runtime::Server);
	}

	#[test]
	fn test_parse() {
		assert_eq!("Client".parse::<Runtime>().unwrap(), Runtime::Client);
		assert_eq!("process".parse::<Runtime>().unwrap(), Runtime::Server);
		assert!(matches!("edge".parse::<Runtime>(), Err(ReporterError::InvalidRuntime(_))));
	}

	#[test]
	fn test_display_roundtrip() {
		for runtime in [Runtime::Client, Runtime::Server] {
			assert_eq!(runtime.to_string().parse::<Runtime>().unwrap(), runtime);
		}
	}
}
