// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Options forwarded to the vendor SDK.

use std::time::Duration;

use raven_logger_core::{SdkOptions, DEFAULT_FLUSH_TIMEOUT};
use serde::Deserialize;

/// SDK configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
	pub environment: Option<String>,
	pub release: Option<String>,
	pub server_name: Option<String>,
	pub flush_timeout: Duration,
}

impl Default for SdkConfig {
	fn default() -> Self {
		SdkConfigLayer::default().finalize()
	}
}

impl SdkConfig {
	pub fn to_options(&self) -> SdkOptions {
		SdkOptions {
			environment: self.environment.clone(),
			release: self.release.clone(),
			server_name: self.server_name.clone(),
			flush_timeout: self.flush_timeout,
		}
	}
}

/// SDK configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SdkConfigLayer {
	#[serde(default)]
	pub environment: Option<String>,
	#[serde(default)]
	pub release: Option<String>,
	#[serde(default)]
	pub server_name: Option<String>,
	#[serde(default)]
	pub flush_timeout_ms: Option<u64>,
}

impl SdkConfigLayer {
	pub fn merge(&mut self, other: SdkConfigLayer) {
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		if other.release.is_some() {
			self.release = other.release;
		}
		if other.server_name.is_some() {
			self.server_name = other.server_name;
		}
		if other.flush_timeout_ms.is_some() {
			self.flush_timeout_ms = other.flush_timeout_ms;
		}
	}

	pub fn finalize(self) -> SdkConfig {
		SdkConfig {
			environment: self.environment,
			release: self.release,
			server_name: self.server_name,
			flush_timeout: self
				.flush_timeout_ms
				.map(Duration::from_millis)
				.unwrap_or(DEFAULT_FLUSH_TIMEOUT),
		}
	}
}
