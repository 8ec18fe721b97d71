// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-runtime connection strings.

use raven_logger_core::Dsn;
use serde::Deserialize;

use crate::error::ConfigError;

/// DSN configuration (runtime, fully resolved).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DsnConfig {
	pub client: Option<Dsn>,
	pub server: Option<Dsn>,
}

/// DSN configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DsnConfigLayer {
	#[serde(default)]
	pub client: Option<String>,
	#[serde(default)]
	pub server: Option<String>,
}

impl DsnConfigLayer {
	pub fn merge(&mut self, other: DsnConfigLayer) {
		if other.client.is_some() {
			self.client = other.client;
		}
		if other.server.is_some() {
			self.server = other.server;
		}
	}

	/// Empty strings count as "not configured" and disable that runtime.
	pub fn finalize(self) -> Result<DsnConfig, ConfigError> {
		Ok(DsnConfig {
			client: parse_dsn("dsn.client", self.client)?,
			server: parse_dsn("dsn.server", self.server)?,
		})
	}
}

fn parse_dsn(key: &str, raw: Option<String>) -> Result<Option<Dsn>, ConfigError> {
	match raw.as_deref().map(str::trim) {
		None | Some("") => Ok(None),
		Some(raw) => Dsn::parse(raw)
			.map(Some)
			.map_err(|e| ConfigError::InvalidValue {
				key: key.to_string(),
				message: e.to_string(),
			}),
	}
}
