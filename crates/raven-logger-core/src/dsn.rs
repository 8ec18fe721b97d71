// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Connection strings for the tracking service.
//!
//! A DSN looks like `https://<public_key>@<host>[:port]/<path>/<project_id>`.
//! The reporter treats it as opaque and hands the raw string to the vendor
//! SDK, but it is parsed once here so that logs can identify the endpoint
//! without ever printing the key.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{ReporterError, Result};

/// Placeholder shown instead of credentials.
const REDACTED: &str = "[REDACTED]";

/// A validated tracking-service connection string.
#[derive(Clone, PartialEq, Eq)]
pub struct Dsn {
	raw: String,
	scheme: String,
	host: String,
	port: Option<u16>,
	project_id: String,
}

impl Dsn {
	pub fn parse(raw: &str) -> Result<Self> {
		let raw = raw.trim();
		let url = Url::parse(raw).map_err(|e| ReporterError::InvalidDsn(e.to_string()))?;

		match url.scheme() {
			"http" | "https" => {}
			other => return Err(ReporterError::InvalidDsn(format!("unsupported scheme '{other}'"))),
		}

		if url.username().is_empty() {
			return Err(ReporterError::MissingPublicKey);
		}

		let host = url
			.host_str()
			.filter(|h| !h.is_empty())
			.ok_or_else(|| ReporterError::InvalidDsn("missing host".to_string()))?
			.to_string();

		let project_id = url
			.path_segments()
			.and_then(|mut segments| segments.next_back())
			.filter(|s| !s.is_empty())
			.ok_or(ReporterError::MissingProjectId)?
			.to_string();

		Ok(Self {
			raw: raw.to_string(),
			scheme: url.scheme().to_string(),
			host,
			port: url.port(),
			project_id,
		})
	}

	/// The raw connection string, credentials included. Only pass this to the
	/// vendor SDK.
	pub fn expose(&self) -> &str {
		&self.raw
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn project_id(&self) -> &str {
		&self.project_id
	}
}

impl FromStr for Dsn {
	type Err = ReporterError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for Dsn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}://{}@{}", self.scheme, REDACTED, self.host)?;
		if let Some(port) = self.port {
			write!(f, ":{port}")?;
		}
		write!(f, "/{}", self.project_id)
	}
}

impl fmt::Debug for Dsn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Dsn({self})")
	}
}
