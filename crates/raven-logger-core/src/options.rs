// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Inputs to reporter initialization.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::dsn::Dsn;

/// Exit status used by the default global handler.
pub const PANIC_EXIT_STATUS: i32 = 1;

/// Default time to wait for queued events when flushing.
pub const DEFAULT_FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

/// Per-runtime connection strings. A missing entry disables that runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
	pub client: Option<Dsn>,
	pub server: Option<Dsn>,
}

impl Settings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn client(mut self, dsn: Dsn) -> Self {
		self.client = Some(dsn);
		self
	}

	pub fn server(mut self, dsn: Dsn) -> Self {
		self.server = Some(dsn);
		self
	}
}

/// Reporter behaviour switches.
#[derive(Debug, Clone, Default)]
pub struct ReporterOptions {
	/// Attach the logged-in user to every event. Client runtime only.
	pub track_user: bool,
	/// Report uncaught panics. Server runtime only.
	pub patch_global: PatchGlobal,
	pub sdk: SdkOptions,
}

impl ReporterOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn track_user(mut self, enabled: bool) -> Self {
		self.track_user = enabled;
		self
	}

	pub fn patch_global(mut self, patch: impl Into<PatchGlobal>) -> Self {
		self.patch_global = patch.into();
		self
	}

	pub fn sdk(mut self, sdk: SdkOptions) -> Self {
		self.sdk = sdk;
		self
	}
}

/// Options passed to the vendor client when it is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkOptions {
	/// Example: `production`, `staging`
	pub environment: Option<String>,
	/// Example: `1.2.3` or a commit SHA
	pub release: Option<String>,
	pub server_name: Option<String>,
	pub flush_timeout: Duration,
}

impl Default for SdkOptions {
	fn default() -> Self {
		Self {
			environment: None,
			release: None,
			server_name: None,
			flush_timeout: DEFAULT_FLUSH_TIMEOUT,
		}
	}
}

/// What an uncaught panic looked like, handed to the global handler after
/// the tracking service has been told about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicReport {
	pub message: String,
	/// `file:line:column` of the panic site, when known.
	pub location: Option<String>,
}

impl fmt::Display for PanicReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.location {
			Some(location) => write!(f, "{} at {}", self.message, location),
			None => f.write_str(&self.message),
		}
	}
}

/// Callback run after an uncaught panic has been reported.
pub type GlobalHandler = Arc<dyn Fn(&PanicReport) + Send + Sync>;

/// Whether (and how) to intercept uncaught panics.
#[derive(Clone, Default)]
pub enum PatchGlobal {
	#[default]
	Disabled,
	/// Report, then exit with [`PANIC_EXIT_STATUS`].
	Exit,
	/// Report, then run the given callback.
	Handler(GlobalHandler),
}

impl PatchGlobal {
	pub fn handler_fn<F>(f: F) -> Self
	where
		F: Fn(&PanicReport) + Send + Sync + 'static,
	{
		Self::Handler(Arc::new(f))
	}

	pub fn is_enabled(&self) -> bool {
		!matches!(self, Self::Disabled)
	}

	/// The callback to install, or `None` when patching is disabled.
	pub fn handler(&self) -> Option<GlobalHandler> {
		match self {
			Self::Disabled => None,
			Self::Exit => Some(Arc::new(exit_process)),
			Self::Handler(handler) => Some(Arc::clone(handler)),
		}
	}
}

impl From<bool> for PatchGlobal {
	fn from(enabled: bool) -> Self {
		if enabled {
			Self::Exit
		} else {
			Self::Disabled
		}
	}
}

impl fmt::Debug for PatchGlobal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Disabled => f.write_str("Disabled"),
			Self::Exit => f.write_str("Exit"),
			Self::Handler(_) => f.write_str("Handler(..)"),
		}
	}
}

fn exit_process(_report: &PanicReport) {
	std::process::exit(PANIC_EXIT_STATUS);
}
