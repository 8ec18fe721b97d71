// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The event reporter: `initialize` once, `log` many times.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use raven_logger_core::{
	CurrentUser, LogAttributes, LogMessage, NoCurrentUser, ReporterOptions, Runtime, Settings,
};
use tracing::{debug, info, warn};

use crate::backend::{ClientBackend, RuntimeBackend, ServerBackend};
use crate::client::TrackingSdk;
use crate::error::Result;
use crate::sentry_backend::SentrySdk;
use crate::{SDK_NAME, SDK_VERSION};

/// Builder for an [`EventReporter`].
///
/// Defaults: runtime detected from the compilation target, the Sentry SDK,
/// and no logged-in user.
pub struct EventReporterBuilder {
	runtime: Runtime,
	sdk: Box<dyn TrackingSdk>,
	current_user: Arc<dyn CurrentUser>,
}

impl EventReporterBuilder {
	pub fn new() -> Self {
		Self {
			runtime: Runtime::detect(),
			sdk: Box::new(SentrySdk::new()),
			current_user: Arc::new(NoCurrentUser),
		}
	}

	pub fn runtime(mut self, runtime: Runtime) -> Self {
		self.runtime = runtime;
		self
	}

	/// Replace the tracking SDK.
	pub fn sdk(mut self, sdk: impl TrackingSdk + 'static) -> Self {
		self.sdk = Box::new(sdk);
		self
	}

	/// Accessor sampled on every `log` call when `track_user` is on.
	pub fn current_user(mut self, current_user: impl CurrentUser + 'static) -> Self {
		self.current_user = Arc::new(current_user);
		self
	}

	/// Configure the tracking client for the selected runtime.
	///
	/// Never fails. A missing DSN for the runtime, or a DSN the SDK rejects,
	/// yields a disabled reporter whose `log` calls are inert.
	pub fn initialize(self, settings: &Settings, options: ReporterOptions) -> EventReporter {
		let runtime = self.runtime;
		match self.build_backend(settings, options) {
			Ok(Some(backend)) => {
				info!(
					sdk = SDK_NAME,
					version = SDK_VERSION,
					runtime = %runtime,
					"Event reporter enabled"
				);
				EventReporter {
					backend: Some(backend),
				}
			}
			Ok(None) => {
				debug!(runtime = %runtime, "No DSN for runtime, reporter disabled");
				EventReporter::disabled()
			}
			Err(e) => {
				warn!(
					runtime = %runtime,
					error = %e,
					"Failed to initialize tracking client, reporter disabled"
				);
				EventReporter::disabled()
			}
		}
	}

	fn build_backend(
		self,
		settings: &Settings,
		options: ReporterOptions,
	) -> Result<Option<Box<dyn RuntimeBackend>>> {
		match self.runtime {
			Runtime::Client => {
				let Some(dsn) = &settings.client else {
					return Ok(None);
				};
				debug!(dsn = %dsn, "Client initialize");
				let client = self.sdk.configure(dsn, &options.sdk)?;
				let backend =
					ClientBackend::install(client, options.track_user, self.current_user)?;
				Ok(Some(Box::new(backend)))
			}
			Runtime::Server => {
				let Some(dsn) = &settings.server else {
					return Ok(None);
				};
				debug!(dsn = %dsn, "Server initialize");
				let client = self.sdk.configure(dsn, &options.sdk)?;
				let backend = ServerBackend::new(client, &options.patch_global)?;
				Ok(Some(Box::new(backend)))
			}
		}
	}
}

impl Default for EventReporterBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Forwards log messages and errors to the tracking client.
///
/// # Example
///
/// ```ignore
/// use raven_logger::{EventReporter, LogAttributes, ReporterOptions, Settings};
///
/// let settings = Settings::new().server("https://key@sentry.example.com/1".parse()?);
/// let reporter = EventReporter::builder()
///     .initialize(&settings, ReporterOptions::new().patch_global(true));
///
/// reporter.log("cache warmed", &LogAttributes::default());
///
/// if let Err(e) = do_something() {
///     reporter.log(LogMessage::error(e), &LogAttributes::new().with_tag("job", "sync"));
/// }
/// ```
pub struct EventReporter {
	backend: Option<Box<dyn RuntimeBackend>>,
}

impl EventReporter {
	pub fn builder() -> EventReporterBuilder {
		EventReporterBuilder::new()
	}

	/// A reporter that drops everything.
	pub fn disabled() -> Self {
		Self { backend: None }
	}

	/// Initialize with the default Sentry SDK and detected runtime.
	pub fn initialize(settings: &Settings, options: ReporterOptions) -> Self {
		EventReporterBuilder::new().initialize(settings, options)
	}

	pub fn is_enabled(&self) -> bool {
		self.backend.is_some()
	}

	/// Runtime of the enabled backend, `None` when disabled.
	pub fn runtime(&self) -> Option<Runtime> {
		self.backend.as_ref().map(|b| b.runtime())
	}

	/// Forward `message` to the tracking client.
	///
	/// Text goes to message capture, errors to exception capture, both with
	/// `attrs` passed through as-is.
	pub fn log(&self, message: impl Into<LogMessage>, attrs: &LogAttributes) {
		let Some(backend) = &self.backend else {
			debug!("Event reporter is not enabled");
			return;
		};
		backend.log(&message.into(), attrs);
	}

	/// Wait up to `timeout` for queued events to be sent.
	pub fn flush(&self, timeout: Duration) -> bool {
		match &self.backend {
			Some(backend) => backend.flush(timeout),
			None => true,
		}
	}
}

impl Default for EventReporter {
	fn default() -> Self {
		Self::disabled()
	}
}

impl fmt::Debug for EventReporter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventReporter")
			.field("enabled", &self.is_enabled())
			.field("runtime", &self.runtime())
			.finish()
	}
}
