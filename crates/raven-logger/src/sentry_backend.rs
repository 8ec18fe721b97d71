// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracking client backed by the `sentry` SDK.

use std::borrow::Cow;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use raven_logger_core::{Dsn, GlobalHandler, Level, LogAttributes, SdkOptions, UserIdentity};
use sentry::transports::DefaultTransportFactory;
use sentry::{ClientOptions, Hub, Scope, TransportFactory};
use tracing::{debug, info};

use crate::client::{TrackingClient, TrackingSdk};
use crate::error::{Result, SdkError};
use crate::panic_hook::{install_panic_hook, AfterReport};

/// Builds [`SentryClient`]s.
#[derive(Default)]
pub struct SentrySdk {
	transport: Option<Arc<dyn TransportFactory>>,
}

impl SentrySdk {
	pub fn new() -> Self {
		Self::default()
	}

	/// Use a custom transport instead of the SDK's default HTTP transport.
	pub fn with_transport(transport: Arc<dyn TransportFactory>) -> Self {
		Self {
			transport: Some(transport),
		}
	}
}

impl TrackingSdk for SentrySdk {
	fn configure(&self, dsn: &Dsn, options: &SdkOptions) -> Result<Box<dyn TrackingClient>> {
		let parsed = dsn
			.expose()
			.parse::<sentry::types::Dsn>()
			.map_err(|e| SdkError::InvalidDsn(e.to_string()))?;

		let client_options = ClientOptions {
			dsn: Some(parsed),
			environment: options.environment.clone().map(Cow::Owned),
			release: options.release.clone().map(Cow::Owned),
			server_name: options.server_name.clone().map(Cow::Owned),
			// `Client::with_options` does not pick a transport on its own.
			transport: Some(self.transport.clone().unwrap_or_else(|| {
				Arc::new(DefaultTransportFactory) as Arc<dyn TransportFactory>
			})),
			..Default::default()
		};

		let client = Arc::new(sentry::Client::with_options(client_options));
		if !client.is_enabled() {
			return Err(SdkError::ClientDisabled);
		}

		let hub = Arc::new(Hub::new(Some(Arc::clone(&client)), Arc::new(Scope::default())));

		info!(dsn = %dsn, "Tracking client configured");

		Ok(Box::new(SentryClient {
			client,
			hub,
			flush_timeout: options.flush_timeout,
		}))
	}
}

/// A configured Sentry client with its own hub.
///
/// Each client owns a hub so that two reporters in one process never share
/// scope state. [`TrackingClient::install`] additionally binds the client to
/// the process-wide main hub.
pub struct SentryClient {
	client: Arc<sentry::Client>,
	hub: Arc<Hub>,
	flush_timeout: Duration,
}

impl SentryClient {
	fn capture_with<F, R>(&self, attrs: &LogAttributes, capture: F) -> R
	where
		F: FnOnce(&Hub) -> R,
	{
		self.hub
			.with_scope(|scope| apply_attrs(scope, attrs), || capture(&self.hub))
	}
}

impl TrackingClient for SentryClient {
	fn install(&self) -> Result<()> {
		Hub::main().bind_client(Some(Arc::clone(&self.client)));
		install_panic_hook(
			Arc::clone(&self.hub),
			self.flush_timeout,
			AfterReport::PreviousHook,
		);
		debug!("Tracking client installed");
		Ok(())
	}

	fn capture_exception(&self, error: &(dyn Error + 'static), attrs: &LogAttributes) {
		let event_id = self.capture_with(attrs, |hub| hub.capture_error(error));
		debug!(event_id = %event_id, "Exception captured");
	}

	fn capture_message(&self, message: &str, attrs: &LogAttributes) {
		let level = attrs.level.map(to_sentry_level).unwrap_or(sentry::Level::Info);
		let event_id = self.capture_with(attrs, |hub| hub.capture_message(message, level));
		debug!(event_id = %event_id, "Message captured");
	}

	fn set_user(&self, user: Option<UserIdentity>) {
		let user = user.map(|u| sentry::User {
			id: Some(u.id),
			username: u.username,
			..Default::default()
		});
		self.hub.configure_scope(|scope| scope.set_user(user));
	}

	fn patch_global(&self, handler: GlobalHandler) -> Result<()> {
		install_panic_hook(
			Arc::clone(&self.hub),
			self.flush_timeout,
			AfterReport::Handler(handler),
		);
		Ok(())
	}

	fn flush(&self, timeout: Duration) -> bool {
		self.client.flush(Some(timeout))
	}
}

fn apply_attrs(scope: &mut Scope, attrs: &LogAttributes) {
	for (key, value) in &attrs.extra {
		scope.set_extra(key, value.clone());
	}
	for (key, value) in &attrs.tags {
		scope.set_tag(key, value);
	}
	if let Some(fingerprint) = &attrs.fingerprint {
		let parts: Vec<&str> = fingerprint.iter().map(String::as_str).collect();
		scope.set_fingerprint(Some(parts.as_slice()));
	}
	if let Some(level) = attrs.level {
		scope.set_level(Some(to_sentry_level(level)));
	}
}

fn to_sentry_level(level: Level) -> sentry::Level {
	match level {
		Level::Debug => sentry::Level::Debug,
		Level::Info => sentry::Level::Info,
		Level::Warning => sentry::Level::Warning,
		Level::Error => sentry::Level::Error,
		Level::Fatal => sentry::Level::Fatal,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_level_mapping() {
		assert_eq!(to_sentry_level(Level::Warning), sentry::Level::Warning);
		assert_eq!(to_sentry_level(Level::Fatal), sentry::Level::Fatal);
	}

	#[test]
	fn test_configure_accepts_valid_dsn() {
		let sdk = SentrySdk::with_transport(Arc::new(sentry::test::TestTransport::new()));
		let dsn = Dsn::parse("https://key@sentry.example.com/1").unwrap();
		assert!(sdk.configure(&dsn, &SdkOptions::default()).is_ok());
	}

	#[test]
	fn test_default_sdk_enables_client() {
		let dsn = Dsn::parse("https://key@sentry.example.com/1").unwrap();
		let result = SentrySdk::new().configure(&dsn, &SdkOptions::default());
		assert!(result.is_ok(), "{:?}", result.err());
	}

	#[test]
	fn test_default_sdk_reporter_is_enabled() {
		let dsn = Dsn::parse("https://key@sentry.example.com/1").unwrap();
		let reporter = crate::EventReporter::builder()
			.runtime(raven_logger_core::Runtime::Server)
			.initialize(
				&raven_logger_core::Settings::new().server(dsn),
				raven_logger_core::ReporterOptions::default(),
			);
		assert!(reporter.is_enabled());
	}
}
