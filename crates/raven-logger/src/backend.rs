// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime-specific behaviour, chosen once when the reporter is initialized.

use std::sync::Arc;
use std::time::Duration;

use raven_logger_core::{CurrentUser, LogAttributes, LogMessage, PatchGlobal, Runtime, User};
use tracing::debug;

use crate::client::TrackingClient;
use crate::error::Result;

/// One enabled reporter. Disabled reporters have no backend at all.
pub(crate) trait RuntimeBackend: Send + Sync {
	fn runtime(&self) -> Runtime;

	fn set_user(&self, user: Option<User>);

	fn log(&self, message: &LogMessage, attrs: &LogAttributes);

	fn flush(&self, timeout: Duration) -> bool;
}

/// Session-bound frontend: installs the client and may correlate events
/// with the logged-in user.
pub(crate) struct ClientBackend {
	client: Box<dyn TrackingClient>,
	track_user: bool,
	current_user: Arc<dyn CurrentUser>,
}

impl ClientBackend {
	pub(crate) fn install(
		client: Box<dyn TrackingClient>,
		track_user: bool,
		current_user: Arc<dyn CurrentUser>,
	) -> Result<Self> {
		client.install()?;
		Ok(Self {
			client,
			track_user,
			current_user,
		})
	}
}

impl RuntimeBackend for ClientBackend {
	fn runtime(&self) -> Runtime {
		Runtime::Client
	}

	fn set_user(&self, user: Option<User>) {
		// No user means nobody is logged in: clear whatever was set before.
		self.client.set_user(user.as_ref().map(User::identity));
	}

	fn log(&self, message: &LogMessage, attrs: &LogAttributes) {
		if self.track_user {
			// Sampled per call: the login may resolve after startup.
			self.set_user(self.current_user.current_user());
		}
		forward(&*self.client, message, attrs);
	}

	fn flush(&self, timeout: Duration) -> bool {
		self.client.flush(timeout)
	}
}

/// Long-running process serving many users. Never attaches user identity.
pub(crate) struct ServerBackend {
	client: Box<dyn TrackingClient>,
}

impl ServerBackend {
	pub(crate) fn new(client: Box<dyn TrackingClient>, patch_global: &PatchGlobal) -> Result<Self> {
		if let Some(handler) = patch_global.handler() {
			client.patch_global(handler)?;
			debug!(mode = ?patch_global, "Patched global error handler");
		}
		Ok(Self { client })
	}
}

impl RuntimeBackend for ServerBackend {
	fn runtime(&self) -> Runtime {
		Runtime::Server
	}

	fn set_user(&self, _user: Option<User>) {}

	fn log(&self, message: &LogMessage, attrs: &LogAttributes) {
		forward(&*self.client, message, attrs);
	}

	fn flush(&self, timeout: Duration) -> bool {
		self.client.flush(timeout)
	}
}

fn forward(client: &dyn TrackingClient, message: &LogMessage, attrs: &LogAttributes) {
	match message {
		LogMessage::Text(text) => client.capture_message(text, attrs),
		LogMessage::Error(error) => client.capture_exception(&**error, attrs),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::client::TrackingSdk;
	use crate::testing::{Call, Recorder, RecordingSdk};
	use raven_logger_core::{Dsn, NoCurrentUser, SdkOptions, UserIdentity};

	fn client(recorder: &Recorder) -> Box<dyn TrackingClient> {
		let dsn = Dsn::parse("https://key@sentry.example.com/1").unwrap();
		RecordingSdk::new(recorder)
			.configure(&dsn, &SdkOptions::default())
			.unwrap()
	}

	#[test]
	fn test_client_backend_installs() {
		let recorder = Recorder::default();
		ClientBackend::install(client(&recorder), false, Arc::new(NoCurrentUser)).unwrap();
		assert_eq!(recorder.count(|c| *c == Call::Install), 1);
	}

	#[test]
	fn test_client_set_user_clears_on_none() {
		let recorder = Recorder::default();
		let backend =
			ClientBackend::install(client(&recorder), true, Arc::new(NoCurrentUser)).unwrap();

		backend.set_user(None);
		backend.set_user(Some(User::new("u1").with_username("alice")));

		let calls = recorder.calls();
		assert_eq!(calls[calls.len() - 2], Call::SetUser(None));
		assert_eq!(
			calls[calls.len() - 1],
			Call::SetUser(Some(UserIdentity {
				id: "u1".to_string(),
				username: Some("alice".to_string()),
			}))
		);
	}

	#[test]
	fn test_server_set_user_is_noop() {
		let recorder = Recorder::default();
		let backend = ServerBackend::new(client(&recorder), &PatchGlobal::Disabled).unwrap();

		backend.set_user(Some(User::new("u1")));
		assert_eq!(recorder.count(|c| matches!(c, Call::SetUser(_))), 0);
	}

	#[test]
	fn test_server_without_patch_global_installs_nothing() {
		let recorder = Recorder::default();
		ServerBackend::new(client(&recorder), &PatchGlobal::Disabled).unwrap();
		assert_eq!(recorder.count(|c| *c == Call::PatchGlobal), 0);
		assert_eq!(recorder.count(|c| *c == Call::Install), 0);
	}

	#[test]
	fn test_server_patch_global_installs_handler() {
		let recorder = Recorder::default();
		ServerBackend::new(client(&recorder), &PatchGlobal::Exit).unwrap();
		assert_eq!(recorder.count(|c| *c == Call::PatchGlobal), 1);
		assert_eq!(recorder.handlers().len(), 1);
	}
}
