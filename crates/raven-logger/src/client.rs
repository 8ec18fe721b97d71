// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The capability set the reporter needs from a tracking SDK.
//!
//! Any SDK that can implement these two traits can stand in for the Sentry
//! backend in [`crate::sentry_backend`].

use std::error::Error;
use std::time::Duration;

use raven_logger_core::{Dsn, GlobalHandler, LogAttributes, SdkOptions, UserIdentity};

use crate::error::Result;

/// Entry point of a tracking SDK: turns a DSN into a configured client.
pub trait TrackingSdk: Send + Sync {
	fn configure(&self, dsn: &Dsn, options: &SdkOptions) -> Result<Box<dyn TrackingClient>>;
}

/// A configured tracking client.
///
/// Capture calls are fire-and-forget. Delivery, retries and batching are
/// the implementation's business and are never reported back.
pub trait TrackingClient: Send + Sync {
	/// Hook the client into the running application (client runtime).
	fn install(&self) -> Result<()>;

	fn capture_exception(&self, error: &(dyn Error + 'static), attrs: &LogAttributes);

	fn capture_message(&self, message: &str, attrs: &LogAttributes);

	/// Set the user attached to subsequent events, or clear it with `None`.
	fn set_user(&self, user: Option<UserIdentity>);

	/// Report uncaught panics, then run `handler`.
	fn patch_global(&self, handler: GlobalHandler) -> Result<()>;

	/// Wait up to `timeout` for queued events. Returns false on timeout.
	fn flush(&self, timeout: Duration) -> bool;
}
