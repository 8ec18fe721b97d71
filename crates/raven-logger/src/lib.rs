// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error and event reporting to a Sentry-compatible tracking service.
//!
//! The reporter is initialized once per runtime with a DSN and a few
//! options, then every `log` call forwards a message or an error, with
//! optional attributes, to the tracking client.
//!
//! Two runtimes are supported:
//!
//! - **Client**: a session-bound frontend. The tracking client is installed
//!   into the application and events can be correlated with the logged-in
//!   user (`track_user`).
//! - **Server**: a long-running process. Events are never tagged with a
//!   user. With `patch_global`, uncaught panics are reported and then the
//!   process exits with status 1, or a custom handler runs instead.
//!
//! # Example
//!
//! ```ignore
//! use raven_logger::{EventReporter, LogAttributes, LogMessage, ReporterOptions, Settings};
//!
//! let settings = Settings::new().server("https://key@sentry.example.com/1".parse()?);
//! let reporter = EventReporter::initialize(&settings, ReporterOptions::new().patch_global(true));
//!
//! reporter.log("worker started", &LogAttributes::default());
//! reporter.log(
//!     LogMessage::error(err),
//!     &LogAttributes::new().with_tag("queue", "emails"),
//! );
//! ```
//!
//! Initialization never fails: without a DSN for the current runtime, or
//! when the SDK rejects the DSN, the reporter is disabled and `log` does
//! nothing.

mod backend;
pub mod client;
pub mod error;
mod global;
mod panic_hook;
mod reporter;
pub mod sentry_backend;
#[cfg(test)]
mod testing;

pub use client::{TrackingClient, TrackingSdk};
pub use error::{Result, SdkError};
pub use global::{initialize, install, log, reporter};
pub use reporter::{EventReporter, EventReporterBuilder};
pub use sentry_backend::{SentryClient, SentrySdk};

pub use raven_logger_core::{
	BoxError, CurrentUser, Dsn, GlobalHandler, Level, LogAttributes, LogMessage, NoCurrentUser,
	PanicReport, PatchGlobal, ReporterError, ReporterOptions, Runtime, SdkOptions, Settings, User,
	UserIdentity, DEFAULT_FLUSH_TIMEOUT, PANIC_EXIT_STATUS,
};

/// SDK name reported in logs.
pub const SDK_NAME: &str = "raven-logger";

/// SDK version.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
