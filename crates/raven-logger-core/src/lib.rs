// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the raven-logger error reporting adapter.
//!
//! This crate holds the vocabulary shared by the reporter, its configuration
//! loader and the CLI:
//! - [`Settings`] and [`ReporterOptions`]: what `initialize` receives
//! - [`LogMessage`] and [`LogAttributes`]: what `log` receives
//! - [`User`] and [`CurrentUser`]: the optional client-side user correlation
//! - [`Runtime`]: which side of the application the reporter runs on
//!
//! Nothing here talks to the tracking service. Capture, transport and retry
//! belong to the vendor SDK wired up by the `raven-logger` crate.

pub mod attrs;
pub mod dsn;
pub mod error;
pub mod level;
pub mod message;
pub mod options;
pub mod runtime;
pub mod user;

pub use attrs::LogAttributes;
pub use dsn::Dsn;
pub use error::{ReporterError, Result};
pub use level::Level;
pub use message::{BoxError, LogMessage};
pub use options::{
	GlobalHandler, PanicReport, PatchGlobal, ReporterOptions, SdkOptions, Settings,
	DEFAULT_FLUSH_TIMEOUT, PANIC_EXIT_STATUS,
};
pub use runtime::Runtime;
pub use user::{CurrentUser, NoCurrentUser, User, UserIdentity};
