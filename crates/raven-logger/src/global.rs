// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide reporter handle.
//!
//! Most applications initialize once at startup and log from anywhere.
//! These functions wrap a single [`EventReporter`] for that use. Calling
//! [`initialize`] again replaces the previous reporter.

use std::sync::{Arc, PoisonError, RwLock};

use raven_logger_core::{LogAttributes, LogMessage, ReporterOptions, Settings};

use crate::reporter::EventReporter;

static REPORTER: RwLock<Option<Arc<EventReporter>>> = RwLock::new(None);

/// Initialize the process-wide reporter with the default SDK and detected
/// runtime. Returns whether the reporter ended up enabled.
pub fn initialize(settings: &Settings, options: ReporterOptions) -> bool {
	let reporter = EventReporter::initialize(settings, options);
	let enabled = reporter.is_enabled();
	install(reporter);
	enabled
}

/// Make `reporter` the process-wide reporter.
pub fn install(reporter: EventReporter) {
	let mut slot = REPORTER.write().unwrap_or_else(PoisonError::into_inner);
	*slot = Some(Arc::new(reporter));
}

/// The current process-wide reporter, if one was installed.
pub fn reporter() -> Option<Arc<EventReporter>> {
	REPORTER
		.read()
		.unwrap_or_else(PoisonError::into_inner)
		.clone()
}

/// Log through the process-wide reporter. Inert before [`initialize`].
pub fn log(message: impl Into<LogMessage>, attrs: &LogAttributes) {
	match reporter() {
		Some(reporter) => reporter.log(message, attrs),
		None => tracing::debug!("Event reporter is not enabled"),
	}
}
