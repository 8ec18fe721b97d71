// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: Report a message and an error through the event reporter.
//!
//! Run with:
//!   RAVEN_LOGGER_SERVER_DSN=https://key@sentry.example.com/1 \
//!   cargo run --example capture -p raven-logger

use std::time::Duration;

use raven_logger::{Dsn, EventReporter, Level, LogAttributes, LogMessage, ReporterOptions, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter("raven_logger=debug")
		.init();

	let dsn: Dsn = std::env::var("RAVEN_LOGGER_SERVER_DSN")
		.map_err(|_| "RAVEN_LOGGER_SERVER_DSN environment variable required")?
		.parse()?;
	println!("Initializing event reporter...");
	println!("  DSN: {dsn}");

	let settings = Settings::new().server(dsn);
	let reporter = EventReporter::initialize(&settings, ReporterOptions::new().patch_global(true));

	if !reporter.is_enabled() {
		println!("Reporter is disabled, nothing will be sent.");
		return Ok(());
	}

	reporter.log(
		"example started",
		&LogAttributes::new()
			.with_tag("example", "true")
			.with_level(Level::Info),
	);

	let err = std::fs::read_to_string("/definitely/not/here").unwrap_err();
	reporter.log(
		LogMessage::error(err),
		&LogAttributes::new()
			.with_extra("path", "/definitely/not/here")
			.with_fingerprint(["example", "missing-file"]),
	);

	let flushed = reporter.flush(Duration::from_secs(5));
	println!("Flushed: {flushed}");

	Ok(())
}
