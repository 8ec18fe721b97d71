// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the reporter.

use thiserror::Error;

/// Result type alias for reporter operations.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors raised while wiring up the tracking client.
///
/// None of these escape `initialize` or `log`; they are logged and the
/// reporter stays disabled.
#[derive(Debug, Error)]
pub enum SdkError {
	/// The vendor SDK rejected the connection string.
	#[error("tracking client rejected DSN: {0}")]
	InvalidDsn(String),

	/// The vendor client was built but will not send events.
	#[error("tracking client is disabled")]
	ClientDisabled,
}
