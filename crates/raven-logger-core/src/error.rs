// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for reporter core types.

use thiserror::Error;

/// Errors raised while building core reporter values.
#[derive(Debug, Error)]
pub enum ReporterError {
	#[error("invalid DSN: {0}")]
	InvalidDsn(String),

	#[error("DSN is missing a public key")]
	MissingPublicKey,

	#[error("DSN is missing a project id")]
	MissingProjectId,

	#[error("invalid level: {0}")]
	InvalidLevel(String),

	#[error("invalid runtime: {0}")]
	InvalidRuntime(String),
}

/// Result type for reporter core operations.
pub type Result<T> = std::result::Result<T, ReporterError>;
