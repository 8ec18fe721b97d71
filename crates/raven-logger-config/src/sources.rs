// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::path::PathBuf;

use raven_logger_core::Runtime;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ReporterConfigLayer;
use crate::sections::{
	DsnConfigLayer, LoggingConfigLayer, OptionsConfigLayer, RuntimeConfigLayer, SdkConfigLayer,
};

/// Default location of the system-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/raven-logger/config.toml";

/// Merge order of the sources. A later source overrides fields set by an
/// earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Something that yields a partial reporter configuration.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ReporterConfigLayer, ConfigError>;
}

/// Empty layer: every field falls back to the section defaults in `finalize`.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ReporterConfigLayer, ConfigError> {
		Ok(ReporterConfigLayer::default())
	}
}

/// Reads `[dsn]`, `[options]`, `[sdk]`, `[logging]` and `[runtime]` tables.
///
/// A missing file yields an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"config-file"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ReporterConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ReporterConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ReporterConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Reads `RAVEN_LOGGER_*` variables:
///
/// | Variable | Field |
/// |----------|-------|
/// | `RAVEN_LOGGER_CLIENT_DSN` | `dsn.client` |
/// | `RAVEN_LOGGER_SERVER_DSN` | `dsn.server` |
/// | `RAVEN_LOGGER_TRACK_USER` | `options.track_user` |
/// | `RAVEN_LOGGER_PATCH_GLOBAL` | `options.patch_global` |
/// | `RAVEN_LOGGER_ENVIRONMENT` | `sdk.environment` |
/// | `RAVEN_LOGGER_RELEASE` | `sdk.release` |
/// | `RAVEN_LOGGER_SERVER_NAME` | `sdk.server_name` |
/// | `RAVEN_LOGGER_FLUSH_TIMEOUT_MS` | `sdk.flush_timeout_ms` |
/// | `RAVEN_LOGGER_LOG_LEVEL` | `logging.level` |
/// | `RAVEN_LOGGER_RUNTIME` | `runtime.kind` |
///
/// Empty values count as unset.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ReporterConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ReporterConfigLayer {
			dsn: Some(load_dsn_from_env()),
			options: Some(load_options_from_env()),
			sdk: Some(load_sdk_from_env()?),
			logging: Some(load_logging_from_env()),
			runtime: Some(load_runtime_from_env()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn parse_bool(value: &str) -> bool {
	value.eq_ignore_ascii_case("true") || value == "1"
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| parse_bool(&v))
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_dsn_from_env() -> DsnConfigLayer {
	DsnConfigLayer {
		client: env_var("RAVEN_LOGGER_CLIENT_DSN"),
		server: env_var("RAVEN_LOGGER_SERVER_DSN"),
	}
}

fn load_options_from_env() -> OptionsConfigLayer {
	OptionsConfigLayer {
		track_user: env_bool("RAVEN_LOGGER_TRACK_USER"),
		patch_global: env_bool("RAVEN_LOGGER_PATCH_GLOBAL"),
	}
}

fn load_sdk_from_env() -> Result<SdkConfigLayer, ConfigError> {
	Ok(SdkConfigLayer {
		environment: env_var("RAVEN_LOGGER_ENVIRONMENT"),
		release: env_var("RAVEN_LOGGER_RELEASE"),
		server_name: env_var("RAVEN_LOGGER_SERVER_NAME"),
		flush_timeout_ms: env_u64("RAVEN_LOGGER_FLUSH_TIMEOUT_MS")?,
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("RAVEN_LOGGER_LOG_LEVEL"),
	}
}

fn load_runtime_from_env() -> Result<RuntimeConfigLayer, ConfigError> {
	let kind = match env_var("RAVEN_LOGGER_RUNTIME") {
		Some(v) => Some(v.parse::<Runtime>().map_err(|e| ConfigError::InvalidValue {
			key: "RAVEN_LOGGER_RUNTIME".to_string(),
			message: e.to_string(),
		})?),
		None => None,
	};
	Ok(RuntimeConfigLayer { kind })
}
