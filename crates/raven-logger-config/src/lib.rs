// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the raven-logger reporter.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Conversion into the [`Settings`] and [`ReporterOptions`] taken by `initialize`
//! - Consistent environment variable naming (`RAVEN_LOGGER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use raven_logger_config::load_config;
//!
//! let config = load_config()?;
//! raven_logger::initialize(&config.settings(), config.options());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ReporterConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH,
};

use raven_logger_core::{ReporterOptions, Runtime, Settings};
use tracing::{debug, info};

/// Fully resolved reporter configuration.
#[derive(Debug, Clone, Default)]
pub struct ReporterConfig {
	pub dsn: DsnConfig,
	pub options: OptionsConfig,
	pub sdk: SdkConfig,
	pub logging: LoggingConfig,
	pub runtime: RuntimeConfig,
}

impl ReporterConfig {
	pub fn settings(&self) -> Settings {
		Settings {
			client: self.dsn.client.clone(),
			server: self.dsn.server.clone(),
		}
	}

	pub fn options(&self) -> ReporterOptions {
		ReporterOptions::new()
			.track_user(self.options.track_user)
			.patch_global(self.options.patch_global)
			.sdk(self.sdk.to_options())
	}

	pub fn runtime(&self) -> Runtime {
		self.runtime.runtime
	}

	/// Whether `initialize` would enable the reporter for the configured runtime.
	pub fn is_enabled(&self) -> bool {
		match self.runtime() {
			Runtime::Client => self.dsn.client.is_some(),
			Runtime::Server => self.dsn.server.is_some(),
		}
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`RAVEN_LOGGER_*`)
/// 2. Config file (`/etc/raven-logger/config.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ReporterConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<ReporterConfig, ConfigError> {
	load_from_sources(vec![Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ReporterConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ReporterConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ReporterConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ReporterConfigLayer) -> Result<ReporterConfig, ConfigError> {
	let dsn = layer.dsn.unwrap_or_default().finalize()?;
	let options = layer.options.unwrap_or_default().finalize();
	let sdk = layer.sdk.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let runtime = layer.runtime.unwrap_or_default().finalize();

	info!(
		runtime = %runtime.runtime,
		client_dsn = ?dsn.client,
		server_dsn = ?dsn.server,
		track_user = options.track_user,
		patch_global = options.patch_global,
		"Reporter configuration loaded"
	);

	Ok(ReporterConfig {
		dsn,
		options,
		sdk,
		logging,
		runtime,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn layer_with(
		client: Option<&str>,
		server: Option<&str>,
		runtime: Runtime,
	) -> ReporterConfigLayer {
		ReporterConfigLayer {
			dsn: Some(DsnConfigLayer {
				client: client.map(str::to_string),
				server: server.map(str::to_string),
			}),
			runtime: Some(RuntimeConfigLayer {
				kind: Some(runtime),
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_client_dsn_enables_client_runtime_only() {
		let config = finalize(layer_with(
			Some("https://pub@sentry.example.com/1"),
			None,
			Runtime::Client,
		))
		.unwrap();
		assert!(config.is_enabled());

		let config = finalize(layer_with(
			Some("https://pub@sentry.example.com/1"),
			None,
			Runtime::Server,
		))
		.unwrap();
		assert!(!config.is_enabled());
	}

	#[test]
	fn test_empty_config_is_disabled() {
		let config = finalize(ReporterConfigLayer::default()).unwrap();
		assert!(!config.is_enabled());
		assert!(config.settings().client.is_none());
		assert!(config.settings().server.is_none());
	}

	#[test]
	fn test_options_conversion() {
		let layer = ReporterConfigLayer {
			options: Some(OptionsConfigLayer {
				track_user: Some(true),
				patch_global: Some(true),
			}),
			..Default::default()
		};
		let options = finalize(layer).unwrap().options();
		assert!(options.track_user);
		assert!(options.patch_global.is_enabled());
	}

	#[test]
	fn test_load_with_missing_file_uses_defaults() {
		let config = load_config_with_file("/nonexistent/raven-logger.toml").unwrap();
		assert_eq!(config.sdk.flush_timeout, raven_logger_core::DEFAULT_FLUSH_TIMEOUT);
	}
}
