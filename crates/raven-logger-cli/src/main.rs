// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! raven-logger command-line tool.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use raven_logger::{
	EventReporter, Level, LogAttributes, LogMessage, Runtime, User, SDK_NAME, SDK_VERSION,
};
use raven_logger_config::ReporterConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// raven-logger - send events to a Sentry-compatible tracking service.
#[derive(Parser, Debug)]
#[command(name = "raven-logger", about = "Send and inspect tracking-service events", version)]
struct Cli {
	/// Config file to load instead of /etc/raven-logger/config.toml
	#[arg(long, global = true, env = "RAVEN_LOGGER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Send one message or error event
	Capture(CaptureArgs),
	/// Print the resolved configuration and whether reporting is enabled
	Check,
}

#[derive(Args, Debug)]
struct CaptureArgs {
	/// Event text
	message: String,

	/// Send as an error (exception capture) instead of a message
	#[arg(long)]
	error: bool,

	#[arg(long)]
	level: Option<Level>,

	/// Tag as key=value (repeatable)
	#[arg(long = "tag", value_parser = parse_tag)]
	tags: Vec<(String, String)>,

	/// Extra data as key=json (repeatable); non-JSON values are sent as strings
	#[arg(long = "extra", value_parser = parse_extra)]
	extra: Vec<(String, serde_json::Value)>,

	/// Fingerprint part (repeatable)
	#[arg(long = "fingerprint")]
	fingerprint: Vec<String>,

	/// Attach this user id (client runtime only)
	#[arg(long)]
	user_id: Option<String>,

	#[arg(long, requires = "user_id")]
	username: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct CapturedError(String);

fn main() -> anyhow::Result<()> {
	let cli = parse_cli(std::env::args_os(), None).unwrap_or_else(|e| e.exit());

	let config = match &cli.config {
		Some(path) => raven_logger_config::load_config_with_file(path),
		None => raven_logger_config::load_config(),
	}
	.context("failed to load configuration")?;

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	match cli.command {
		Command::Capture(args) => capture(&config, args),
		Command::Check => {
			check(&config);
			Ok(())
		}
	}
}

/// Load `.env` (or `env_file`) first so that it can supply argument defaults.
fn parse_cli<I, T>(args: I, env_file: Option<&Path>) -> Result<Cli, clap::Error>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	if let Some(path) = env_file {
		dotenvy::from_path(path).ok();
	} else {
		dotenvy::dotenv().ok();
	}
	Cli::try_parse_from(args)
}

fn capture(config: &ReporterConfig, args: CaptureArgs) -> anyhow::Result<()> {
	let runtime = config.runtime();
	let user = args.user_id.clone().map(|id| {
		let user = User::new(id);
		match &args.username {
			Some(username) => user.with_username(username),
			None => user,
		}
	});

	let mut options = config.options();
	if user.is_some() {
		if runtime.is_server() {
			tracing::warn!("--user-id is ignored in the server runtime");
		}
		options = options.track_user(true);
	}

	let reporter = EventReporter::builder()
		.runtime(runtime)
		.current_user(move || user.clone())
		.initialize(&config.settings(), options);

	if !reporter.is_enabled() {
		bail!("reporter is disabled: no usable DSN for the {runtime} runtime");
	}

	let attrs = attributes(&args);
	let message = if args.error {
		LogMessage::error(CapturedError(args.message))
	} else {
		LogMessage::text(args.message)
	};
	reporter.log(message, &attrs);

	if !reporter.flush(config.sdk.flush_timeout) {
		bail!("timed out after {:?} waiting for the event to be sent", config.sdk.flush_timeout);
	}
	println!("Event sent.");
	Ok(())
}

fn attributes(args: &CaptureArgs) -> LogAttributes {
	let mut attrs = LogAttributes::new();
	for (key, value) in &args.tags {
		attrs = attrs.with_tag(key, value);
	}
	for (key, value) in &args.extra {
		attrs = attrs.with_extra(key, value.clone());
	}
	if !args.fingerprint.is_empty() {
		attrs = attrs.with_fingerprint(args.fingerprint.iter().cloned());
	}
	if let Some(level) = args.level {
		attrs = attrs.with_level(level);
	}
	attrs
}

fn check(config: &ReporterConfig) {
	let dsn = |dsn: &Option<raven_logger::Dsn>| match dsn {
		Some(dsn) => dsn.to_string(),
		None => "(not set)".to_string(),
	};

	println!("{SDK_NAME} {SDK_VERSION}");
	println!("  Runtime: {}", config.runtime());
	println!("  Client DSN: {}", dsn(&config.dsn.client));
	println!("  Server DSN: {}", dsn(&config.dsn.server));
	println!("  Track user: {}", config.options.track_user);
	println!("  Patch global: {}", config.options.patch_global);
	if let Some(environment) = &config.sdk.environment {
		println!("  Environment: {environment}");
	}
	if let Some(release) = &config.sdk.release {
		println!("  Release: {release}");
	}
	println!("  Flush timeout: {:?}", config.sdk.flush_timeout);
	println!(
		"  Enabled: {}",
		if config.is_enabled() { "yes" } else { "no" }
	);
	if config.runtime() == Runtime::Client && config.options.patch_global {
		println!("  Note: patch_global has no effect in the client runtime");
	}
}

fn parse_tag(s: &str) -> Result<(String, String), String> {
	let (key, value) = split_pair(s)?;
	Ok((key.to_string(), value.to_string()))
}

fn parse_extra(s: &str) -> Result<(String, serde_json::Value), String> {
	let (key, value) = split_pair(s)?;
	let value = serde_json::from_str(value)
		.unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
	Ok((key.to_string(), value))
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
	match s.split_once('=') {
		Some((key, value)) if !key.is_empty() => Ok((key, value)),
		_ => Err(format!("expected key=value, got '{s}'")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_tag() {
		assert_eq!(
			parse_tag("component=billing").unwrap(),
			("component".to_string(), "billing".to_string())
		);
		assert_eq!(
			parse_tag("query=a=b").unwrap(),
			("query".to_string(), "a=b".to_string())
		);
		assert!(parse_tag("novalue").is_err());
		assert!(parse_tag("=value").is_err());
	}

	#[test]
	fn test_parse_extra_json_and_fallback() {
		assert_eq!(parse_extra("n=42").unwrap().1, serde_json::json!(42));
		assert_eq!(
			parse_extra("ids=[1,2]").unwrap().1,
			serde_json::json!([1, 2])
		);
		assert_eq!(parse_extra("name=alice").unwrap().1, serde_json::json!("alice"));
	}

	#[test]
	fn test_capture_args() {
		let cli = Cli::try_parse_from([
			"raven-logger",
			"capture",
			"card declined",
			"--level",
			"warning",
			"--tag",
			"component=billing",
			"--extra",
			"order=7",
			"--fingerprint",
			"billing",
			"--fingerprint",
			"declined",
		])
		.unwrap();

		let Command::Capture(args) = cli.command else {
			panic!("expected capture");
		};
		let attrs = attributes(&args);
		assert_eq!(attrs.level, Some(Level::Warning));
		assert_eq!(attrs.tags.get("component").map(String::as_str), Some("billing"));
		assert_eq!(attrs.extra.get("order"), Some(&serde_json::json!(7)));
		assert_eq!(
			attrs.fingerprint,
			Some(vec!["billing".to_string(), "declined".to_string()])
		);
	}

	#[test]
	fn test_username_requires_user_id() {
		let result =
			Cli::try_parse_from(["raven-logger", "capture", "oops", "--username", "alice"]);
		assert!(result.is_err());
	}

	#[test]
	fn test_env_file_supplies_config_path() {
		let dir = tempfile::tempdir().unwrap();
		let env_file = dir.path().join(".env");
		std::fs::write(&env_file, "RAVEN_LOGGER_CONFIG=/etc/raven-logger/from-env-file.toml\n")
			.unwrap();

		let cli = parse_cli(["raven-logger", "check"], Some(&env_file)).unwrap();
		assert_eq!(
			cli.config,
			Some(PathBuf::from("/etc/raven-logger/from-env-file.toml"))
		);
	}

	#[test]
	fn test_check_parses() {
		let cli =
			Cli::try_parse_from(["raven-logger", "--config", "/tmp/r.toml", "check"]).unwrap();
		assert!(matches!(cli.command, Command::Check));
		assert_eq!(cli.config, Some(PathBuf::from("/tmp/r.toml")));
	}
}
