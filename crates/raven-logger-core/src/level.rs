// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event severity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReporterError;

/// Severity attached to a captured event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
	Debug,
	Info,
	Warning,
	Error,
	Fatal,
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Debug => write!(f, "debug"),
			Self::Info => write!(f, "info"),
			Self::Warning => write!(f, "warning"),
			Self::Error => write!(f, "error"),
			Self::Fatal => write!(f, "fatal"),
		}
	}
}

impl FromStr for Level {
	type Err = ReporterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"debug" => Ok(Self::Debug),
			"info" | "log" => Ok(Self::Info),
			"warning" | "warn" => Ok(Self::Warning),
			"error" => Ok(Self::Error),
			"fatal" | "critical" => Ok(Self::Fatal),
			_ => Err(ReporterError::InvalidLevel(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_aliases() {
		assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
		assert_eq!("log".parse::<Level>().unwrap(), Level::Info);
		assert_eq!("CRITICAL".parse::<Level>().unwrap(), Level::Fatal);
		assert!("verbose".parse::<Level>().is_err());
	}

	#[test]
	fn test_ordering() {
		assert!(Level::Fatal > Level::Error);
		assert!(Level::Warning > Level::Info);
	}

	proptest! {
		#[test]
		fn level_roundtrip(level in prop_oneof![
			Just(Level::Debug),
			Just(Level::Info),
			Just(Level::Warning),
			Just(Level::Error),
			Just(Level::Fatal),
		]) {
			let s = level.to_string();
			let parsed: Level = s.parse().unwrap();
			prop_assert_eq!(level, parsed);
		}
	}
}
