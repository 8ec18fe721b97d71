// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-event attributes forwarded with a capture.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Optional context attached to a single `log` call.
///
/// The reporter passes these through to the vendor client untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogAttributes {
	/// Arbitrary key/value context.
	#[serde(default)]
	pub extra: serde_json::Map<String, serde_json::Value>,
	/// Indexed, searchable tags.
	#[serde(default)]
	pub tags: BTreeMap<String, String>,
	/// Grouping key; replaces the service's default grouping when set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fingerprint: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub level: Option<Level>,
}

impl LogAttributes {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_extra(
		mut self,
		key: impl Into<String>,
		value: impl Into<serde_json::Value>,
	) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}

	pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.tags.insert(key.into(), value.into());
		self
	}

	pub fn with_fingerprint<I, S>(mut self, parts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fingerprint = Some(parts.into_iter().map(Into::into).collect());
		self
	}

	pub fn with_level(mut self, level: Level) -> Self {
		self.level = Some(level);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.extra.is_empty()
			&& self.tags.is_empty()
			&& self.fingerprint.is_none()
			&& self.level.is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_empty() {
		assert!(LogAttributes::default().is_empty());
	}

	#[test]
	fn test_builder() {
		let attrs = LogAttributes::new()
			.with_extra("order_id", 42)
			.with_tag("component", "checkout")
			.with_fingerprint(["checkout", "timeout"])
			.with_level(Level::Warning);

		assert!(!attrs.is_empty());
		assert_eq!(attrs.extra["order_id"], serde_json::json!(42));
		assert_eq!(attrs.tags["component"], "checkout");
		assert_eq!(
			attrs.fingerprint.as_deref(),
			Some(&["checkout".to_string(), "timeout".to_string()][..])
		);
		assert_eq!(attrs.level, Some(Level::Warning));
	}

	#[test]
	fn test_deserialize_partial() {
		let attrs: LogAttributes =
			serde_json::from_str(r#"{"tags": {"a": "b"}, "level": "error"}"#).unwrap();
		assert_eq!(attrs.tags["a"], "b");
		assert_eq!(attrs.level, Some(Level::Error));
		assert!(attrs.extra.is_empty());
		assert!(attrs.fingerprint.is_none());
	}
}
