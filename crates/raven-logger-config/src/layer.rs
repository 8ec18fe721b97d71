// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::Deserialize;

use crate::sections::{
	DsnConfigLayer, LoggingConfigLayer, OptionsConfigLayer, RuntimeConfigLayer, SdkConfigLayer,
};

/// One source's view of the configuration. `None` sections are left to
/// lower-precedence sources.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReporterConfigLayer {
	#[serde(default)]
	pub dsn: Option<DsnConfigLayer>,
	#[serde(default)]
	pub options: Option<OptionsConfigLayer>,
	#[serde(default)]
	pub sdk: Option<SdkConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub runtime: Option<RuntimeConfigLayer>,
}

impl ReporterConfigLayer {
	/// Overlay `other` on top of `self`.
	pub fn merge(&mut self, other: ReporterConfigLayer) {
		merge_section(&mut self.dsn, other.dsn, DsnConfigLayer::merge);
		merge_section(&mut self.options, other.options, OptionsConfigLayer::merge);
		merge_section(&mut self.sdk, other.sdk, SdkConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
		merge_section(&mut self.runtime, other.runtime, RuntimeConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	if let Some(other) = other {
		match base {
			Some(existing) => merge(existing, other),
			None => *base = Some(other),
		}
	}
}
