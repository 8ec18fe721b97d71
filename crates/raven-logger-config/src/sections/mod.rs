// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod dsn;
mod logging;
mod options;
mod runtime;
mod sdk;

pub use dsn::{DsnConfig, DsnConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use options::{OptionsConfig, OptionsConfigLayer};
pub use runtime::{RuntimeConfig, RuntimeConfigLayer};
pub use sdk::{SdkConfig, SdkConfigLayer};
