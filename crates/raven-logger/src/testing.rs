// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory tracking SDK that records every call, for unit tests.

use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use raven_logger_core::{Dsn, GlobalHandler, LogAttributes, SdkOptions, UserIdentity};

use crate::client::{TrackingClient, TrackingSdk};
use crate::error::{Result, SdkError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
	Configure { dsn: String, options: SdkOptions },
	Install,
	CaptureException { message: String, attrs: LogAttributes },
	CaptureMessage { message: String, attrs: LogAttributes },
	SetUser(Option<UserIdentity>),
	PatchGlobal,
	Flush,
}

#[derive(Clone, Default)]
pub(crate) struct Recorder {
	calls: Arc<Mutex<Vec<Call>>>,
	handlers: Arc<Mutex<Vec<GlobalHandler>>>,
}

impl Recorder {
	pub(crate) fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}

	pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
		self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
	}

	pub(crate) fn captures(&self) -> usize {
		self.count(|c| matches!(c, Call::CaptureException { .. } | Call::CaptureMessage { .. }))
	}

	pub(crate) fn handlers(&self) -> Vec<GlobalHandler> {
		self.handlers.lock().unwrap().clone()
	}

	fn record(&self, call: Call) {
		self.calls.lock().unwrap().push(call);
	}
}

pub(crate) struct RecordingSdk {
	pub(crate) recorder: Recorder,
	pub(crate) reject_dsn: bool,
}

impl RecordingSdk {
	pub(crate) fn new(recorder: &Recorder) -> Self {
		Self {
			recorder: recorder.clone(),
			reject_dsn: false,
		}
	}
}

impl TrackingSdk for RecordingSdk {
	fn configure(&self, dsn: &Dsn, options: &SdkOptions) -> Result<Box<dyn TrackingClient>> {
		self.recorder.record(Call::Configure {
			dsn: dsn.expose().to_string(),
			options: options.clone(),
		});
		if self.reject_dsn {
			return Err(SdkError::InvalidDsn("rejected".to_string()));
		}
		Ok(Box::new(RecordingClient {
			recorder: self.recorder.clone(),
		}))
	}
}

struct RecordingClient {
	recorder: Recorder,
}

impl TrackingClient for RecordingClient {
	fn install(&self) -> Result<()> {
		self.recorder.record(Call::Install);
		Ok(())
	}

	fn capture_exception(&self, error: &(dyn Error + 'static), attrs: &LogAttributes) {
		self.recorder.record(Call::CaptureException {
			message: error.to_string(),
			attrs: attrs.clone(),
		});
	}

	fn capture_message(&self, message: &str, attrs: &LogAttributes) {
		self.recorder.record(Call::CaptureMessage {
			message: message.to_string(),
			attrs: attrs.clone(),
		});
	}

	fn set_user(&self, user: Option<UserIdentity>) {
		self.recorder.record(Call::SetUser(user));
	}

	fn patch_global(&self, handler: GlobalHandler) -> Result<()> {
		self.recorder.record(Call::PatchGlobal);
		self.recorder.handlers.lock().unwrap().push(handler);
		Ok(())
	}

	fn flush(&self, _timeout: Duration) -> bool {
		self.recorder.record(Call::Flush);
		true
	}
}
