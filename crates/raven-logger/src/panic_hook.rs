// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Panic hook that reports uncaught panics to the tracking service.

use std::any::Any;
use std::panic;
use std::sync::{Arc, Once, PoisonError, RwLock};
use std::time::Duration;

use raven_logger_core::{GlobalHandler, PanicReport};
use sentry::protocol::{Event, Exception, Mechanism};
use sentry::{Hub, Level};
use tracing::{debug, error};

/// What happens once the panic has been reported.
#[derive(Clone)]
pub(crate) enum AfterReport {
	/// Hand over to whatever hook was installed before (usually the default
	/// one that prints to stderr).
	PreviousHook,
	/// Run the configured global handler instead.
	Handler(GlobalHandler),
}

/// The client that receives panic reports.
#[derive(Clone)]
struct PanicTarget {
	hub: Arc<Hub>,
	flush_timeout: Duration,
	after: AfterReport,
}

static TARGET: RwLock<Option<PanicTarget>> = RwLock::new(None);
static HOOK: Once = Once::new();

/// Route uncaught panics to `hub`, then continue according to `after`.
///
/// The process hook is installed on the first call only. Later calls swap
/// the target, so a replaced client never sees another panic.
pub(crate) fn install_panic_hook(hub: Arc<Hub>, flush_timeout: Duration, after: AfterReport) {
	*TARGET.write().unwrap_or_else(PoisonError::into_inner) = Some(PanicTarget {
		hub,
		flush_timeout,
		after,
	});

	HOOK.call_once(|| {
		let previous = panic::take_hook();

		panic::set_hook(Box::new(move |info| {
			let target = TARGET.read().unwrap_or_else(PoisonError::into_inner).clone();
			let Some(target) = target else {
				previous(info);
				return;
			};

			let report = PanicReport {
				message: panic_message(info.payload()),
				location: info.location().map(|l| l.to_string()),
			};

			let event_id = target.hub.capture_event(panic_event(&report));
			if let Some(client) = target.hub.client() {
				if !client.flush(Some(target.flush_timeout)) {
					error!("Timed out flushing panic report");
				}
			}
			debug!(event_id = %event_id, "Panic reported");

			match &target.after {
				AfterReport::PreviousHook => previous(info),
				AfterReport::Handler(handler) => {
					error!(panic = %report, "Uncaught panic");
					handler(&report);
				}
			}
		}));
	});
}

/// Extract the human-readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"Box<dyn Any>".to_string()
	}
}

fn panic_event(report: &PanicReport) -> Event<'static> {
	let mut value = report.message.clone();
	if let Some(location) = &report.location {
		value = format!("{value} at {location}");
	}

	Event {
		exception: vec![Exception {
			ty: "panic".to_string(),
			value: Some(value),
			mechanism: Some(Mechanism {
				ty: "panic".to_string(),
				handled: Some(false),
				..Default::default()
			}),
			..Default::default()
		}]
		.into(),
		level: Level::Fatal,
		..Default::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_panic_message_str() {
		let payload: Box<dyn Any + Send> = Box::new("boom");
		assert_eq!(panic_message(payload.as_ref()), "boom");
	}

	#[test]
	fn test_panic_message_string() {
		let payload: Box<dyn Any + Send> = Box::new(format!("boom {}", 42));
		assert_eq!(panic_message(payload.as_ref()), "boom 42");
	}

	#[test]
	fn test_panic_message_other() {
		let payload: Box<dyn Any + Send> = Box::new(7u32);
		assert_eq!(panic_message(payload.as_ref()), "Box<dyn Any>");
	}

	#[test]
	fn test_panic_event_shape() {
		let event = panic_event(&PanicReport {
			message: "boom".to_string(),
			location: Some("src/lib.rs:1:1".to_string()),
		});
		assert_eq!(event.level, Level::Fatal);
		let exception = &event.exception.values[0];
		assert_eq!(exception.ty, "panic");
		assert_eq!(exception.value.as_deref(), Some("boom at src/lib.rs:1:1"));
		assert_eq!(exception.mechanism.as_ref().and_then(|m| m.handled), Some(false));
	}
}
