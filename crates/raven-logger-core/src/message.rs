// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The payload handed to `log`.

use std::error::Error;
use std::fmt;

/// Boxed error accepted by [`LogMessage::Error`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Either a human-readable message or a captured error value.
///
/// Text goes down the message-capture path, errors down the
/// exception-capture path.
pub enum LogMessage {
	Text(String),
	Error(BoxError),
}

impl LogMessage {
	pub fn text(message: impl Into<String>) -> Self {
		Self::Text(message.into())
	}

	pub fn error<E>(error: E) -> Self
	where
		E: Error + Send + Sync + 'static,
	{
		Self::Error(Box::new(error))
	}

	pub fn is_error(&self) -> bool {
		matches!(self, Self::Error(_))
	}
}

impl From<&str> for LogMessage {
	fn from(message: &str) -> Self {
		Self::Text(message.to_string())
	}
}

impl From<String> for LogMessage {
	fn from(message: String) -> Self {
		Self::Text(message)
	}
}

impl From<BoxError> for LogMessage {
	fn from(error: BoxError) -> Self {
		Self::Error(error)
	}
}

impl fmt::Debug for LogMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Self::Error(error) => f.debug_tuple("Error").field(&error.to_string()).finish(),
		}
	}
}

impl fmt::Display for LogMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Error(error) => write!(f, "{error}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct Boom;

	impl fmt::Display for Boom {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("boom")
		}
	}

	impl Error for Boom {}

	#[test]
	fn test_text_conversions() {
		assert!(!LogMessage::from("oops").is_error());
		assert!(!LogMessage::from("oops".to_string()).is_error());
		assert_eq!(LogMessage::text("oops").to_string(), "oops");
	}

	#[test]
	fn test_error_variant() {
		let message = LogMessage::error(Boom);
		assert!(message.is_error());
		assert_eq!(message.to_string(), "boom");

		let boxed: BoxError = Box::new(Boom);
		assert!(LogMessage::from(boxed).is_error());
	}
}
