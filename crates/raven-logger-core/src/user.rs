// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User correlation for client-side reports.

use serde::{Deserialize, Serialize};

/// An authenticated user as the host application knows it.
///
/// The reporter only reads it; the application owns the auth state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	#[serde(rename = "_id", alias = "id")]
	pub id: String,
	#[serde(default)]
	pub username: Option<String>,
}

impl User {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			username: None,
		}
	}

	pub fn with_username(mut self, username: impl Into<String>) -> Self {
		self.username = Some(username.into());
		self
	}

	/// The subset of the user handed to the tracking service.
	pub fn identity(&self) -> UserIdentity {
		UserIdentity {
			id: self.id.clone(),
			username: self.username.clone(),
		}
	}
}

/// User identity attached to tracked events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
	pub id: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
}

/// Accessor for the currently authenticated user.
///
/// Sampled on every `log` call, so the value may change between calls (for
/// example when the login resolves after startup).
pub trait CurrentUser: Send + Sync {
	fn current_user(&self) -> Option<User>;
}

impl<F> CurrentUser for F
where
	F: Fn() -> Option<User> + Send + Sync,
{
	fn current_user(&self) -> Option<User> {
		self()
	}
}

/// Accessor for applications without a notion of a logged-in user.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCurrentUser;

impl CurrentUser for NoCurrentUser {
	fn current_user(&self) -> Option<User> {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::{Arc, Mutex};

	#[test]
	fn test_identity() {
		let user = User::new("u1").with_username("alice");
		assert_eq!(
			user.identity(),
			UserIdentity {
				id: "u1".to_string(),
				username: Some("alice".to_string()),
			}
		);
	}

	#[test]
	fn test_deserialize_document_id() {
		let user: User = serde_json::from_str(r#"{"_id": "u1", "username": "alice"}"#).unwrap();
		assert_eq!(user.id, "u1");
		assert_eq!(user.username.as_deref(), Some("alice"));

		let user: User = serde_json::from_str(r#"{"id": "u2"}"#).unwrap();
		assert_eq!(user.id, "u2");
		assert!(user.username.is_none());
	}

	#[test]
	fn test_closure_accessor_is_sampled_each_call() {
		let slot: Arc<Mutex<Option<User>>> = Arc::new(Mutex::new(None));
		let accessor = {
			let slot = Arc::clone(&slot);
			move || slot.lock().unwrap().clone()
		};

		assert!(accessor.current_user().is_none());
		*slot.lock().unwrap() = Some(User::new("u1"));
		assert_eq!(accessor.current_user().map(|u| u.id), Some("u1".to_string()));
	}

	#[test]
	fn test_no_current_user() {
		assert!(NoCurrentUser.current_user().is_none());
	}
}
