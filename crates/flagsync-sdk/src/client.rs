// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The client capability consumed by integrations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::FsConfig;
use crate::context::FsUserContext;

/// A flag value as returned by the client.
pub type FlagValue = serde_json::Value;

/// Value returned when no variant was decided for a lookup.
pub const CONTROL_TREATMENT: &str = "control";

/// Returns true if `value` is the [`CONTROL_TREATMENT`] sentinel.
pub fn is_control(value: &FlagValue) -> bool {
	value.as_str() == Some(CONTROL_TREATMENT)
}

/// A FlagSync client.
///
/// Both methods must be safe to call concurrently from many tasks.
#[async_trait]
pub trait FsClient: Send + Sync {
	type Error: std::error::Error + Send + Sync + 'static;

	/// Completes once the client has finished its initial synchronization.
	///
	/// Calling this after the client is ready returns immediately; concurrent
	/// callers share the same underlying wait.
	async fn wait_for_ready(&self) -> Result<(), Self::Error>;

	/// Looks up `key` for `context`.
	///
	/// Returns `default_value` when the flag is unknown, or the
	/// [`CONTROL_TREATMENT`] sentinel when there is no default either.
	async fn flag(
		&self,
		context: &FsUserContext,
		key: &str,
		default_value: Option<FlagValue>,
	) -> Result<FlagValue, Self::Error>;
}

/// A constructed FlagSync SDK instance.
#[derive(Debug)]
pub struct FlagSyncInstance<C> {
	client: Arc<C>,
}

impl<C> FlagSyncInstance<C> {
	pub fn new(client: C) -> Self {
		Self {
			client: Arc::new(client),
		}
	}

	/// Returns a shared handle to the instance's client.
	pub fn client(&self) -> Arc<C> {
		Arc::clone(&self.client)
	}
}

/// Constructs FlagSync SDK instances.
pub trait FlagSyncFactory {
	type Client: FsClient;
	type Error: std::error::Error + Send + Sync + 'static;

	fn create(&self, config: FsConfig) -> Result<FlagSyncInstance<Self::Client>, Self::Error>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn control_sentinel_is_only_the_control_string() {
		assert!(is_control(&json!("control")));
		assert!(!is_control(&json!("Control")));
		assert!(!is_control(&json!("treatment")));
		assert!(!is_control(&json!(false)));
		assert!(!is_control(&json!({ "variant": "control" })));
		assert!(!is_control(&json!(null)));
	}

	#[test]
	fn instance_hands_out_the_same_client() {
		let instance = FlagSyncInstance::new(42u8);
		assert!(Arc::ptr_eq(&instance.client(), &instance.client()));
	}
}
