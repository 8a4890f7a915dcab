// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-process FlagSync client.
//!
//! [`LocalClient`] serves flags from memory: the config's `bootstrap` map plus
//! whatever the application pushes with [`LocalClient::set_flag`]. It has no
//! transport, so readiness is driven by the owner:
//!
//! - `SyncType::Off` clients are ready as soon as they are built
//! - other clients become ready on [`LocalClient::mark_ready`] or fail on
//!   [`LocalClient::fail_readiness`]

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info};

use crate::client::{FlagSyncFactory, FlagSyncInstance, FlagValue, FsClient, CONTROL_TREATMENT};
use crate::config::{FsConfig, SdkMetadata, SyncType};
use crate::context::FsUserContext;
use crate::error::{FsError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReadyState {
	Pending,
	Ready,
	Failed(String),
}

/// Factory for [`LocalClient`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFlagSyncFactory;

impl FlagSyncFactory for LocalFlagSyncFactory {
	type Client = LocalClient;
	type Error = FsError;

	fn create(&self, config: FsConfig) -> Result<FlagSyncInstance<LocalClient>> {
		if config.sdk_key.is_blank() {
			return Err(FsError::InvalidSdkKey);
		}

		let client = LocalClient::new(config);
		info!(
			sdk_name = client.metadata().map(|m| m.sdk_name.as_str()).unwrap_or("unknown"),
			sdk_version = client.metadata().map(|m| m.sdk_version.as_str()).unwrap_or("unknown"),
			sync_type = ?client.config().sync.sync_type,
			flags = client.config().bootstrap.len(),
			"Local FlagSync client created"
		);

		Ok(FlagSyncInstance::new(client))
	}
}

/// FlagSync client backed by an in-memory flag map.
pub struct LocalClient {
	config: FsConfig,
	flags: RwLock<HashMap<String, FlagValue>>,
	ready: watch::Sender<ReadyState>,
	closed: AtomicBool,
}

impl LocalClient {
	pub fn new(config: FsConfig) -> Self {
		let initial = if config.sync.sync_type == SyncType::Off {
			ReadyState::Ready
		} else {
			ReadyState::Pending
		};
		let (ready, _) = watch::channel(initial);

		Self {
			flags: RwLock::new(config.bootstrap.clone()),
			config,
			ready,
			closed: AtomicBool::new(false),
		}
	}

	pub fn config(&self) -> &FsConfig {
		&self.config
	}

	pub fn metadata(&self) -> Option<&SdkMetadata> {
		self.config.metadata.as_ref()
	}

	pub fn is_ready(&self) -> bool {
		*self.ready.borrow() == ReadyState::Ready
	}

	/// Marks the initial synchronization as complete, waking every waiter.
	pub fn mark_ready(&self) {
		self.ready.send_replace(ReadyState::Ready);
		debug!("Local FlagSync client ready");
	}

	/// Fails every pending and future readiness wait until [`mark_ready`](Self::mark_ready).
	pub fn fail_readiness(&self, reason: impl Into<String>) {
		let reason = reason.into();
		debug!(reason = %reason, "Local FlagSync client readiness failed");
		self.ready.send_replace(ReadyState::Failed(reason));
	}

	pub async fn set_flag(&self, key: impl Into<String>, value: FlagValue) {
		self.flags.write().await.insert(key.into(), value);
	}

	pub async fn remove_flag(&self, key: &str) -> Option<FlagValue> {
		self.flags.write().await.remove(key)
	}

	pub async fn flag_count(&self) -> usize {
		self.flags.read().await.len()
	}

	/// Closes the client. Every later call fails with [`FsError::ClientClosed`].
	pub fn close(&self) {
		self.closed.store(true, Ordering::SeqCst);
		info!("Local FlagSync client closed");
	}

	fn check_closed(&self) -> Result<()> {
		if self.closed.load(Ordering::SeqCst) {
			return Err(FsError::ClientClosed);
		}
		Ok(())
	}
}

impl fmt::Debug for LocalClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocalClient")
			.field("config", &self.config)
			.field("ready", &*self.ready.borrow())
			.field("closed", &self.closed.load(Ordering::SeqCst))
			.finish_non_exhaustive()
	}
}

#[async_trait]
impl FsClient for LocalClient {
	type Error = FsError;

	async fn wait_for_ready(&self) -> Result<()> {
		self.check_closed()?;

		let mut rx = self.ready.subscribe();
		let state = {
			let state = rx
				.wait_for(|state| *state != ReadyState::Pending)
				.await
				.map_err(|_| FsError::ClientClosed)?;
			(*state).clone()
		};

		match state {
			ReadyState::Failed(reason) => Err(FsError::ReadinessFailed(reason)),
			_ => Ok(()),
		}
	}

	async fn flag(
		&self,
		_context: &FsUserContext,
		key: &str,
		default_value: Option<FlagValue>,
	) -> Result<FlagValue> {
		self.check_closed()?;

		let value = self.flags.read().await.get(key).cloned();
		Ok(value
			.or(default_value)
			.unwrap_or_else(|| FlagValue::String(CONTROL_TREATMENT.to_string())))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_factory_rejects_empty_sdk_key() {
		assert!(matches!(
			LocalFlagSyncFactory.create(FsConfig::new("  ")),
			Err(FsError::InvalidSdkKey)
		));
	}

	#[test]
	fn test_debug_shows_state_without_sdk_key() {
		let client = LocalClient::new(FsConfig::new("fs_server_supersecret"));
		client.close();
		let debug = format!("{client:?}");
		assert!(debug.contains("Pending"));
		assert!(debug.contains("closed: true"));
		assert!(!debug.contains("supersecret"));
	}

	#[test]
	fn test_sync_off_is_ready_immediately() {
		let client = LocalClient::new(FsConfig::new("fs_server_abc").sync_type(SyncType::Off));
		assert!(client.is_ready());
		tokio_test::block_on(client.wait_for_ready()).unwrap();
	}

	#[test]
	fn test_streaming_client_starts_pending() {
		let client = LocalClient::new(FsConfig::new("fs_server_abc"));
		assert!(!client.is_ready());
		client.mark_ready();
		assert!(client.is_ready());
	}

	#[tokio::test]
	async fn test_lookup_prefers_flag_then_default_then_control() {
		let client = LocalClient::new(
			FsConfig::new("fs_server_abc")
				.sync_type(SyncType::Off)
				.bootstrap_flag("ui.theme", json!("dark")),
		);
		let ctx = FsUserContext::new("user-42");

		let theme = client.flag(&ctx, "ui.theme", Some(json!("light"))).await.unwrap();
		assert_eq!(theme, json!("dark"));
		let density = client.flag(&ctx, "ui.density", Some(json!("compact"))).await.unwrap();
		assert_eq!(density, json!("compact"));
		assert_eq!(client.flag(&ctx, "ui.density", None).await.unwrap(), json!(CONTROL_TREATMENT));
	}

	#[tokio::test]
	async fn test_set_and_remove_flags() {
		let client = LocalClient::new(FsConfig::new("fs_server_abc").sync_type(SyncType::Off));
		let ctx = FsUserContext::new("user-42");

		client.set_flag("beta", json!(true)).await;
		assert_eq!(client.flag_count().await, 1);
		assert_eq!(client.flag(&ctx, "beta", None).await.unwrap(), json!(true));

		assert_eq!(client.remove_flag("beta").await, Some(json!(true)));
		assert_eq!(client.flag(&ctx, "beta", None).await.unwrap(), json!("control"));
	}

	#[tokio::test]
	async fn test_closed_client_rejects_calls() {
		let client = LocalClient::new(FsConfig::new("fs_server_abc").sync_type(SyncType::Off));
		client.close();

		assert_eq!(client.wait_for_ready().await, Err(FsError::ClientClosed));
		assert_eq!(
			client.flag(&FsUserContext::new("user-42"), "beta", None).await,
			Err(FsError::ClientClosed)
		);
	}
}
