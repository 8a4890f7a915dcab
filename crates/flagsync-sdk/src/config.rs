// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::FlagValue;
use crate::sdk_key::SdkKey;

/// How the client keeps its flag definitions up to date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
	/// Server-sent events stream.
	#[default]
	Stream,
	/// Periodic polling.
	Poll,
	/// No synchronization; only bootstrapped values are served.
	Off,
}

impl SyncType {
	pub fn parse(s: &str) -> Option<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"stream" => Some(SyncType::Stream),
			"poll" => Some(SyncType::Poll),
			"off" => Some(SyncType::Off),
			_ => None,
		}
	}
}

/// Client log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Debug,
	#[default]
	Info,
	Warn,
	Error,
	None,
}

impl LogLevel {
	pub fn parse(s: &str) -> Option<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"debug" => Some(LogLevel::Debug),
			"info" => Some(LogLevel::Info),
			"warn" => Some(LogLevel::Warn),
			"error" => Some(LogLevel::Error),
			"none" => Some(LogLevel::None),
			_ => None,
		}
	}
}

/// Synchronization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
	#[serde(default, rename = "type")]
	pub sync_type: SyncType,
	/// Polling interval, only used with [`SyncType::Poll`].
	#[serde(default = "default_interval_secs")]
	pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
	30
}

impl SyncConfig {
	pub fn interval(&self) -> Duration {
		Duration::from_secs(self.interval_secs)
	}
}

impl Default for SyncConfig {
	fn default() -> Self {
		Self {
			sync_type: SyncType::default(),
			interval_secs: default_interval_secs(),
		}
	}
}

/// Identifies the SDK layer a client was created through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkMetadata {
	pub sdk_name: String,
	pub sdk_version: String,
}

impl SdkMetadata {
	pub fn new(sdk_name: impl Into<String>, sdk_version: impl Into<String>) -> Self {
		Self {
			sdk_name: sdk_name.into(),
			sdk_version: sdk_version.into(),
		}
	}
}

/// Configuration for a FlagSync client.
///
/// A bare SDK key converts into a config with default settings:
///
/// ```
/// use flagsync_sdk::{FsConfig, SyncType};
///
/// let config: FsConfig = "fs_server_abc123".into();
/// assert_eq!(config.sdk_key.expose(), "fs_server_abc123");
/// assert_eq!(config.sync.sync_type, SyncType::Stream);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsConfig {
	/// Redacted wherever the config is printed or serialized.
	pub sdk_key: SdkKey,
	#[serde(default)]
	pub sync: SyncConfig,
	#[serde(default)]
	pub log_level: LogLevel,
	/// Flag values served before the first synchronization completes.
	#[serde(default)]
	pub bootstrap: HashMap<String, FlagValue>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<SdkMetadata>,
}

impl FsConfig {
	pub fn new(sdk_key: impl Into<SdkKey>) -> Self {
		Self {
			sdk_key: sdk_key.into(),
			sync: SyncConfig::default(),
			log_level: LogLevel::default(),
			bootstrap: HashMap::new(),
			metadata: None,
		}
	}

	pub fn sync_type(mut self, sync_type: SyncType) -> Self {
		self.sync.sync_type = sync_type;
		self
	}

	pub fn poll_interval(mut self, interval: Duration) -> Self {
		self.sync.interval_secs = interval.as_secs();
		self
	}

	pub fn log_level(mut self, log_level: LogLevel) -> Self {
		self.log_level = log_level;
		self
	}

	pub fn bootstrap_flag(mut self, key: impl Into<String>, value: FlagValue) -> Self {
		self.bootstrap.insert(key.into(), value);
		self
	}

	pub fn metadata(mut self, metadata: SdkMetadata) -> Self {
		self.metadata = Some(metadata);
		self
	}
}

impl From<&str> for FsConfig {
	fn from(sdk_key: &str) -> Self {
		FsConfig::new(sdk_key)
	}
}

impl From<String> for FsConfig {
	fn from(sdk_key: String) -> Self {
		FsConfig::new(sdk_key)
	}
}

impl From<SdkKey> for FsConfig {
	fn from(sdk_key: SdkKey) -> Self {
		FsConfig::new(sdk_key)
	}
}
