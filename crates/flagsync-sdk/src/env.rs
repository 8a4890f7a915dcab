// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading client configuration from environment variables.
//!
//! The SDK key follows the `VAR` / `VAR_FILE` convention used by Docker and
//! Kubernetes secrets: `FLAGSYNC_SDK_KEY_FILE` points at a file holding the
//! key and takes precedence over `FLAGSYNC_SDK_KEY`.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::config::{FsConfig, LogLevel, SyncType};
use crate::sdk_key::SdkKey;

/// Variable holding the SDK key.
pub const SDK_KEY_ENV: &str = "FLAGSYNC_SDK_KEY";

/// Variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "FLAGSYNC_LOG_LEVEL";

/// Variable overriding the sync type.
pub const SYNC_TYPE_ENV: &str = "FLAGSYNC_SYNC_TYPE";

/// Errors that can occur when loading configuration from the environment.
#[derive(Debug, Error)]
pub enum EnvError {
	/// Failed to read the secret file.
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The secret file path was empty.
	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },

	/// Neither the variable nor its `_FILE` variant is set.
	#[error("required secret not found: set either {var} or {file_var}")]
	Missing { var: String, file_var: String },

	/// A variable holds a value outside its accepted set.
	#[error("invalid value {value:?} in {var}")]
	InvalidValue { var: String, value: String },
}

/// Reads an SDK key from `var`, or from the file named by `{var}_FILE`.
///
/// The file variant wins when both are set. One trailing newline is dropped
/// from file contents. Returns `Ok(None)` when neither variable is set.
pub fn load_sdk_key(var: &str) -> Result<Option<SdkKey>, EnvError> {
	let file_var = format!("{var}_FILE");

	let Ok(path) = env::var(&file_var) else {
		return Ok(env::var(var).ok().map(SdkKey::from));
	};
	if path.is_empty() {
		return Err(EnvError::EmptyPath { var: file_var });
	}

	let path = PathBuf::from(path);
	let mut key = fs::read_to_string(&path).map_err(|source| EnvError::Io { path, source })?;
	if key.ends_with('\n') {
		key.pop();
	}
	Ok(Some(SdkKey::from(key)))
}

/// Like [`load_sdk_key`], failing with [`EnvError::Missing`] when unset.
pub fn require_sdk_key(var: &str) -> Result<SdkKey, EnvError> {
	load_sdk_key(var)?.ok_or_else(|| EnvError::Missing {
		var: var.to_string(),
		file_var: format!("{var}_FILE"),
	})
}

fn parse_optional<T>(var: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>, EnvError> {
	match env::var(var) {
		Ok(value) => parse(&value)
			.map(Some)
			.ok_or(EnvError::InvalidValue {
				var: var.to_string(),
				value,
			}),
		Err(_) => Ok(None),
	}
}

impl FsConfig {
	/// Builds a config from `FLAGSYNC_SDK_KEY` (or `FLAGSYNC_SDK_KEY_FILE`),
	/// `FLAGSYNC_LOG_LEVEL` and `FLAGSYNC_SYNC_TYPE`.
	pub fn from_env() -> Result<Self, EnvError> {
		let mut config = FsConfig::new(require_sdk_key(SDK_KEY_ENV)?);

		if let Some(log_level) = parse_optional(LOG_LEVEL_ENV, LogLevel::parse)? {
			config = config.log_level(log_level);
		}
		if let Some(sync_type) = parse_optional(SYNC_TYPE_ENV, SyncType::parse)? {
			config = config.sync_type(sync_type);
		}

		Ok(config)
	}
}
