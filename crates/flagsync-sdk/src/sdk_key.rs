// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The SDK key a client authenticates with.
//!
//! [`SdkKey`] never prints, logs or serializes its value: `Debug`, `Display`
//! and `Serialize` all produce [`REDACTED`]. The key is zeroed from memory
//! when dropped and is only reachable through [`SdkKey::expose`].
//!
//! ```
//! use flagsync_sdk::SdkKey;
//!
//! let key = SdkKey::new("fs_server_abc123");
//! assert_eq!(format!("{key}"), "[REDACTED]");
//! assert_eq!(key.expose(), "fs_server_abc123");
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Placeholder written wherever the key would otherwise appear.
pub const REDACTED: &str = "[REDACTED]";

/// A FlagSync SDK key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SdkKey(String);

impl SdkKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	/// Returns the raw key. Call sites opt in to seeing the secret.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// True when the key is empty or only whitespace.
	pub fn is_blank(&self) -> bool {
		self.0.trim().is_empty()
	}
}

impl fmt::Debug for SdkKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SdkKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for SdkKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl From<&str> for SdkKey {
	fn from(key: &str) -> Self {
		Self::new(key)
	}
}

impl From<String> for SdkKey {
	fn from(key: String) -> Self {
		Self(key)
	}
}

impl Serialize for SdkKey {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for SdkKey {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(SdkKey)
	}
}
