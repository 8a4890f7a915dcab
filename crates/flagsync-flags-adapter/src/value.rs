// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Conversion between declared flag types and the client's JSON values.

use flagsync_sdk::FlagValue;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A JSON object flag value.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Any JSON flag value.
pub type JsonValue = serde_json::Value;

/// A type a flag can be declared with.
///
/// Implemented for every serde type, so `bool`, `String`, numbers,
/// [`JsonObject`], [`JsonValue`] and application structs all qualify.
pub trait FlagType: Send + Sync + Sized + 'static {
	/// Re-specializes a client value, or `None` if it has a different shape.
	fn from_flag_value(value: FlagValue) -> Option<Self>;

	/// Erases a declared value for the client.
	fn to_flag_value(&self) -> Option<FlagValue>;
}

impl<T> FlagType for T
where
	T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
	fn from_flag_value(value: FlagValue) -> Option<Self> {
		serde_json::from_value(value).ok()
	}

	fn to_flag_value(&self) -> Option<FlagValue> {
		serde_json::to_value(self).ok()
	}
}
