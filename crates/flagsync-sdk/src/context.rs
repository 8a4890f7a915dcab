// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The user context flags are evaluated against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of a custom attribute: string, number, boolean, null or nested JSON.
pub type CustomAttributeValue = serde_json::Value;

/// Custom attributes attached to a user context.
pub type CustomAttributes = BTreeMap<String, CustomAttributeValue>;

/// Context for a flag lookup.
///
/// `key` is the stable identity targeting and percentage rollouts hash on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FsUserContext {
	pub key: String,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub attributes: CustomAttributes,
}

impl FsUserContext {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			attributes: CustomAttributes::new(),
		}
	}

	pub fn with_attribute(mut self, name: impl Into<String>, value: CustomAttributeValue) -> Self {
		self.attributes.insert(name.into(), value);
		self
	}

	pub fn with_attributes(mut self, attributes: CustomAttributes) -> Self {
		self.attributes = attributes;
		self
	}

	pub fn attribute(&self, name: &str) -> Option<&CustomAttributeValue> {
		self.attributes.get(name)
	}
}
