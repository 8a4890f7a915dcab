// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Entities supplied by callers and their normalization into a lookup context.

use flagsync_sdk::{CustomAttributeValue, CustomAttributes, FsUserContext};
use serde::{Deserialize, Serialize};

/// Identity used when the caller supplies none.
pub const ANONYMOUS_KEY: &str = "anonymous";

/// A partial [`FsUserContext`]: every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserEntities {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attributes: Option<CustomAttributes>,
}

impl UserEntities {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	pub fn with_attribute(mut self, name: impl Into<String>, value: CustomAttributeValue) -> Self {
		self.attributes
			.get_or_insert_with(CustomAttributes::new)
			.insert(name.into(), value);
		self
	}
}

impl From<FsUserContext> for UserEntities {
	fn from(ctx: FsUserContext) -> Self {
		Self {
			key: Some(ctx.key),
			attributes: Some(ctx.attributes),
		}
	}
}

/// Builds the lookup context for one decision.
///
/// Starts from the anonymous context and overlays every field the entities
/// carry. Fields replace rather than merge: entity attributes replace the
/// attribute set as a whole.
pub fn build_user_context(entities: Option<UserEntities>) -> FsUserContext {
	let mut ctx = FsUserContext::new(ANONYMOUS_KEY);

	if let Some(entities) = entities {
		if let Some(key) = entities.key {
			ctx.key = key;
		}
		if let Some(attributes) = entities.attributes {
			ctx.attributes = attributes;
		}
	}

	ctx
}
