// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Entity identification for flag evaluation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BoxError;

/// Request data available to an identify hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifyParams {
	/// Request headers, keyed by lowercase header name.
	pub headers: HashMap<String, String>,
	/// Request cookies, keyed by cookie name.
	pub cookies: HashMap<String, String>,
}

impl IdentifyParams {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(name.into().to_ascii_lowercase(), value.into());
		self
	}

	pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.cookies.insert(name.into(), value.into());
		self
	}

	/// Looks up a header case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}

	pub fn cookie(&self, name: &str) -> Option<&str> {
		self.cookies.get(name).map(String::as_str)
	}
}

/// Resolves the entities a flag is evaluated for.
#[async_trait]
pub trait Identify<E>: Send + Sync {
	async fn identify(&self, params: &IdentifyParams) -> Result<E, BoxError>;
}

/// Shared identify hook, attachable to any number of declarations.
pub type SharedIdentify<E> = Arc<dyn Identify<E>>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_lookup_is_case_insensitive() {
		let params = IdentifyParams::new().with_header("X-User-Id", "user-42");
		assert_eq!(params.header("x-user-id"), Some("user-42"));
		assert_eq!(params.header("X-USER-ID"), Some("user-42"));
		assert_eq!(params.header("x-other"), None);
	}

	#[test]
	fn cookie_lookup_is_exact() {
		let params = IdentifyParams::new().with_cookie("session", "abc");
		assert_eq!(params.cookie("session"), Some("abc"));
		assert_eq!(params.cookie("Session"), None);
	}
}
