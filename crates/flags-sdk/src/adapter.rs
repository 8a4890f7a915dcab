// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The provider-facing adapter contract.

use async_trait::async_trait;

use crate::decision::{DecideParams, Decision};

/// A flag provider bound to one value type `V` and entity type `E`.
///
/// Only [`decide`](Adapter::decide) is required. Providers that need a warm-up
/// step override [`initialize`](Adapter::initialize); providers with a web
/// dashboard override [`origin`](Adapter::origin).
///
/// # Example
///
/// ```ignore
/// struct AlwaysOn;
///
/// #[async_trait]
/// impl Adapter<bool, ()> for AlwaysOn {
///     type Error = std::convert::Infallible;
///
///     async fn decide(
///         &self,
///         _params: DecideParams<bool, ()>,
///     ) -> Result<Decision<bool>, Self::Error> {
///         Ok(Decision::Value(true))
///     }
/// }
/// ```
#[async_trait]
pub trait Adapter<V, E>: Send + Sync {
	/// Error produced by the provider, surfaced unchanged to callers.
	type Error: std::error::Error + Send + Sync + 'static;

	/// Waits until the provider can serve decisions.
	async fn initialize(&self) -> Result<(), Self::Error> {
		Ok(())
	}

	/// Returns a URL where the flag can be inspected.
	fn origin(&self, _key: &str) -> Option<String> {
		None
	}

	/// Decides the flag value for the given request.
	async fn decide(&self, params: DecideParams<V, E>) -> Result<Decision<V>, Self::Error>;
}
