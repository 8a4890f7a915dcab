// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Adapter between a FlagSync client and flags SDK declarations.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use flags_sdk::{Adapter, DecideParams, Decision};
use flagsync_sdk::{is_control, FsClient};
use tracing::{debug, warn};

use crate::context::{build_user_context, UserEntities};
use crate::readiness::ReadinessGate;
use crate::value::{FlagType, JsonObject, JsonValue};

/// Base URL of flag pages in the FlagSync dashboard.
pub const DASHBOARD_FLAGS_URL: &str = "https://www.flagsync.com/dashboard/flags";

/// Dashboard URL for a flag.
pub fn flag_origin_url(key: &str) -> String {
	format!("{DASHBOARD_FLAGS_URL}/{key}")
}

/// Creates an adapter factory around a shared client.
///
/// Every adapter built by the returned factory shares one readiness gate: the
/// first decision waits for the client, later ones do not. Factories created
/// separately over the same client each wait once on their own.
///
/// # Example
///
/// ```ignore
/// let flagsync = create_flag_sync_adapter(client);
///
/// let new_checkout = flag(
///     FlagDeclaration::new("new-checkout", flagsync.boolean()).default_value(false),
/// );
/// let theme = flag(
///     FlagDeclaration::new("ui.theme", flagsync.string()).default_value("light".to_string()),
/// );
/// ```
pub fn create_flag_sync_adapter<C: FsClient>(client: Arc<C>) -> FlagSyncAdapterFactory<C> {
	FlagSyncAdapterFactory {
		client,
		gate: Arc::new(ReadinessGate::new()),
	}
}

/// Builds [`FlagSyncAdapter`]s that share one client and one readiness gate.
pub struct FlagSyncAdapterFactory<C> {
	client: Arc<C>,
	gate: Arc<ReadinessGate>,
}

impl<C: FsClient> FlagSyncAdapterFactory<C> {
	/// Builds an adapter for flags of type `V`.
	pub fn adapter<V: FlagType>(&self) -> FlagSyncAdapter<C, V> {
		FlagSyncAdapter {
			client: Arc::clone(&self.client),
			gate: Arc::clone(&self.gate),
			_value: PhantomData,
		}
	}

	/// Adapter for flags whose type is left to the caller.
	pub fn untyped(&self) -> FlagSyncAdapter<C, JsonValue> {
		self.adapter()
	}

	pub fn boolean(&self) -> FlagSyncAdapter<C, bool> {
		self.adapter()
	}

	pub fn string(&self) -> FlagSyncAdapter<C, String> {
		self.adapter()
	}

	pub fn number(&self) -> FlagSyncAdapter<C, f64> {
		self.adapter()
	}

	pub fn json(&self) -> FlagSyncAdapter<C, JsonObject> {
		self.adapter()
	}

	/// Returns true once a decision has observed the client as ready.
	pub fn is_ready(&self) -> bool {
		self.gate.is_ready()
	}
}

impl<C> Clone for FlagSyncAdapterFactory<C> {
	fn clone(&self) -> Self {
		Self {
			client: Arc::clone(&self.client),
			gate: Arc::clone(&self.gate),
		}
	}
}

impl<C> fmt::Debug for FlagSyncAdapterFactory<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlagSyncAdapterFactory")
			.field("ready", &self.gate.is_ready())
			.finish_non_exhaustive()
	}
}

/// Decides flags of type `V` through a FlagSync client.
///
/// A `"control"` result, or a value that does not deserialize into `V`,
/// yields [`Decision::UseDefault`]. The mismatch case is logged at warn level.
/// Any other value is returned as the client produced it.
pub struct FlagSyncAdapter<C, V> {
	client: Arc<C>,
	gate: Arc<ReadinessGate>,
	_value: PhantomData<fn() -> V>,
}

impl<C: FsClient, V: FlagType> FlagSyncAdapter<C, V> {
	/// Returns true once a decision has observed the client as ready.
	pub fn is_ready(&self) -> bool {
		self.gate.is_ready()
	}
}

impl<C, V> Clone for FlagSyncAdapter<C, V> {
	fn clone(&self) -> Self {
		Self {
			client: Arc::clone(&self.client),
			gate: Arc::clone(&self.gate),
			_value: PhantomData,
		}
	}
}

impl<C, V> fmt::Debug for FlagSyncAdapter<C, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FlagSyncAdapter")
			.field("value_type", &std::any::type_name::<V>())
			.field("ready", &self.gate.is_ready())
			.finish_non_exhaustive()
	}
}

#[async_trait]
impl<C, V> Adapter<V, UserEntities> for FlagSyncAdapter<C, V>
where
	C: FsClient + 'static,
	V: FlagType,
{
	type Error = C::Error;

	async fn initialize(&self) -> Result<(), Self::Error> {
		self.gate.ensure_ready(&*self.client).await
	}

	fn origin(&self, key: &str) -> Option<String> {
		Some(flag_origin_url(key))
	}

	async fn decide(
		&self,
		params: DecideParams<V, UserEntities>,
	) -> Result<Decision<V>, Self::Error> {
		self.gate.ensure_ready(&*self.client).await?;

		let context = build_user_context(params.entities);
		let default_value = params.default_value.as_ref().and_then(|value| value.to_flag_value());

		let value = self.client.flag(&context, &params.key, default_value).await?;

		if is_control(&value) {
			debug!(
				flag_key = %params.key,
				"Client returned control, deferring to declared default"
			);
			return Ok(Decision::UseDefault);
		}

		match V::from_flag_value(value) {
			Some(value) => Ok(Decision::Value(value)),
			None => {
				warn!(
					flag_key = %params.key,
					expected_type = std::any::type_name::<V>(),
					"Flag value does not match the declared type, using default"
				);
				Ok(Decision::UseDefault)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn origin_is_a_pure_function_of_the_key() {
		assert_eq!(
			flag_origin_url("new-checkout"),
			"https://www.flagsync.com/dashboard/flags/new-checkout"
		);
		assert_eq!(flag_origin_url("beta-ui"), flag_origin_url("beta-ui"));
		assert_ne!(flag_origin_url("beta-ui"), flag_origin_url("beta-ux"));
	}
}
