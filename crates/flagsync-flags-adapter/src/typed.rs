// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed flag declarations.
//!
//! Each flag an application knows about is a type implementing
//! [`FeatureFlag`], tying its key to its value type. Declaring flags through
//! [`TypedFlags`] pairs every declaration with a matching adapter, so a key can
//! only be declared with the type it was defined with.
//!
//! ```ignore
//! feature_flags! {
//!     /// New checkout flow.
//!     pub struct NewCheckout: bool = "new-checkout";
//!     pub struct Theme: String = "ui.theme";
//! }
//!
//! let flags = create_typed_flag(client);
//! let new_checkout = flags.flag::<NewCheckout>(FlagOptions::new().default_value(false));
//! let theme = flags.flag::<Theme>(FlagOptions::new().default_value("light".to_string()));
//! ```

use std::sync::Arc;

use flags_sdk::{flag, Flag, FlagDeclaration, Identify, SharedIdentify};
use flagsync_sdk::FsClient;

use crate::adapter::{create_flag_sync_adapter, FlagSyncAdapter, FlagSyncAdapterFactory};
use crate::context::UserEntities;
use crate::value::FlagType;

/// A flag known at compile time.
pub trait FeatureFlag: 'static {
	/// Key of the flag in FlagSync.
	const KEY: &'static str;

	/// Type the flag is declared with.
	type Value: FlagType;
}

/// Declares [`FeatureFlag`] types.
///
/// ```ignore
/// feature_flags! {
///     pub struct BetaUi: bool = "beta-ui";
///     pub(crate) struct Layout: JsonObject = "home.layout";
/// }
/// ```
#[macro_export]
macro_rules! feature_flags {
	($( $(#[$meta:meta])* $vis:vis struct $name:ident : $value:ty = $key:literal; )*) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
			$vis struct $name;

			impl $crate::FeatureFlag for $name {
				const KEY: &'static str = $key;
				type Value = $value;
			}
		)*
	};
}

/// A flag declared through the FlagSync adapter.
pub type FlagSyncFlag<C, V> = Flag<V, UserEntities, FlagSyncAdapter<C, V>>;

/// Declaration fields other than the key and the adapter.
pub struct FlagOptions<V> {
	pub description: Option<String>,
	pub default_value: Option<V>,
	pub identify: Option<SharedIdentify<UserEntities>>,
}

impl<V> FlagOptions<V> {
	pub fn new() -> Self {
		Self {
			description: None,
			default_value: None,
			identify: None,
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn default_value(mut self, default_value: V) -> Self {
		self.default_value = Some(default_value);
		self
	}

	pub fn identify<I>(mut self, identify: I) -> Self
	where
		I: Identify<UserEntities> + 'static,
	{
		self.identify = Some(Arc::new(identify));
		self
	}

	pub fn shared_identify(mut self, identify: SharedIdentify<UserEntities>) -> Self {
		self.identify = Some(identify);
		self
	}
}

impl<V> Default for FlagOptions<V> {
	fn default() -> Self {
		Self::new()
	}
}

/// Creates a typed declaration helper around a shared client.
pub fn create_typed_flag<C: FsClient>(client: Arc<C>) -> TypedFlags<C> {
	TypedFlags {
		adapters: create_flag_sync_adapter(client),
	}
}

/// Declares [`FeatureFlag`]s backed by one FlagSync client.
///
/// All flags declared through one helper share its readiness gate.
pub struct TypedFlags<C> {
	adapters: FlagSyncAdapterFactory<C>,
}

impl<C: FsClient + 'static> TypedFlags<C> {
	/// Declares `F` with an adapter specialized to `F::Value`.
	pub fn flag<F: FeatureFlag>(
		&self,
		options: FlagOptions<F::Value>,
	) -> FlagSyncFlag<C, F::Value> {
		let declaration = FlagDeclaration {
			key: F::KEY.to_string(),
			adapter: self.adapters.adapter::<F::Value>(),
			description: options.description,
			default_value: options.default_value,
			identify: options.identify,
		};

		flag(declaration)
	}

	pub fn adapters(&self) -> &FlagSyncAdapterFactory<C> {
		&self.adapters
	}
}
