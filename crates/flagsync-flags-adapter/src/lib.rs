// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! FlagSync adapter for flags SDK declarations.
//!
//! This crate lets flags declared with `flags-sdk` be decided by a FlagSync
//! client. It:
//!
//! - waits for the client's initial synchronization before the first decision
//! - turns the entities of a request into an [`FsUserContext`], defaulting the
//!   identity to `"anonymous"`
//! - maps FlagSync's `"control"` result to the declaration's own default
//! - specializes one adapter per declared value type
//!
//! # Example
//!
//! ```ignore
//! use flags_sdk::{flag, FlagDeclaration};
//! use flagsync_flags_adapter::{
//!     create_flag_sync_adapter, create_flag_sync_client, LocalFlagSyncFactory, UserEntities,
//! };
//!
//! let client = create_flag_sync_client(&LocalFlagSyncFactory, FsConfig::from_env()?)?;
//! let flagsync = create_flag_sync_adapter(client);
//!
//! let new_checkout = flag(
//!     FlagDeclaration::new("new-checkout", flagsync.boolean()).default_value(false),
//! );
//!
//! let entities = UserEntities::new().with_key("user-42");
//! if new_checkout.evaluate(Some(entities)).await? {
//!     // ...
//! }
//! ```

mod adapter;
mod client;
mod context;
mod identify;
mod readiness;
mod typed;
mod value;

pub use adapter::{
	create_flag_sync_adapter, flag_origin_url, FlagSyncAdapter, FlagSyncAdapterFactory,
	DASHBOARD_FLAGS_URL,
};
pub use client::{create_flag_sync_client, sdk_metadata, SDK_NAME, SDK_VERSION};
pub use context::{build_user_context, UserEntities, ANONYMOUS_KEY};
pub use identify::{create_identify, create_identify_sync, IdentifyFn};
pub use typed::{create_typed_flag, FeatureFlag, FlagOptions, FlagSyncFlag, TypedFlags};
pub use value::{FlagType, JsonObject, JsonValue};

// Re-export client types for convenience
pub use flagsync_sdk::{
	CustomAttributeValue, CustomAttributes, FlagSyncFactory, FlagValue, FsClient, FsConfig,
	FsError, FsUserContext, LocalClient, LocalFlagSyncFactory, LogLevel, SdkKey, SdkMetadata,
	SyncType, CONTROL_TREATMENT,
};
