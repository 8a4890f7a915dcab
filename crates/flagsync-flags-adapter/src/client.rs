// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Construction of the shared FlagSync client.

use std::sync::Arc;

use flagsync_sdk::{FlagSyncFactory, FsConfig, SdkMetadata};
use tracing::info;

/// Name reported to FlagSync for clients created through this crate.
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Version reported to FlagSync for clients created through this crate.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Metadata stamped on every client created through [`create_flag_sync_client`].
pub fn sdk_metadata() -> SdkMetadata {
	SdkMetadata::new(SDK_NAME, SDK_VERSION)
}

/// Creates a FlagSync client to share across every flag of the application.
///
/// Call this once per process. Each call builds an independent client with its
/// own connection and readiness; adapters meant to share state must share the
/// handle returned here.
///
/// `config` is a full [`FsConfig`] or a bare SDK key. Construction errors are
/// returned as the factory produced them.
///
/// ```ignore
/// let client = create_flag_sync_client(&LocalFlagSyncFactory, "fs_server_xxx")?;
/// ```
pub fn create_flag_sync_client<F>(
	factory: &F,
	config: impl Into<FsConfig>,
) -> Result<Arc<F::Client>, F::Error>
where
	F: FlagSyncFactory,
{
	let config = config.into().metadata(sdk_metadata());
	let instance = factory.create(config)?;

	info!(
		sdk_name = SDK_NAME,
		sdk_version = SDK_VERSION,
		"FlagSync client created"
	);

	Ok(instance.client())
}
