// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! FlagSync client capability.
//!
//! This crate describes what a FlagSync client offers to the rest of an
//! application, independent of how it talks to FlagSync:
//!
//! - [`FsClient`]: readiness handshake and per-flag lookups
//! - [`FlagSyncFactory`]: constructs clients from an [`FsConfig`]
//! - [`FsUserContext`]: the context every lookup is evaluated against
//!
//! It also ships [`LocalFlagSyncFactory`], an in-process client that serves
//! flags from memory. It is used for local development, offline mode and tests.
//!
//! # Example
//!
//! ```ignore
//! use flagsync_sdk::{
//!     FlagSyncFactory, FsClient, FsConfig, FsUserContext, LocalFlagSyncFactory, SyncType,
//! };
//!
//! let config = FsConfig::new("fs_server_xxx")
//!     .sync_type(SyncType::Off)
//!     .bootstrap_flag("checkout.new_flow", serde_json::json!(true));
//!
//! let client = LocalFlagSyncFactory.create(config)?.client();
//! client.wait_for_ready().await?;
//!
//! let value = client
//!     .flag(&FsUserContext::new("user-42"), "checkout.new_flow", None)
//!     .await?;
//! ```

mod client;
mod config;
mod context;
pub mod env;
mod error;
mod local;
mod sdk_key;

pub use client::{
	is_control, FlagSyncFactory, FlagSyncInstance, FlagValue, FsClient, CONTROL_TREATMENT,
};
pub use config::{FsConfig, LogLevel, SdkMetadata, SyncConfig, SyncType};
pub use context::{CustomAttributeValue, CustomAttributes, FsUserContext};
pub use env::{EnvError, SDK_KEY_ENV};
pub use error::{FsError, Result};
pub use local::{LocalClient, LocalFlagSyncFactory};
pub use sdk_key::SdkKey;
