// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flag declaration contracts.
//!
//! This crate defines the surface a flag provider plugs into:
//!
//! - [`Adapter`]: the `decide` / `initialize` / `origin` hooks a provider implements
//! - [`Identify`]: resolves the entities a flag is evaluated for
//! - [`flag`]: declares a flag and evaluates it, applying the declared default
//!   when the adapter defers to it
//!
//! # Example
//!
//! ```ignore
//! use flags_sdk::{flag, FlagDeclaration};
//!
//! let show_banner = flag(
//!     FlagDeclaration::new("marketing.banner", my_adapter)
//!         .description("Show the summer banner")
//!         .default_value(false),
//! );
//!
//! let enabled = show_banner.evaluate(Some(entities)).await?;
//! ```

mod adapter;
mod decision;
mod error;
mod flag;
mod identify;

pub use adapter::Adapter;
pub use decision::{DecideParams, Decision};
pub use error::{BoxError, FlagError};
pub use flag::{flag, Flag, FlagDeclaration};
pub use identify::{Identify, IdentifyParams, SharedIdentify};
