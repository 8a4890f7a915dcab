// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for flag evaluation.

use thiserror::Error;

/// Boxed error used by identify hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while evaluating a declared flag.
#[derive(Error, Debug)]
pub enum FlagError<E>
where
	E: std::error::Error + Send + Sync + 'static,
{
	/// The adapter failed. The provider's error is passed through unchanged.
	#[error(transparent)]
	Adapter(E),

	/// The identify hook failed.
	#[error("Failed to identify entities for flag {key}: {source}")]
	Identify {
		/// Key of the flag being evaluated.
		key: String,
		/// Error returned by the hook.
		#[source]
		source: BoxError,
	},

	/// The adapter deferred to the default value but the flag declares none.
	#[error("Flag {key} has no decided value and no default value")]
	MissingDefault {
		/// Key of the flag being evaluated.
		key: String,
	},
}

impl<E> FlagError<E>
where
	E: std::error::Error + Send + Sync + 'static,
{
	/// Returns the provider error if the adapter failed.
	pub fn adapter_error(&self) -> Option<&E> {
		match self {
			FlagError::Adapter(e) => Some(e),
			_ => None,
		}
	}
}
