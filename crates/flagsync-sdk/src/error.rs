// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the FlagSync client.

use thiserror::Error;

/// Result type alias for the FlagSync client.
pub type Result<T> = std::result::Result<T, FsError>;

/// Errors that can occur in the FlagSync client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
	/// SDK key is missing or empty.
	#[error("Invalid or missing SDK key")]
	InvalidSdkKey,

	/// The client could not complete its initial synchronization.
	#[error("Client failed to become ready: {0}")]
	ReadinessFailed(String),

	/// Client already closed.
	#[error("Client has been closed")]
	ClientClosed,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_messages() {
		assert_eq!(
			FsError::ReadinessFailed("upstream returned 503".to_string()).to_string(),
			"Client failed to become ready: upstream returned 503"
		);
		assert_eq!(FsError::ClientClosed.to_string(), "Client has been closed");
	}
}
