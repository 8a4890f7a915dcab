// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::atomic::{AtomicBool, Ordering};

use flagsync_sdk::FsClient;
use tracing::debug;

/// One-way startup gate in front of a client.
///
/// Flips to ready after the first successful `wait_for_ready` and never flips
/// back. Concurrent first callers each await the client; storing `true` twice
/// is harmless.
#[derive(Debug, Default)]
pub(crate) struct ReadinessGate {
	ready: AtomicBool,
}

impl ReadinessGate {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn is_ready(&self) -> bool {
		self.ready.load(Ordering::Acquire)
	}

	pub(crate) async fn ensure_ready<C>(&self, client: &C) -> Result<(), C::Error>
	where
		C: FsClient + ?Sized,
	{
		if self.is_ready() {
			return Ok(());
		}

		client.wait_for_ready().await?;

		if !self.ready.swap(true, Ordering::AcqRel) {
			debug!("FlagSync client ready, skipping readiness checks from now on");
		}
		Ok(())
	}
}
