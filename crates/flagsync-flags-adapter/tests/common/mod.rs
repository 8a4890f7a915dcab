// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use flags_sdk::DecideParams;
use flagsync_flags_adapter::{FlagValue, FsClient, FsError, FsUserContext, UserEntities};
use tokio::sync::watch;

/// One `flag` call seen by a [`RecordingClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
	pub context: FsUserContext,
	pub key: String,
	pub default_value: Option<FlagValue>,
}

/// Client double that records every call and answers from a response table.
pub struct RecordingClient {
	ready: watch::Sender<bool>,
	wait_calls: AtomicUsize,
	responses: Mutex<HashMap<String, FlagValue>>,
	queries: Mutex<Vec<Query>>,
}

impl RecordingClient {
	pub fn new() -> Self {
		let (ready, _) = watch::channel(false);
		Self {
			ready,
			wait_calls: AtomicUsize::new(0),
			responses: Mutex::new(HashMap::new()),
			queries: Mutex::new(Vec::new()),
		}
	}

	pub fn ready() -> Self {
		let client = Self::new();
		client.mark_ready();
		client
	}

	pub fn mark_ready(&self) {
		self.ready.send_replace(true);
	}

	pub fn respond(&self, key: &str, value: FlagValue) {
		self.responses.lock().unwrap().insert(key.to_string(), value);
	}

	pub fn wait_calls(&self) -> usize {
		self.wait_calls.load(Ordering::SeqCst)
	}

	pub fn queries(&self) -> Vec<Query> {
		self.queries.lock().unwrap().clone()
	}
}

#[async_trait]
impl FsClient for RecordingClient {
	type Error = FsError;

	async fn wait_for_ready(&self) -> Result<(), FsError> {
		self.wait_calls.fetch_add(1, Ordering::SeqCst);
		let mut rx = self.ready.subscribe();
		rx.wait_for(|ready| *ready)
			.await
			.map_err(|_| FsError::ClientClosed)?;
		Ok(())
	}

	async fn flag(
		&self,
		context: &FsUserContext,
		key: &str,
		default_value: Option<FlagValue>,
	) -> Result<FlagValue, FsError> {
		self.queries.lock().unwrap().push(Query {
			context: context.clone(),
			key: key.to_string(),
			default_value: default_value.clone(),
		});

		let response = self.responses.lock().unwrap().get(key).cloned();
		Ok(response
			.or(default_value)
			.unwrap_or_else(|| FlagValue::String("control".to_string())))
	}
}

pub fn request<V>(key: &str) -> DecideParams<V, UserEntities> {
	DecideParams::new(key)
}
