// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Closures as identify hooks.

use std::future::{ready, Future, Ready};

use async_trait::async_trait;
use flags_sdk::{BoxError, Identify, IdentifyParams};

use crate::context::UserEntities;

/// An identify hook backed by a closure. Built by [`create_identify`] and
/// [`create_identify_sync`].
#[derive(Clone)]
pub struct IdentifyFn<F> {
	callback: F,
}

/// Wraps an async closure as an identify hook.
///
/// ```ignore
/// let identify = create_identify(|params: IdentifyParams| async move {
///     let user = session_store.lookup(params.cookie("session")).await?;
///     Ok::<_, SessionError>(UserEntities::new().with_key(user.id))
/// });
/// ```
pub fn create_identify<F, Fut, E>(callback: F) -> IdentifyFn<F>
where
	F: Fn(IdentifyParams) -> Fut + Send + Sync,
	Fut: Future<Output = Result<UserEntities, E>> + Send + 'static,
	E: Into<BoxError> + Send + 'static,
{
	IdentifyFn { callback }
}

/// Wraps a synchronous closure as an identify hook.
pub fn create_identify_sync<F, E>(
	callback: F,
) -> IdentifyFn<impl Fn(IdentifyParams) -> Ready<Result<UserEntities, E>> + Send + Sync>
where
	F: Fn(IdentifyParams) -> Result<UserEntities, E> + Send + Sync,
	E: Into<BoxError> + Send + 'static,
{
	IdentifyFn {
		callback: move |params: IdentifyParams| ready(callback(params)),
	}
}

#[async_trait]
impl<F, Fut, E> Identify<UserEntities> for IdentifyFn<F>
where
	F: Fn(IdentifyParams) -> Fut + Send + Sync,
	Fut: Future<Output = Result<UserEntities, E>> + Send + 'static,
	E: Into<BoxError> + Send + 'static,
{
	async fn identify(&self, params: &IdentifyParams) -> Result<UserEntities, BoxError> {
		(self.callback)(params.clone()).await.map_err(Into::into)
	}
}
