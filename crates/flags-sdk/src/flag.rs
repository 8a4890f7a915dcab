// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flag declarations and evaluation.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::Adapter;
use crate::decision::{DecideParams, Decision};
use crate::error::FlagError;
use crate::identify::{Identify, IdentifyParams, SharedIdentify};

/// Everything needed to declare a flag.
pub struct FlagDeclaration<V, E, A> {
	/// Key of the flag.
	pub key: String,
	/// Provider that decides the flag.
	pub adapter: A,
	/// Human-readable description.
	pub description: Option<String>,
	/// Value used when the adapter defers to the default.
	pub default_value: Option<V>,
	/// Hook resolving entities from request data.
	pub identify: Option<SharedIdentify<E>>,
}

impl<V, E, A> FlagDeclaration<V, E, A> {
	pub fn new(key: impl Into<String>, adapter: A) -> Self {
		Self {
			key: key.into(),
			adapter,
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
		I: Identify<E> + 'static,
	{
		self.identify = Some(Arc::new(identify));
		self
	}

	pub fn shared_identify(mut self, identify: SharedIdentify<E>) -> Self {
		self.identify = Some(identify);
		self
	}
}

/// Declares a flag.
pub fn flag<V, E, A>(declaration: FlagDeclaration<V, E, A>) -> Flag<V, E, A>
where
	A: Adapter<V, E>,
{
	debug!(flag_key = %declaration.key, "Flag declared");

	Flag {
		key: declaration.key,
		adapter: declaration.adapter,
		description: declaration.description,
		default_value: declaration.default_value,
		identify: declaration.identify,
	}
}

/// A declared flag.
pub struct Flag<V, E, A> {
	key: String,
	adapter: A,
	description: Option<String>,
	default_value: Option<V>,
	identify: Option<SharedIdentify<E>>,
}

impl<V, E, A> Flag<V, E, A>
where
	V: Clone,
	A: Adapter<V, E>,
{
	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn description(&self) -> Option<&str> {
		self.description.as_deref()
	}

	pub fn default_value(&self) -> Option<&V> {
		self.default_value.as_ref()
	}

	pub fn adapter(&self) -> &A {
		&self.adapter
	}

	/// Dashboard URL of the flag, if the adapter provides one.
	pub fn origin(&self) -> Option<String> {
		self.adapter.origin(&self.key)
	}

	/// Runs the adapter's warm-up hook.
	pub async fn initialize(&self) -> Result<(), FlagError<A::Error>> {
		self.adapter.initialize().await.map_err(FlagError::Adapter)
	}

	/// Evaluates the flag for the given entities.
	///
	/// When the adapter returns [`Decision::UseDefault`] the declared default is
	/// returned; without one the evaluation fails with
	/// [`FlagError::MissingDefault`].
	pub async fn evaluate(&self, entities: Option<E>) -> Result<V, FlagError<A::Error>> {
		let params = DecideParams {
			key: self.key.clone(),
			entities,
			default_value: self.default_value.clone(),
		};

		match self.adapter.decide(params).await.map_err(FlagError::Adapter)? {
			Decision::Value(value) => Ok(value),
			Decision::UseDefault => {
				debug!(flag_key = %self.key, "Adapter deferred to the declared default");
				self.default_value.clone().ok_or_else(|| FlagError::MissingDefault {
					key: self.key.clone(),
				})
			}
		}
	}

	/// Identifies entities from request data, then evaluates the flag.
	///
	/// Without an identify hook the flag is evaluated with no entities.
	pub async fn run(&self, params: &IdentifyParams) -> Result<V, FlagError<A::Error>> {
		let entities = match &self.identify {
			Some(identify) => Some(identify.identify(params).await.map_err(|source| {
				FlagError::Identify {
					key: self.key.clone(),
					source,
				}
			})?),
			None => None,
		};

		self.evaluate(entities).await
	}
}
