// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Input to [`Adapter::decide`](crate::Adapter::decide).
#[derive(Debug, Clone, PartialEq)]
pub struct DecideParams<V, E> {
	/// Key of the flag being decided.
	pub key: String,
	/// Entities the flag is evaluated for, if any were identified.
	pub entities: Option<E>,
	/// Default value declared on the flag.
	pub default_value: Option<V>,
}

impl<V, E> DecideParams<V, E> {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			entities: None,
			default_value: None,
		}
	}

	pub fn with_entities(mut self, entities: E) -> Self {
		self.entities = Some(entities);
		self
	}

	pub fn with_default_value(mut self, default_value: V) -> Self {
		self.default_value = Some(default_value);
		self
	}
}

/// Outcome of a decision.
///
/// `UseDefault` is distinct from any value of `V`: it hands control back to
/// the declaration, which applies its own default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<V> {
	Value(V),
	UseDefault,
}

impl<V> Decision<V> {
	pub fn is_default(&self) -> bool {
		matches!(self, Decision::UseDefault)
	}

	pub fn into_value(self) -> Option<V> {
		match self {
			Decision::Value(value) => Some(value),
			Decision::UseDefault => None,
		}
	}
}

impl<V> From<Option<V>> for Decision<V> {
	fn from(value: Option<V>) -> Self {
		match value {
			Some(value) => Decision::Value(value),
			None => Decision::UseDefault,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decide_params_builder_sets_fields() {
		let params: DecideParams<bool, &str> = DecideParams::new("beta-ui")
			.with_entities("user-42")
			.with_default_value(true);

		assert_eq!(params.key, "beta-ui");
		assert_eq!(params.entities, Some("user-42"));
		assert_eq!(params.default_value, Some(true));
	}

	#[test]
	fn use_default_has_no_value() {
		let decision: Decision<bool> = Decision::UseDefault;
		assert!(decision.is_default());
		assert_eq!(decision.into_value(), None);
	}

	#[test]
	fn decision_from_option() {
		assert_eq!(Decision::from(Some(3)), Decision::Value(3));
		assert_eq!(Decision::<i32>::from(None), Decision::UseDefault);
	}
}
