// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod common;

use std::sync::Arc;

use common::RecordingClient;
use flags_sdk::{flag, FlagDeclaration, FlagError, Identify, IdentifyParams, SharedIdentify};
use flagsync_flags_adapter::{
	create_flag_sync_adapter, create_identify, create_identify_sync, UserEntities,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("session {0} is unknown")]
struct UnknownSession(String);

async fn lookup_session(session: String) -> Result<UserEntities, UnknownSession> {
	tokio::task::yield_now().await;
	match session.as_str() {
		"s-1" => Ok(UserEntities::new()
			.with_key("user-1")
			.with_attribute("plan", json!("pro"))),
		_ => Err(UnknownSession(session)),
	}
}

#[tokio::test]
async fn async_bridge_resolves_entities() {
	let identify = create_identify(|params: IdentifyParams| {
		let session = params.cookie("session").unwrap_or_default().to_string();
		lookup_session(session)
	});

	let entities = identify
		.identify(&IdentifyParams::new().with_cookie("session", "s-1"))
		.await
		.unwrap();

	assert_eq!(entities.key.as_deref(), Some("user-1"));
	assert_eq!(
		entities.attributes.and_then(|attributes| attributes.get("plan").cloned()),
		Some(json!("pro"))
	);
}

#[tokio::test]
async fn async_bridge_surfaces_callback_errors() {
	let identify = create_identify(|params: IdentifyParams| {
		let session = params.cookie("session").unwrap_or_default().to_string();
		lookup_session(session)
	});

	let err = identify
		.identify(&IdentifyParams::new().with_cookie("session", "s-404"))
		.await
		.unwrap_err();

	assert_eq!(err.to_string(), "session s-404 is unknown");
	assert!(err.downcast_ref::<UnknownSession>().is_some());
}

#[tokio::test]
async fn sync_bridge_reads_headers() {
	let identify = create_identify_sync(|params: IdentifyParams| {
		let key = params.header("x-user-id").map(str::to_string);
		Ok::<_, UnknownSession>(UserEntities { key, attributes: None })
	});

	let known = identify
		.identify(&IdentifyParams::new().with_header("X-User-Id", "user-9"))
		.await
		.unwrap();
	assert_eq!(known.key.as_deref(), Some("user-9"));

	let anonymous = identify.identify(&IdentifyParams::new()).await.unwrap();
	assert_eq!(anonymous.key, None);
}

#[tokio::test]
async fn missing_identity_is_evaluated_as_anonymous() {
	let client = Arc::new(RecordingClient::ready());
	client.respond("beta-ui", json!(true));
	let adapters = create_flag_sync_adapter(Arc::clone(&client));

	let identify = create_identify_sync(|params: IdentifyParams| {
		let key = params.header("x-user-id").map(str::to_string);
		Ok::<_, UnknownSession>(UserEntities { key, attributes: None })
	});
	let beta = flag(FlagDeclaration::new("beta-ui", adapters.boolean()).identify(identify));

	assert!(beta.run(&IdentifyParams::new()).await.unwrap());
	assert_eq!(client.queries()[0].context.key, "anonymous");
}

#[tokio::test]
async fn one_hook_serves_many_flags() {
	let client = Arc::new(RecordingClient::ready());
	let adapters = create_flag_sync_adapter(Arc::clone(&client));

	let identify: SharedIdentify<UserEntities> = Arc::new(create_identify(|params: IdentifyParams| {
		let session = params.cookie("session").unwrap_or_default().to_string();
		lookup_session(session)
	}));
	let beta = flag(
		FlagDeclaration::new("beta-ui", adapters.boolean())
			.default_value(false)
			.shared_identify(Arc::clone(&identify)),
	);
	let theme = flag(
		FlagDeclaration::new("ui.theme", adapters.string())
			.default_value("light".to_string())
			.shared_identify(identify),
	);

	let params = IdentifyParams::new().with_cookie("session", "s-1");
	assert!(!beta.run(&params).await.unwrap());
	assert_eq!(theme.run(&params).await.unwrap(), "light");

	let contexts: Vec<_> = client.queries().into_iter().map(|query| query.context.key).collect();
	assert_eq!(contexts, vec!["user-1", "user-1"]);

	let err = theme
		.run(&IdentifyParams::new().with_cookie("session", "s-404"))
		.await
		.unwrap_err();
	assert!(matches!(err, FlagError::Identify { .. }));
	assert_eq!(client.queries().len(), 2);
}
