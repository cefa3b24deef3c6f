use std::path::PathBuf;

use anyhow::Result;
use rmcp::{
    model::{ClientInfo, GetPromptRequestParam, PromptMessageContent, PromptMessageRole},
    serve_client,
    service::ServiceError,
    ServiceExt,
};
use ui_gen::{
    cli::{ServeProfile, TransportMode},
    prompts::CatalogKind,
    server::{
        config::{AppConfig, ConfigSource},
        runtime::build_prompt_server,
    },
};

fn profile(catalog: CatalogKind) -> ServeProfile {
    ServeProfile {
        config_path: PathBuf::from("ui-gen.toml"),
        config_source: ConfigSource::Default,
        transport: TransportMode::Stdio,
        catalog: Some(catalog),
        launch_args: vec!["serve".into()],
    }
}

#[tokio::test]
async fn client_lists_and_fetches_builtin_prompts() -> Result<()> {
    let server = build_prompt_server(&profile(CatalogKind::Builtin), &AppConfig::default())
        .map_err(|exit| anyhow::anyhow!(exit.message().to_string()))?;
    let expected = server
        .catalog()
        .get("nextjs_form_builder")
        .map(|entry| entry.text.clone());

    let (server_io, client_io) = tokio::io::duplex(4096);
    let server_task = tokio::spawn(async move {
        let running = server.serve(server_io).await?;
        running.waiting().await?;
        anyhow::Ok(())
    });

    let client = serve_client(ClientInfo::default(), client_io).await?;
    let info = client.peer_info().expect("server info after handshake");
    assert!(info.capabilities.prompts.is_some());
    assert!(info
        .instructions
        .as_deref()
        .is_some_and(|text| text.contains("builtin")));

    let list = client.list_prompts(None).await?;
    assert_eq!(list.prompts.len(), 16);
    assert!(list
        .prompts
        .iter()
        .any(|prompt| prompt.name == "nextjs_form_builder"));

    let prompt = client
        .get_prompt(GetPromptRequestParam {
            name: "nextjs_form_builder".into(),
            arguments: None,
        })
        .await?;
    assert_eq!(prompt.messages.len(), 1);
    assert!(matches!(prompt.messages[0].role, PromptMessageRole::User));
    match &prompt.messages[0].content {
        PromptMessageContent::Text { text } => assert_eq!(Some(text.clone()), expected),
        other => panic!("unexpected content: {other:?}"),
    }

    let error = client
        .get_prompt(GetPromptRequestParam {
            name: "does_not_exist".into(),
            arguments: None,
        })
        .await
        .expect_err("unknown prompt must fail");
    match error {
        ServiceError::McpError(data) => {
            let details = data.data.expect("error data");
            assert_eq!(details["code"], "prompt_not_found");
            assert_eq!(details["prompt"], "does_not_exist");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    client.cancel().await?;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn default_catalog_serves_single_prompt() -> Result<()> {
    let server = build_prompt_server(&profile(CatalogKind::Default), &AppConfig::default())
        .map_err(|exit| anyhow::anyhow!(exit.message().to_string()))?;

    let (server_io, client_io) = tokio::io::duplex(4096);
    let server_task = tokio::spawn(async move {
        let running = server.serve(server_io).await?;
        running.waiting().await?;
        anyhow::Ok(())
    });

    let client = serve_client(ClientInfo::default(), client_io).await?;
    let list = client.list_prompts(None).await?;
    let names: Vec<_> = list.prompts.iter().map(|prompt| prompt.name.as_str()).collect();
    assert_eq!(names, ["frontend_generation"]);

    client.cancel().await?;
    let _ = server_task.await;
    Ok(())
}
