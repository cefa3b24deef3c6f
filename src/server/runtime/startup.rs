use std::process::ExitCode;

use anyhow::{Context, Error};
use rmcp::ServiceExt;
use tokio::net::TcpListener;

use crate::{
    cli::{ServeProfile, TransportMode},
    lib::telemetry::{emit_runtime_mode, RuntimeModeTelemetry},
    prompts::library::builtin_composer,
    server::{
        config::AppConfig,
        runtime::{build_instructions, PromptServer},
    },
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Compose the selected catalog from the built-in library.
///
/// Any wiring or composition failure aborts start-up.
pub fn build_prompt_server(
    profile: &ServeProfile,
    config: &AppConfig,
) -> Result<PromptServer, RuntimeExit> {
    let kind = profile.catalog.unwrap_or(config.prompts.catalog);
    let composer = builtin_composer(&config.prompts.separator)
        .context("failed to register built-in prompt stores")
        .map_err(RuntimeExit::from_error)?;
    let catalog = kind
        .build(&composer)
        .with_context(|| format!("failed to compose the `{kind}` prompt catalog"))
        .map_err(RuntimeExit::from_error)?;
    let instructions = build_instructions(profile, config, kind, catalog.len());
    Ok(PromptServer::new(catalog, instructions))
}

/// Start the MCP server and select stdio/TCP based on the serve profile.
pub async fn run_server(profile: ServeProfile, config: AppConfig) -> Result<(), RuntimeExit> {
    let server = build_prompt_server(&profile, &config)?;
    let kind = profile.catalog.unwrap_or(config.prompts.catalog);
    let config_path = profile.config_path.to_string_lossy();

    emit_runtime_mode(&RuntimeModeTelemetry {
        transport: profile.transport.as_str(),
        host: Some(config.server.host.as_str()),
        port: Some(config.server.port),
        config_path: config_path.as_ref(),
        catalog: kind.as_str(),
        prompt_count: server.catalog().len(),
        launch_args: &profile.launch_args,
    });

    match profile.transport {
        TransportMode::Stdio => run_stdio(server).await,
        TransportMode::Tcp => run_tcp(server, &config).await,
    }
}

async fn run_stdio(server: PromptServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_tcp(server: PromptServer, config: &AppConfig) -> Result<(), RuntimeExit> {
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind TCP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "ui_gen::runtime",
        transport = "tcp",
        bind_addr = %addr,
        "Started listening in TCP mode"
    );

    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .with_context(|| format!("failed to accept TCP connection ({addr})"))
            .map_err(RuntimeExit::from_error)?;
        tracing::info!(
            target: "ui_gen::runtime",
            peer = %peer,
            "Accepted connection from MCP client"
        );
        // A client that fails the handshake only ends its own session.
        let running = match server.clone().serve(stream).await {
            Ok(running) => running,
            Err(err) => {
                tracing::warn!(
                    target: "ui_gen::runtime",
                    peer = %peer,
                    reason = %err,
                    "MCP handshake failed"
                );
                continue;
            }
        };
        running.waiting().await.map_err(RuntimeExit::from_error)?;
    }
}
