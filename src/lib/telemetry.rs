//! Telemetry initialization and `claude` command span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, warn, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` on stderr.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` when
/// `verbose` is requested.
pub fn init_tracing(verbose: bool) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let fallback = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper recording the start and finish of one subprocess run.
pub struct CommandSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl CommandSpan {
    pub fn start(command_kind: &'static str, command: &str) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "ui_gen::claude",
            "claude_command",
            %run_id,
            command_kind,
            command
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, success: bool, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        if success {
            info!(
                target: "ui_gen::claude",
                run_id = %self.run_id,
                exit_code = exit_code,
                elapsed_ms = elapsed_ms,
                "Completed claude command"
            );
        } else {
            warn!(
                target: "ui_gen::claude",
                run_id = %self.run_id,
                exit_code = exit_code,
                elapsed_ms = elapsed_ms,
                "claude command failed"
            );
        }
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub transport: &'a str,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub config_path: &'a str,
    pub catalog: &'a str,
    pub prompt_count: usize,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "ui_gen::runtime",
        transport = telemetry.transport,
        host = telemetry.host.unwrap_or(""),
        port = telemetry.port.unwrap_or_default(),
        config_path = telemetry.config_path,
        catalog = telemetry.catalog,
        prompt_count = telemetry.prompt_count,
        launch_args = ?telemetry.launch_args,
        "Started MCP prompt server"
    );
}
