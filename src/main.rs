//! Entry point for ui-gen.
use std::process::ExitCode;

use anyhow::Error;
use clap::Parser;
use ui_gen::{
    cli::{execute_cli_command, CliInvocation, ParsedCommand, ServeProfile, UiGenArgs},
    lib::telemetry,
    server::{
        config::AppConfig,
        runtime::{self, RuntimeExit},
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    let args = UiGenArgs::parse();
    telemetry::init_tracing(args.verbose).map_err(RuntimeExit::from_error)?;
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::RunServer(profile) => run_server(profile).await.map(|_| ExitCode::SUCCESS),
        ParsedCommand::Cli(invocation) => handle_cli_command(invocation).await,
    }
}

async fn run_server(profile: ServeProfile) -> Result<(), RuntimeExit> {
    let config = AppConfig::load(profile.config_path.clone(), profile.config_source)
        .map_err(|err| RuntimeExit::from_error(Error::new(err)))?;
    runtime::run_server(profile, config).await
}

async fn handle_cli_command(invocation: CliInvocation) -> Result<ExitCode, RuntimeExit> {
    let config = AppConfig::load(invocation.config_path.clone(), invocation.config_source)
        .map_err(|err| RuntimeExit::from_error(Error::new(err)))?;
    let report = execute_cli_command(invocation, &config)
        .await
        .map_err(RuntimeExit::from_error)?;
    if !report.text.is_empty() {
        println!("{}", report.text);
    }
    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
