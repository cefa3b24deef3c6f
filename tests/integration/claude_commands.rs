#![cfg(unix)]

use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{
    fake_claude, recorded_args, run_ui_gen, stderr_of, stdout_of, write_config,
};

#[test]
fn list_servers_runs_claude_mcp_list() -> Result<()> {
    let dir = tempdir()?;
    let (claude, log) = fake_claude(dir.path())?;
    let config = write_config(dir.path(), &claude)?;

    let output = run_ui_gen(&config, &["mcp", "list-servers"])?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output).trim(), "fake claude: mcp list");
    assert_eq!(recorded_args(&log), ["mcp", "list"]);
    Ok(())
}

#[test]
fn add_server_passes_python_and_script() -> Result<()> {
    let dir = tempdir()?;
    let (claude, log) = fake_claude(dir.path())?;
    let config = write_config(dir.path(), &claude)?;
    let script = dir.path().join("server.py");
    fs::write(&script, "print('hi')\n")?;
    let script_arg = script.display().to_string();

    let output = run_ui_gen(
        &config,
        &["mcp", "add-server", "--server-name", "ui", "--server-path", &script_arg],
    )?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        recorded_args(&log),
        ["mcp", "add", "ui", "--", "python3", script_arg.as_str()]
    );
    Ok(())
}

#[test]
fn add_server_with_missing_script_never_calls_claude() -> Result<()> {
    let dir = tempdir()?;
    let (claude, log) = fake_claude(dir.path())?;
    let config = write_config(dir.path(), &claude)?;

    let output = run_ui_gen(
        &config,
        &["mcp", "add-server", "--server-name", "ui", "--server-path", "/no/such/server.py"],
    )?;
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("does not exist"), "{}", stderr_of(&output));
    assert!(!log.exists(), "claude must not run");
    Ok(())
}

#[test]
fn failing_claude_reports_stderr_and_exit_code() -> Result<()> {
    let dir = tempdir()?;
    let (claude, _log) = fake_claude(dir.path())?;
    let config = write_config(dir.path(), &claude)?;

    let output = run_ui_gen(&config, &["mcp", "remove-server", "--server-name", "fail"])?;
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output).trim(), "claude failed");

    let output = run_ui_gen(&config, &["-v", "mcp", "remove-server", "--server-name", "fail"])?;
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Successful: false"), "{stdout}");
    assert!(stdout.contains("mcp remove fail"), "{stdout}");
    assert!(stdout.contains("Error: claude failed"), "{stdout}");
    Ok(())
}

#[test]
fn manual_generation_selects_the_mcp_prompt() -> Result<()> {
    let dir = tempdir()?;
    let (claude, log) = fake_claude(dir.path())?;
    let config = write_config(dir.path(), &claude)?;

    let output = run_ui_gen(
        &config,
        &[
            "generate",
            "--server-name",
            "ui",
            "--server-prompt",
            "frontend_generation",
            "--user-prompt",
            "signup form",
            "--allowed-tools",
            "Read",
        ],
    )?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        recorded_args(&log),
        [
            "/ui:frontend_generation (MCP) signup form",
            "--allowedTools",
            "Read"
        ]
    );
    Ok(())
}
