use std::fs;

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{run_ui_gen, stderr_of, stdout_of, BINARY_PATH};

#[test]
fn compose_prints_builtin_fragments() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("ui-gen.toml");
    fs::write(&config, "[prompts]\nseparator = \"\\n---\\n\"\n")?;

    let output = run_ui_gen(
        &config,
        &["prompts", "compose", "TaskContext.UI_GENERATION", "modality:image"],
    )?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("You are a **senior frontend engineer**"));
    assert!(stdout.contains("\n---\n"), "separator from config: {stdout}");
    Ok(())
}

#[test]
fn tags_are_listed_as_json() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("ui-gen.toml");
    fs::write(&config, "")?;

    let output = run_ui_gen(&config, &["prompts", "tags"])?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    let categories: Vec<_> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry["category"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        categories,
        ["TaskContext", "Modality", "TechConstraint", "OutputControl", "Refinement"]
    );
    Ok(())
}

#[test]
fn auto_generation_prints_placeholder() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("ui-gen.toml");
    fs::write(&config, "")?;

    let output = run_ui_gen(&config, &["generate", "--mode", "auto"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        "Auto mode is under development. Stay tuned!"
    );
    Ok(())
}

#[test]
fn explicit_missing_config_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.toml");

    let output = run_ui_gen(&missing, &["prompts", "tags"])?;
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("does not exist"), "{}", stderr_of(&output));
    Ok(())
}

#[test]
fn invalid_config_field_is_named() -> Result<()> {
    let dir = tempdir()?;
    let config = dir.path().join("ui-gen.toml");
    fs::write(&config, "[claude]\ntimeout_secs = 0\n")?;

    let output = run_ui_gen(&config, &["prompts", "list"])?;
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("timeout_secs"), "{}", stderr_of(&output));
    Ok(())
}

#[test]
fn help_lists_top_level_commands() -> Result<()> {
    let output = std::process::Command::new(BINARY_PATH).arg("--help").output()?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    for needle in ["mcp", "generate", "prompts", "serve", "--verbose", "--config"] {
        assert!(stdout.contains(needle), "--help should mention {needle}:\n{stdout}");
    }
    Ok(())
}
