#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_ui-gen");

/// Run the binary with an explicit config file and a clean environment.
pub fn run_ui_gen(config: &Path, args: &[&str]) -> Result<Output> {
    Command::new(BINARY_PATH)
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("UI_GEN_CONFIG_PATH")
        .env_remove("RUST_LOG")
        .output()
        .context("failed to run ui-gen")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Write `ui-gen.toml` into `dir` with the given `[claude]` binary.
pub fn write_config(dir: &Path, claude_binary: &Path) -> Result<PathBuf> {
    let path = dir.join("ui-gen.toml");
    let body = format!(
        "[claude]\nbinary = \"{}\"\ntimeout_secs = 10\npython = \"python3\"\n\n[prompts]\ncatalog = \"default\"\n",
        claude_binary.display()
    );
    fs::write(&path, body).context("failed to write config fixture")?;
    Ok(path)
}

/// Install a fake `claude` that records its argv (one argument per line) in
/// `calls.log` and fails when any argument is `fail`.
#[cfg(unix)]
pub fn fake_claude(dir: &Path) -> Result<(PathBuf, PathBuf)> {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("calls.log");
    let script = dir.join("claude");
    let body = format!(
        "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{log}'; done\n\
         case \" $* \" in *' fail '*) echo 'claude failed' >&2; exit 2;; esac\n\
         echo \"fake claude: $*\"\n",
        log = log.display()
    );
    fs::write(&script, body).context("failed to write fake claude")?;
    let mut permissions = fs::metadata(&script)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&script, permissions)?;
    Ok((script, log))
}

#[cfg(unix)]
pub fn recorded_args(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
