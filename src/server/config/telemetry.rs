use std::path::Path;

use tracing::{debug, info};

use super::{AppConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_missing_default(path: &Path) {
    debug!(
        target: "ui_gen::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &AppConfig) {
    let path = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    info!(
        target: "ui_gen::config",
        path = %path,
        host = %config.server.host,
        port = config.server.port,
        claude_binary = %config.claude.binary,
        timeout_secs = config.claude.timeout_secs,
        catalog = %config.prompts.catalog,
        separator = ?config.prompts.separator,
        "Configuration loaded"
    );
}
