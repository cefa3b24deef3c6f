//! Load and validate `ui-gen.toml`.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod claude;
pub mod prompts;
pub mod server;
pub mod telemetry;

pub use claude::{
    parse_claude_section, ClaudeSection, RawClaudeSection, DEFAULT_ALLOWED_TOOLS,
    DEFAULT_CLAUDE_BINARY, DEFAULT_PYTHON, DEFAULT_TIMEOUT_SECS,
};
pub use prompts::{parse_prompts_section, PromptsSection, RawPromptsSection};
pub use server::{parse_server_section, RawServerSection, ServerSection, DEFAULT_HOST, DEFAULT_PORT};

pub const CONFIG_ENV_KEY: &str = "UI_GEN_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "ui-gen.toml";

/// Where the configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

impl ConfigSource {
    /// Only the implicit default file may be absent.
    pub const fn is_required(&self) -> bool {
        !matches!(self, ConfigSource::Default)
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub claude: ClaudeSection,
    pub prompts: PromptsSection,
    /// `None` when no file was read.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct RawAppConfig {
    server: Option<RawServerSection>,
    claude: Option<RawClaudeSection>,
    prompts: Option<RawPromptsSection>,
}

impl AppConfig {
    /// Load `path`, falling back to defaults when an optional file is absent.
    pub fn load(path: PathBuf, source: ConfigSource) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load_from_path(path);
        }
        if source.is_required() {
            error!(
                target: "ui_gen::config",
                path = %path.display(),
                "Configuration file does not exist"
            );
            return Err(ConfigError::NotFound { path });
        }
        telemetry::log_missing_default(&path);
        let config = Self::default();
        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Load configuration from a specific path. The file must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "ui_gen::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let source = config::File::from(path.clone()).format(config::FileFormat::Toml);
        let document = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(|err| {
                let error = ConfigError::from_read_error(path.clone(), err);
                log_failure(&path, &error, "Failed to read configuration file");
                error
            })?;

        let raw: RawAppConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            log_failure(&path, &error, "Failed to parse configuration file");
            error
        })?;

        let config = Self::from_raw(raw, &path).map_err(|err| {
            log_failure(&path, &err, "Failed to validate configuration file");
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawAppConfig, path: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            server: parse_server_section(raw.server, path)?,
            claude: parse_claude_section(raw.claude, path)?,
            prompts: parse_prompts_section(raw.prompts, path)?,
            source_path: Some(path.to_path_buf()),
        })
    }
}

fn log_failure(path: &Path, error: &ConfigError, message: &'static str) {
    error!(
        target: "ui_gen::config",
        path = %path.display(),
        reason = %error,
        "{message}"
    );
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;

    use super::*;
    use crate::prompts::CatalogKind;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ui-gen.toml");
        fs::write(&path, contents).expect("write config");
        (dir, path)
    }

    fn invalid_field(contents: &str) -> &'static str {
        let (_dir, path) = write_config(contents);
        match AppConfig::load_from_path(path) {
            Err(ConfigError::InvalidField { field, .. }) => field,
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn load_full_config() {
        let (_dir, path) = write_config(
            r#"
[server]
host = "0.0.0.0"
port = 9100

[claude]
binary = "/opt/bin/claude"
timeout_secs = 15
python = "python3"
allowed_tools = "Read,List"

[prompts]
separator = "\n\n"
catalog = "default"
"#,
        );

        let config = AppConfig::load_from_path(path.clone()).expect("config should load");
        assert_eq!(config.server.bind_addr(), "0.0.0.0:9100");
        assert_eq!(config.claude.binary, "/opt/bin/claude");
        assert_eq!(config.claude.timeout_secs, 15);
        assert_eq!(config.claude.python, "python3");
        assert_eq!(config.claude.allowed_tools, "Read,List");
        assert_eq!(config.prompts.separator, "\n\n");
        assert_eq!(config.prompts.catalog, CatalogKind::Default);
        assert_eq!(config.source_path, Some(path));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let (_dir, path) = write_config("");
        let config = AppConfig::load_from_path(path).expect("empty config loads");
        assert_eq!(config.server, ServerSection::default());
        assert_eq!(config.claude, ClaudeSection::default());
        assert_eq!(config.prompts.separator, " ");
        assert_eq!(config.prompts.catalog, CatalogKind::Builtin);
    }

    #[test]
    fn invalid_values_name_the_field() {
        assert_eq!(invalid_field("[server]\nport = 80\n"), "server.port");
        assert_eq!(invalid_field("[server]\nhost = \" \"\n"), "server.host");
        assert_eq!(
            invalid_field("[claude]\ntimeout_secs = 0\n"),
            "claude.timeout_secs"
        );
        assert_eq!(invalid_field("[claude]\nbinary = \"\"\n"), "claude.binary");
        assert_eq!(
            invalid_field("[prompts]\ncatalog = \"custom\"\n"),
            "prompts.catalog"
        );
    }

    #[test]
    fn malformed_toml_is_a_read_error() {
        let (_dir, path) = write_config("[server\nport = ");
        let error = AppConfig::load_from_path(path).expect_err("malformed toml");
        assert!(matches!(error, ConfigError::FileRead { .. }), "{error:?}");
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let (_dir, path) = write_config("[server]\nport = \"high\"\n");
        let error = AppConfig::load_from_path(path).expect_err("wrong type");
        assert!(matches!(error, ConfigError::Parse { .. }), "{error:?}");
    }

    #[test]
    fn missing_default_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        let config = AppConfig::load(path, ConfigSource::Default).expect("defaults");
        assert!(config.source_path.is_none());
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        for source in [ConfigSource::Cli, ConfigSource::Env] {
            let error = AppConfig::load(path.clone(), source).expect_err("must fail");
            assert!(matches!(error, ConfigError::NotFound { .. }));
        }
    }
}
