use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::prompts::component::{Category, PromptComponent, Target};

/// Failures raised by prompt stores and the composer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// A tag from another category was handed to a store.
    #[error("{component} does not belong to the {expected} store")]
    CategoryMismatch {
        expected: Category,
        component: PromptComponent,
    },
    /// No fragment is registered for the tag on this target.
    #[error("no {target} fragment registered for {component}")]
    FragmentNotFound {
        target: Target,
        component: PromptComponent,
    },
    /// Composition referenced a category with no registered store.
    #[error("no prompt store registered for category {category}")]
    StoreNotRegistered { category: Category },
    /// A store was registered under a category it does not serve.
    #[error("store declares category {declared} but was registered as {category}")]
    StoreCategoryMismatch {
        category: Category,
        declared: Category,
    },
    /// Fragment text was empty after trimming.
    #[error("refusing to register an empty {target} fragment for {component}")]
    EmptyFragment {
        target: Target,
        component: PromptComponent,
    },
}

impl PromptError {
    /// Lookup misses a caller can report and carry on from.
    ///
    /// The remaining variants are wiring mistakes.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PromptError::FragmentNotFound { .. } | PromptError::StoreNotRegistered { .. }
        )
    }
}

/// Failures when resolving a tag name typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagParseError {
    #[error("tag name is empty")]
    Empty,
    #[error("unknown prompt tag `{input}`")]
    Unknown { input: String },
    #[error("tag `{input}` is ambiguous; qualify it as one of {candidates:?}")]
    Ambiguous {
        input: String,
        candidates: Vec<String>,
    },
}

/// Failures while assembling a prompt catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to compose prompt `{name}`: {source}")]
    Compose {
        name: String,
        #[source]
        source: PromptError,
    },
    #[error("prompt `{name}` is defined more than once")]
    DuplicateName { name: String },
    #[error("prompt name must not be empty")]
    EmptyName,
}

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("Configuration file {path} does not exist")]
    NotFound { path: PathBuf },
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures around `claude` subprocess invocations.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("MCP server script {path} does not exist")]
    ServerPathMissing { path: PathBuf },
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while waiting for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` timed out after {duration_secs} seconds")]
    Timeout { command: String, duration_secs: u64 },
}

/// Structured error metadata returned over MCP.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDescriptor {
    pub code: &'static str,
    pub message: &'static str,
    pub remediation: &'static str,
}

impl ErrorDescriptor {
    pub const fn new(code: &'static str, message: &'static str, remediation: &'static str) -> Self {
        Self {
            code,
            message,
            remediation,
        }
    }

    pub fn builder(&self) -> ErrorDescriptorBuilder<'_> {
        ErrorDescriptorBuilder::new(self)
    }
}

/// Builder for error data that fails if required fields are missing.
pub struct ErrorDescriptorBuilder<'a> {
    descriptor: &'a ErrorDescriptor,
    retryable: Option<bool>,
    details: Option<Value>,
    extra_fields: Map<String, Value>,
}

impl<'a> ErrorDescriptorBuilder<'a> {
    pub fn new(descriptor: &'a ErrorDescriptor) -> Self {
        Self {
            descriptor,
            retryable: None,
            details: None,
            extra_fields: Map::new(),
        }
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    pub fn details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_context_field(mut self, key: &str, value: Value) -> Self {
        self.extra_fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Result<ErrorData, ErrorBuilderError> {
        if self.descriptor.remediation.trim().is_empty() {
            return Err(ErrorBuilderError::MissingRemediation {
                code: self.descriptor.code,
            });
        }
        let retryable = self.retryable.ok_or(ErrorBuilderError::MissingRetryable {
            code: self.descriptor.code,
        })?;

        let mut data = Map::new();
        data.insert("code".into(), Value::String(self.descriptor.code.into()));
        data.insert(
            "remediation".into(),
            Value::String(self.descriptor.remediation.into()),
        );
        data.insert("retryable".into(), Value::Bool(retryable));
        if let Some(details) = self.details {
            data.insert("details".into(), details);
        }
        for (key, value) in self.extra_fields {
            data.insert(key, value);
        }

        Ok(ErrorData::invalid_params(
            self.descriptor.message,
            Some(Value::Object(data)),
        ))
    }
}

/// Errors when required builder fields are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorBuilderError {
    #[error("retryable is missing (code={code})")]
    MissingRetryable { code: &'static str },
    #[error("remediation is empty (code={code})")]
    MissingRemediation { code: &'static str },
}

/// Requested prompt is not part of the served catalog.
pub const PROMPT_NOT_FOUND_ERROR: ErrorDescriptor = ErrorDescriptor::new(
    "prompt_not_found",
    "Requested prompt is not served by this server",
    "Call prompts/list and retry with one of the listed names.",
);
