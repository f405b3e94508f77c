//! Error types for tmpl-core.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading the configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be read (missing file, permission denied, etc.).
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error — includes file path and line context from serde_json.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parse error for `.yaml` / `.yml` documents.
    #[error("failed to parse config at {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failure of a `command` declaration's subprocess.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The shell could not be started at all.
    #[error("failed to start `{shell}`: {source}")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited non-zero or was killed by a signal.
    #[error("command exited with {status}: {output}")]
    Failed { status: String, output: String },
}

/// Per-item resolution errors. These never abort a run.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// `base64` value is not valid standard base64.
    #[error("invalid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// `base64` value decoded to bytes that are not UTF-8 text.
    #[error("decoded base64 is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    /// `command` value failed to execute.
    #[error("command execution failed: {0}")]
    Command(#[from] CommandError),

    /// `type` is not one of `string`, `literal`, `base64`, `command`.
    #[error("unknown config item type '{kind}'; expected: string, base64, command")]
    UnknownType { kind: String },

    /// Declaration has an empty `key`.
    #[error("config item has an empty key")]
    EmptyKey,
}

/// Errors in the render target specification.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Both or neither of file/directory were specified.
    #[error("invalid target: {0}")]
    Invalid(&'static str),

    /// The addressed path does not exist or has the wrong file type.
    #[error("target not found: {path} ({expected})")]
    NotFound {
        path: PathBuf,
        expected: &'static str,
    },
}
