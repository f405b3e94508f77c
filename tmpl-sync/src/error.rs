//! Error types for tmpl-sync.

use std::path::PathBuf;

use thiserror::Error;

use tmpl_core::{ConfigError, TargetError};
use tmpl_renderer::RenderError;

/// All errors that can arise from selecting and rendering files.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The config document could not be loaded. Fatal.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The render target is invalid or missing. Fatal.
    #[error(transparent)]
    Target(#[from] TargetError),

    /// An error from the rendering collaborator.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be visited during the walk.
    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
