//! Error types for tmpl-renderer.

use std::error::Error as _;

use thiserror::Error;

/// All errors that can arise from rendering a template source.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera parse or render error. The message includes the full cause chain
    /// (tera's top-level message alone only names the template).
    #[error("template engine error: {}", chain(.0))]
    Tera(#[from] tera::Error),

    /// Error reported by a non-tera renderer.
    #[error("template error: {0}")]
    Template(String),

    /// JSON serialization error (building the tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn chain(err: &tera::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
