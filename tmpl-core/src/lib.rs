//! tmpl core library — config decoding, item resolution, context building.
//!
//! Public API surface:
//! - [`config`] — read a declaration document (JSON or YAML)
//! - [`resolver`] — [`Resolver`] and the [`CommandExecutor`] capability
//! - [`context`] — [`build_context`] → [`ResolvedContext`]
//! - [`types`] — declarations and [`RenderTarget`]
//! - [`error`] — error enums

pub mod config;
pub mod context;
pub mod error;
pub mod resolver;
pub mod types;

pub use context::{build_context, ContextBuild, ItemFailure, ResolvedContext};
pub use error::{CommandError, ConfigError, ResolveError, TargetError};
pub use resolver::{CommandExecutor, Resolver, ShellExecutor};
pub use types::{ConfigDeclaration, DeclarationKind, RenderTarget};
