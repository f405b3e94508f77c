//! # tmpl-renderer
//!
//! The renderer collaborator: a narrow [`TemplateRenderer`] interface and a
//! tera-based implementation, [`TeraRenderer`].
//!
//! ## Usage
//!
//! ```rust
//! use tmpl_core::ResolvedContext;
//! use tmpl_renderer::{TemplateRenderer, TeraRenderer};
//!
//! let ctx: ResolvedContext = [("appName", "Gjinja")].into_iter().collect();
//! let out = TeraRenderer::new().render("Hello {{ appName }}!", &ctx).unwrap();
//! assert_eq!(out, "Hello Gjinja!");
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::to_tera_context;
pub use engine::{TemplateRenderer, TeraRenderer};
pub use error::RenderError;
