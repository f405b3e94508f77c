//! # tmpl-sync
//!
//! File selection and in-place rendering.
//!
//! Call [`pipeline::run`] to load a config, resolve its context, and render
//! every selected file, or use [`select_files`] and [`render_files`] directly.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod selector;
pub mod writer;

pub use error::SyncError;
pub use pipeline::{run, RunConfig, RunReport};
pub use selector::{select_files, Selection};
pub use writer::{render_file, render_files, FileOutcome, RenderReport, WriteResult};
