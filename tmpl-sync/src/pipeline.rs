//! Run pipeline — the single entrypoint used by the CLI.
//!
//! Order: load config (fatal) → select files (fatal on a bad target) →
//! build context → render files. Targets are checked before any `command`
//! item runs, so a typo in `-f`/`-p` never executes config commands.

use std::path::PathBuf;

use tmpl_core::{
    build_context, config, CommandExecutor, ContextBuild, ItemFailure, RenderTarget, Resolver,
    TargetError,
};
use tmpl_renderer::TemplateRenderer;

use crate::selector::select_files;
use crate::writer::{render_files, RenderReport};
use crate::SyncError;

/// Immutable, validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub config_path: PathBuf,
    pub target: RenderTarget,
    /// Any item or file failure makes the run unsuccessful.
    pub strict: bool,
    /// Report diffs instead of writing.
    pub dry_run: bool,
}

impl RunConfig {
    /// Validate the raw inputs. Fails with [`TargetError::Invalid`] when both
    /// or neither of `file` / `directory` are given. Performs no I/O.
    pub fn new(
        config_path: impl Into<PathBuf>,
        file: Option<PathBuf>,
        directory: Option<PathBuf>,
    ) -> Result<Self, TargetError> {
        Ok(Self {
            config_path: config_path.into(),
            target: RenderTarget::from_flags(file, directory)?,
            strict: false,
            dry_run: false,
        })
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Everything that happened during a run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of keys available to templates.
    pub resolved_keys: usize,
    pub item_failures: Vec<ItemFailure>,
    /// Directory entries the walk could not visit.
    pub walk_failures: Vec<SyncError>,
    pub render: RenderReport,
}

impl RunReport {
    pub fn failure_count(&self) -> usize {
        self.item_failures.len() + self.walk_failures.len() + self.render.failure_count()
    }

    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }

    /// Whether the run counts as successful under `config`'s strictness.
    pub fn succeeded(&self, config: &RunConfig) -> bool {
        !config.strict || self.is_clean()
    }
}

/// Run the full pipeline for `config`.
///
/// Returns `Err` only for fatal problems (unreadable or malformed config,
/// missing target). Per-item and per-file failures are inside the report.
pub fn run(
    config: &RunConfig,
    executor: &dyn CommandExecutor,
    renderer: &dyn TemplateRenderer,
) -> Result<RunReport, SyncError> {
    let declarations = config::load_declarations(&config.config_path)?;
    let selection = select_files(&config.target)?;

    let ContextBuild { context, failures } =
        build_context(&declarations, &Resolver::new(executor));
    tracing::debug!(
        "resolved {} of {} config item(s)",
        context.len(),
        declarations.len()
    );

    let render = render_files(&selection.files, &context, renderer, config.dry_run);

    Ok(RunReport {
        resolved_keys: context.len(),
        item_failures: failures,
        walk_failures: selection.failures,
        render,
    })
}
