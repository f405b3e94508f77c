//! In-place rendering and the per-file orchestration loop.
//!
//! ## `render_file` — per-file protocol
//!
//! 1. Read the file as UTF-8 text.
//! 2. Render it through the [`TemplateRenderer`] collaborator.
//! 3. Compare with the current content → skip if identical.
//! 4. `--dry-run`: report a unified diff and stop.
//! 5. Truncate the existing file and write the rendered text into it.
//!
//! Step 5 reuses the same inode, so owner, group, mode, hardlinks and
//! symlinks all survive the rewrite. It is not atomic: a crash mid-write can
//! leave a partially written file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tmpl_core::ResolvedContext;
use tmpl_renderer::TemplateRenderer;

use crate::diff::unified_diff;
use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of an individual file that rendered successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was rewritten with the rendered content.
    Written { path: PathBuf },
    /// Rendered content equals the current content; the file was not touched.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been rewritten.
    WouldWrite { path: PathBuf, diff: String },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path } | Self::Unchanged { path } | Self::WouldWrite { path, .. } => {
                path
            }
        }
    }
}

/// Outcome of one file job, successful or not.
#[derive(Debug)]
pub enum FileOutcome {
    Rendered(WriteResult),
    Failed { path: PathBuf, error: SyncError },
}

/// Outcomes of [`render_files`], in processing order.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RenderReport {
    pub fn writes(&self) -> impl Iterator<Item = &WriteResult> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Rendered(w) => Some(w),
            FileOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &SyncError)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed { path, error } => Some((path.as_path(), error)),
            FileOutcome::Rendered(_) => None,
        })
    }

    pub fn written_count(&self) -> usize {
        self.writes()
            .filter(|w| matches!(w, WriteResult::Written { .. } | WriteResult::WouldWrite { .. }))
            .count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.writes()
            .filter(|w| matches!(w, WriteResult::Unchanged { .. }))
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

// ---------------------------------------------------------------------------
// render_files
// ---------------------------------------------------------------------------

/// Render every file in `files`, in order, rewriting each in place.
///
/// Each file is independent: a read, render, or write failure is logged and
/// recorded as [`FileOutcome::Failed`], then processing moves on. Files that
/// were already rewritten are never rolled back.
pub fn render_files(
    files: &[PathBuf],
    context: &ResolvedContext,
    renderer: &dyn TemplateRenderer,
    dry_run: bool,
) -> RenderReport {
    let mut report = RenderReport::default();
    for path in files {
        tracing::info!("updating: {}", path.display());
        let outcome = match render_file(path, context, renderer, dry_run) {
            Ok(result) => FileOutcome::Rendered(result),
            Err(error) => {
                tracing::error!("error updating {}: {}", path.display(), error);
                FileOutcome::Failed {
                    path: path.clone(),
                    error,
                }
            }
        };
        report.outcomes.push(outcome);
    }
    report
}

/// Read, render, and rewrite a single file.
pub fn render_file(
    path: &Path,
    context: &ResolvedContext,
    renderer: &dyn TemplateRenderer,
    dry_run: bool,
) -> Result<WriteResult, SyncError> {
    let current = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let rendered = renderer.render(&current, context)?;

    if rendered == current {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
            diff: unified_diff(path, &current, &rendered),
        });
    }

    write_in_place(path, &rendered)?;
    tracing::debug!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// write_in_place
// ---------------------------------------------------------------------------

/// Overwrite an existing file with `content`.
///
/// The file is opened without `create`, so a path that vanished after
/// selection is an error rather than a new file. Opening follows symlinks;
/// the link stays and its target receives the new content.
pub(crate) fn write_in_place(path: &Path, content: &str) -> Result<(), SyncError> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| io_err(path, e))?;
    file.write_all(content.as_bytes()).map_err(|e| io_err(path, e))?;
    file.flush().map_err(|e| io_err(path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
