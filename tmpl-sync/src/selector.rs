//! File selection — turns a [`RenderTarget`] into the list of files to render.
//!
//! Directory walks are recursive and sorted by file name at every level, so
//! the order is stable for a given filesystem snapshot. Symlinks are never
//! followed into directories; a symlink that resolves to a regular file is
//! selected like the file itself.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use tmpl_core::{RenderTarget, TargetError};

use crate::error::{io_err, SyncError};

/// Files chosen for rendering, plus entries the walk could not visit.
#[derive(Debug, Default)]
pub struct Selection {
    pub files: Vec<PathBuf>,
    pub failures: Vec<SyncError>,
}

/// Select the files addressed by `target`.
///
/// Returns [`TargetError::NotFound`] if the target itself is missing or has
/// the wrong type. Problems with individual entries inside a directory are
/// logged and collected in [`Selection::failures`]; the walk continues.
pub fn select_files(target: &RenderTarget) -> Result<Selection, SyncError> {
    match target {
        RenderTarget::File(path) => select_single(path),
        RenderTarget::Directory(root) => select_tree(root),
    }
}

fn select_single(path: &Path) -> Result<Selection, SyncError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Selection {
            files: vec![path.to_path_buf()],
            failures: Vec::new(),
        }),
        _ => Err(TargetError::NotFound {
            path: path.to_path_buf(),
            expected: "regular file",
        }
        .into()),
    }
}

fn select_tree(root: &Path) -> Result<Selection, SyncError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        _ => {
            return Err(TargetError::NotFound {
                path: root.to_path_buf(),
                expected: "directory",
            }
            .into())
        }
    }

    let mut selection = Selection::default();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source.path().unwrap_or(root).to_path_buf();
                tracing::warn!("skipping {}: {}", path.display(), source);
                selection.failures.push(SyncError::Walk { path, source });
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_file() {
            selection.files.push(entry.into_path());
        } else if file_type.is_symlink() {
            match std::fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => selection.files.push(entry.into_path()),
                Ok(_) => tracing::debug!("not following symlink {}", entry.path().display()),
                Err(e) => {
                    tracing::warn!("skipping broken symlink {}: {}", entry.path().display(), e);
                    selection.failures.push(io_err(entry.path(), e));
                }
            }
        }
    }

    tracing::debug!(
        "selected {} file(s) under {}",
        selection.files.len(),
        root.display()
    );
    Ok(selection)
}
