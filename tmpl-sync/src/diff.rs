//! Unified diff support for `--dry-run`.

use std::path::Path;

use similar::TextDiff;

/// Unified diff between a file's current content and its rendered content.
///
/// Headers are `a/<path>` and `b/<path>`; three lines of context.
pub fn unified_diff(path: &Path, current: &str, rendered: &str) -> String {
    let old_header = format!("a/{}", path.display());
    let new_header = format!("b/{}", path.display());
    TextDiff::from_lines(current, rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string()
}
