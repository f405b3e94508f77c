//! Human-readable run summary printed after the pipeline finishes.

use colored::Colorize;
use tmpl_sync::{FileOutcome, RunReport, WriteResult};

pub fn print(report: &RunReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };

    // Failure details were already logged as they happened; only the
    // per-file status is listed here.
    for outcome in &report.render.outcomes {
        match outcome {
            FileOutcome::Rendered(write) => {
                let mark = match write {
                    WriteResult::Written { .. } => "✎",
                    WriteResult::Unchanged { .. } => "·",
                    WriteResult::WouldWrite { .. } => "~",
                };
                println!("  {mark}  {}", write.path().display());
                if let WriteResult::WouldWrite { diff, .. } = write {
                    print!("{diff}");
                    if !diff.ends_with('\n') {
                        println!();
                    }
                }
            }
            FileOutcome::Failed { path, .. } => println!("  {}  {}", "✗".red(), path.display()),
        }
    }

    let render = &report.render;
    let mark = if report.is_clean() {
        "✓".green().bold()
    } else {
        "!".yellow().bold()
    };
    println!(
        "{prefix}{mark} {} file(s): {} written, {} unchanged, {} failed; {} key(s) resolved, {} item(s) failed",
        render.outcomes.len(),
        render.written_count(),
        render.unchanged_count(),
        render.failure_count(),
        report.resolved_keys,
        report.item_failures.len(),
    );
}
