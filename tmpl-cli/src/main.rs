//! tmpl — render Jinja2-style templates in place from a declarative config.
//!
//! # Usage
//!
//! ```text
//! tmpl -f <file> [-c tmpl.json] [--strict] [--dry-run] [-v]
//! tmpl -p <dir>  [-c tmpl.json] [--strict] [--dry-run] [-v]
//! ```

mod report;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tmpl_core::{config::DEFAULT_CONFIG_FILE, ShellExecutor};
use tmpl_renderer::TeraRenderer;
use tmpl_sync::{pipeline, RunConfig};

const AFTER_HELP: &str = r#"Config file format (JSON array; .yaml/.yml files use the same shape):

  [
    { "type": "string",  "key": "appName", "value": "Gjinja" },
    { "type": "base64",  "key": "secret",  "value": "bXlzZWNyZXQ=" },
    { "type": "command", "key": "cwd",     "value": "pwd" }
  ]

  string   value is used as-is (also the default when "type" is omitted)
  base64   value is decoded from standard base64
  command  value is run with `sh -lc`; its combined stdout/stderr is used, untrimmed

WARNING: "command" items execute arbitrary shell code with your environment
and working directory. Only use config files you trust.

Example:
  file.txt:  Hello {{ appName }}! Your secret is {{ secret }} at {{ cwd | trim }}.
  $ tmpl -f file.txt -c tmpl.json
  file.txt:  Hello Gjinja! Your secret is mysecret at /home/user.

Undefined variables are an error for the file that uses them; use
{{ name | default(value="") }} to allow a missing value.

Exit status is non-zero for a bad config or target. Failed config items and
files are logged and skipped; pass --strict to fail the run on them."#;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tmpl",
    version,
    about = "Replace content in files based on Jinja2-style templates",
    long_about = None,
    after_help = AFTER_HELP,
)]
struct Cli {
    /// Directory whose files are all updated (recursively).
    #[arg(short = 'p', long = "path", value_name = "DIR", conflicts_with = "file")]
    path: Option<PathBuf>,

    /// Single file to update.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// JSON or YAML configuration file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "TMPL_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    config: PathBuf,

    /// Exit non-zero if any config item or file fails.
    #[arg(long)]
    strict: bool,

    /// Show unified diffs of what would change without writing any files.
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let config = RunConfig::new(self.config, self.file, self.path)
            .context("see `tmpl --help` for usage")?
            .strict(self.strict)
            .dry_run(self.dry_run);
        tracing::debug!("run config: {config:?}");

        let report = pipeline::run(&config, &ShellExecutor::new(), &TeraRenderer::new())
            .with_context(|| format!("run failed for {}", config.target))?;
        report::print(&report, config.dry_run);

        if !report.succeeded(&config) {
            bail!("{} failure(s) with --strict", report.failure_count());
        }
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    Cli::parse().run()
}
