//! Item resolution — turns one [`ConfigDeclaration`] into its string value.
//!
//! # Trust boundary
//!
//! `command` declarations run arbitrary shell code with the caller's
//! environment and working directory. Anyone who can edit the config document
//! can execute commands as the user running `tmpl`.

use std::process::{Command, Stdio};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{CommandError, ResolveError};
use crate::types::{ConfigDeclaration, DeclarationKind};

// ---------------------------------------------------------------------------
// CommandExecutor
// ---------------------------------------------------------------------------

/// Runs the value of a `command` declaration.
///
/// Implementations return the command's combined stdout + stderr as text,
/// untrimmed. Tests substitute a deterministic stub.
pub trait CommandExecutor {
    fn run(&self, command: &str) -> Result<String, CommandError>;
}

/// Executes commands through a POSIX login shell (`sh -lc` by default).
///
/// The login flag makes the shell source `/etc/profile` (and the user's
/// profile), so `PATH` additions from `/etc/profile.d` apply to commands.
/// Stderr is folded into stdout by prefixing the script with `exec 2>&1`,
/// so both streams arrive interleaved in one buffer. The call blocks until
/// the process exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    login: bool,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::with_shell("sh")
    }

    /// Use a different shell binary, e.g. `bash`. It must accept `-l -c <script>`
    /// unless [`login`](Self::login) is turned off.
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            login: true,
        }
    }

    /// Toggle the `-l` flag. On by default.
    pub fn login(mut self, login: bool) -> Self {
        self.login = login;
        self
    }

    fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        if self.login {
            cmd.arg("-l");
        }
        cmd.arg("-c")
            .arg(format!("exec 2>&1\n{command}"))
            .stdin(Stdio::null());
        cmd
    }
}

impl CommandExecutor for ShellExecutor {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        let output = self
            .command(command)
            .output()
            .map_err(|source| CommandError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(CommandError::Failed {
                status: output.status.to_string(),
                output: text,
            });
        }
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolves declarations; `command` items go through the injected executor.
pub struct Resolver<'a> {
    executor: &'a dyn CommandExecutor,
}

impl<'a> Resolver<'a> {
    pub fn new(executor: &'a dyn CommandExecutor) -> Self {
        Self { executor }
    }

    /// Resolve a single declaration.
    ///
    /// Unknown `type` strings fail with [`ResolveError::UnknownType`]; they are
    /// never treated as literals.
    pub fn resolve(&self, decl: &ConfigDeclaration) -> Result<String, ResolveError> {
        if decl.key.is_empty() {
            return Err(ResolveError::EmptyKey);
        }
        let kind = decl.kind.parse::<DeclarationKind>()?;
        tracing::trace!("resolving '{}' as {}", decl.key, kind);
        match kind {
            DeclarationKind::Literal => Ok(decl.value.clone()),
            DeclarationKind::Base64 => {
                let bytes = STANDARD.decode(decl.value.as_bytes())?;
                Ok(String::from_utf8(bytes)?)
            }
            DeclarationKind::Command => {
                tracing::debug!("running command for '{}'", decl.key);
                Ok(self.executor.run(&decl.value)?)
            }
        }
    }
}
