//! Domain types for tmpl.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, TargetError};

// ---------------------------------------------------------------------------
// ConfigDeclaration
// ---------------------------------------------------------------------------

fn default_kind() -> String {
    "string".to_string()
}

/// One typed key/value entry of the configuration document.
///
/// `kind` is kept exactly as written; [`DeclarationKind`] interprets it at
/// resolution time so an unknown type becomes a per-item error instead of a
/// document parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDeclaration {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    pub key: String,
    pub value: String,
}

impl ConfigDeclaration {
    pub fn new(kind: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `string` declaration.
    pub fn literal(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new("string", key, value)
    }
}

// ---------------------------------------------------------------------------
// DeclarationKind
// ---------------------------------------------------------------------------

/// How a declaration's `value` turns into its resolved string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// Passed through unchanged.
    Literal,
    /// Standard base64, decoded to UTF-8 text.
    Base64,
    /// Run as a shell command; combined output becomes the value.
    Command,
}

impl FromStr for DeclarationKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "literal" => Ok(Self::Literal),
            "base64" => Ok(Self::Base64),
            "command" => Ok(Self::Command),
            other => Err(ResolveError::UnknownType {
                kind: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Literal => "string",
            Self::Base64 => "base64",
            Self::Command => "command",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// RenderTarget
// ---------------------------------------------------------------------------

/// What a run renders: one file, or every regular file under a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    File(PathBuf),
    Directory(PathBuf),
}

impl RenderTarget {
    /// Build a target from the two mutually exclusive CLI inputs.
    ///
    /// Pure — performs no filesystem access.
    pub fn from_flags(
        file: Option<PathBuf>,
        directory: Option<PathBuf>,
    ) -> Result<Self, TargetError> {
        match (file, directory) {
            (Some(_), Some(_)) => Err(TargetError::Invalid(
                "a file and a directory are mutually exclusive",
            )),
            (Some(file), None) => Ok(Self::File(file)),
            (None, Some(dir)) => Ok(Self::Directory(dir)),
            (None, None) => Err(TargetError::Invalid("no target specified")),
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "file {}", p.display()),
            Self::Directory(p) => write!(f, "directory {}", p.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_defaults_to_string() {
        let decl: ConfigDeclaration =
            serde_json::from_str(r#"{"key":"a","value":"1"}"#).unwrap();
        assert_eq!(decl.kind, "string");
    }

    #[test]
    fn kind_parses_known_types() {
        assert_eq!("string".parse::<DeclarationKind>().unwrap(), DeclarationKind::Literal);
        assert_eq!("literal".parse::<DeclarationKind>().unwrap(), DeclarationKind::Literal);
        assert_eq!("base64".parse::<DeclarationKind>().unwrap(), DeclarationKind::Base64);
        assert_eq!("command".parse::<DeclarationKind>().unwrap(), DeclarationKind::Command);
    }

    #[test]
    fn unknown_kind_is_an_error_not_literal() {
        let err = "bogus".parse::<DeclarationKind>().unwrap_err();
        assert!(matches!(err, ResolveError::UnknownType { ref kind } if kind == "bogus"));
        assert!("String".parse::<DeclarationKind>().is_err(), "type names are case-sensitive");
    }

    #[test]
    fn both_targets_are_rejected() {
        let err = RenderTarget::from_flags(
            Some(PathBuf::from("a.txt")),
            Some(PathBuf::from("dir")),
        )
        .unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn no_target_is_rejected() {
        let err = RenderTarget::from_flags(None, None).unwrap_err();
        assert!(err.to_string().contains("no target specified"));
    }

    #[test]
    fn single_target_is_accepted() {
        assert_eq!(
            RenderTarget::from_flags(None, Some(PathBuf::from("dir"))).unwrap(),
            RenderTarget::Directory(PathBuf::from("dir"))
        );
        assert_eq!(
            RenderTarget::from_flags(Some(PathBuf::from("a")), None).unwrap(),
            RenderTarget::File(PathBuf::from("a"))
        );
    }
}
