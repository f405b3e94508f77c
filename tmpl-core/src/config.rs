//! Configuration document decoding.
//!
//! The document is an array of declarations:
//!
//! ```json
//! [
//!   { "type": "string",  "key": "appName", "value": "Gjinja" },
//!   { "type": "base64",  "key": "secret",  "value": "bXlzZWNyZXQ=" },
//!   { "type": "command", "key": "cwd",     "value": "pwd" }
//! ]
//! ```
//!
//! JSON is the default; paths ending in `.yaml` / `.yml` are read as YAML
//! with the same shape. Only the shape is checked here. `type` values are
//! interpreted later by the resolver.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::ConfigDeclaration;

/// Default config document name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tmpl.json";

/// Syntax of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything that is not
    /// `.yaml` / `.yml` is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read and decode the declarations stored at `path`.
///
/// Returns `ConfigError::Read` if the file cannot be read and
/// `ConfigError::Parse` / `ConfigError::ParseYaml` if it is malformed.
pub fn load_declarations(path: &Path) -> Result<Vec<ConfigDeclaration>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let declarations = parse_declarations(&contents, ConfigFormat::from_path(path), path)?;
    tracing::debug!(
        "loaded {} config item(s) from {}",
        declarations.len(),
        path.display()
    );
    Ok(declarations)
}

/// Decode declarations from in-memory text. `origin` is only used in errors.
pub fn parse_declarations(
    contents: &str,
    format: ConfigFormat,
    origin: impl Into<PathBuf>,
) -> Result<Vec<ConfigDeclaration>, ConfigError> {
    match format {
        ConfigFormat::Json => serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.into(),
            source,
        }),
        ConfigFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|source| ConfigError::ParseYaml {
                path: origin.into(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(text: &str) -> Result<Vec<ConfigDeclaration>, ConfigError> {
        parse_declarations(text, ConfigFormat::Json, "tmpl.json")
    }

    #[test]
    fn preserves_declaration_order() {
        let decls = json(
            r#"[
                {"type":"string","key":"b","value":"2"},
                {"type":"command","key":"a","value":"pwd"},
                {"type":"base64","key":"c","value":"eA=="}
            ]"#,
        )
        .unwrap();
        let keys: Vec<_> = decls.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(decls[1].kind, "command");
    }

    #[test]
    fn unknown_type_is_not_a_parse_error() {
        let decls = json(r#"[{"type":"bogus","key":"x","value":"y"}]"#).unwrap();
        assert_eq!(decls[0].kind, "bogus");
    }

    #[test]
    fn object_at_top_level_is_a_parse_error() {
        let err = json(r#"{"type":"string","key":"x","value":"y"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn missing_value_is_a_parse_error() {
        let err = json(r#"[{"type":"string","key":"x"}]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn non_string_value_is_a_parse_error() {
        let err = json(r#"[{"type":"string","key":"port","value":8080}]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let decls = json(r#"[{"type":"string","key":"x","value":"y","note":"ignored"}]"#).unwrap();
        assert_eq!(decls, vec![ConfigDeclaration::literal("x", "y")]);
    }

    #[test]
    fn yaml_documents_share_the_shape() {
        let decls = parse_declarations(
            "- type: base64\n  key: secret\n  value: bXlzZWNyZXQ=\n- key: plain\n  value: hi\n",
            ConfigFormat::Yaml,
            "tmpl.yaml",
        )
        .unwrap();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].kind, "base64");
        assert_eq!(decls[1].kind, "string");
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("tmpl.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("values.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), ConfigFormat::Json);
    }
}
