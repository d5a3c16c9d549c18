//! Error types for FormKit schemas

use thiserror::Error;

use crate::kind::SchemaVersion;

/// Schema boundary error
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A field carries a `type` tag outside the version's enumeration
    #[error("unrecognized field kind `{kind}` for schema {version} at field #{index}{}", field_ref(.field_id))]
    UnknownFieldKind {
        version: SchemaVersion,
        kind: String,
        index: usize,
        field_id: Option<String>,
    },

    /// The document declares a version that does not exist
    #[error("unknown schema version: {0}")]
    UnknownVersion(String),

    /// Kinds from both versions appear in one undeclared document
    #[error("form mixes `address` with `region`/`city`/`street` and declares no version")]
    MixedVersions,

    /// Two or more fields share an identifier
    #[error("duplicate field id `{id}` at positions {positions:?}")]
    DuplicateFieldId { id: String, positions: Vec<usize> },

    /// Malformed JSON, or a structurally invalid form
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn field_ref(field_id: &Option<String>) -> String {
    match field_id {
        Some(id) => format!(" (`{id}`)"),
        None => String::new(),
    }
}

/// Result type for FormKit schemas
pub type Result<T> = std::result::Result<T, SchemaError>;
