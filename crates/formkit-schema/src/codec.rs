//! JSON / YAML boundary for form documents
//!
//! Decoding is strict about the one thing the schema guarantees: every
//! field `type` belongs to the document's kind enumeration. A foreign tag
//! surfaces as [`SchemaError::UnknownFieldKind`] instead of a generic
//! deserialization failure.
//!
//! # Wire shape
//!
//! ```json
//! {
//!   "version": 2,
//!   "title": "Contact",
//!   "description": "",
//!   "fields": [
//!     { "id": "email", "type": "email", "label": "Email", "required": true }
//!   ]
//! }
//! ```
//!
//! `version` is optional on input. When it is missing the version is inferred
//! from version-specific kinds, falling back to the caller's choice.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::document::FormDocument;
use crate::domain::Form;
use crate::error::{Result, SchemaError};
use crate::kind::SchemaVersion;

const VERSION_KEY: &str = "version";

/// Text encoding of a form document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// YAML for `.yaml` / `.yml`, JSON for anything else
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a, K> {
    version: SchemaVersion,
    #[serde(flatten)]
    form: &'a Form<K>,
}

/// Decode a document, using `fallback` when its version cannot be determined
pub fn decode(input: &str, format: Format, fallback: SchemaVersion) -> Result<FormDocument> {
    let mut tree: Value = match format {
        Format::Json => serde_json::from_str(input)?,
        Format::Yaml => serde_yaml::from_str(input)?,
    };

    let version = match tree.as_object_mut().and_then(|obj| obj.remove(VERSION_KEY)) {
        Some(declared) => declared_version(&declared)?,
        None => infer_version(&tree, fallback)?,
    };

    check_kinds(&tree, version)?;

    Ok(match version {
        SchemaVersion::V1 => FormDocument::V1(serde_json::from_value(tree)?),
        SchemaVersion::V2 => FormDocument::V2(serde_json::from_value(tree)?),
    })
}

/// Encode a document; the output always declares its version
pub fn encode(doc: &FormDocument, format: Format) -> Result<String> {
    match doc {
        FormDocument::V1(form) => write(&Envelope { version: doc.version(), form }, format),
        FormDocument::V2(form) => write(&Envelope { version: doc.version(), form }, format),
    }
}

fn write<T: Serialize>(value: &T, format: Format) -> Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}

fn declared_version(value: &Value) -> Result<SchemaVersion> {
    value
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| SchemaError::UnknownVersion(value.to_string()))
        .and_then(SchemaVersion::try_from)
}

fn field_tags(tree: &Value) -> impl Iterator<Item = &str> {
    tree.get("fields")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|field| field.get("type").and_then(Value::as_str))
}

fn infer_version(tree: &Value, fallback: SchemaVersion) -> Result<SchemaVersion> {
    let claimed: Vec<SchemaVersion> = SchemaVersion::ALL
        .into_iter()
        .filter(|version| field_tags(tree).any(|tag| version.owns(tag)))
        .collect();

    match claimed.as_slice() {
        [] => {
            tracing::debug!(%fallback, "no version-specific kinds, using fallback");
            Ok(fallback)
        }
        [version] => {
            tracing::debug!(%version, "inferred schema version from field kinds");
            Ok(*version)
        }
        _ => Err(SchemaError::MixedVersions),
    }
}

fn check_kinds(tree: &Value, version: SchemaVersion) -> Result<()> {
    let Some(fields) = tree.get("fields").and_then(Value::as_array) else {
        return Ok(());
    };

    for (index, field) in fields.iter().enumerate() {
        let kind = match field.get("type") {
            None => continue,
            Some(Value::String(tag)) if version.accepts(tag) => continue,
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => other.to_string(),
        };
        return Err(SchemaError::UnknownFieldKind {
            version,
            kind,
            index,
            field_id: field.get("id").and_then(Value::as_str).map(str::to_string),
        });
    }
    Ok(())
}
