//! CLI Commands

pub mod check;
pub mod config;
pub mod kinds;
pub mod lookup;
pub mod migrate;
pub mod show;

use anyhow::{Context as _, Result};
use formkit_schema::{codec, Format, FormDocument, SchemaVersion};
use std::fs;
use std::path::Path;

use crate::output::OutputFormat;

/// Settings shared by every command
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    /// Version for files that neither declare nor imply one
    pub fallback: SchemaVersion,
}

pub fn read_document(path: &Path, fallback: SchemaVersion) -> Result<FormDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = codec::decode(&content, Format::from_path(path), fallback)
        .with_context(|| format!("rejected {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        version = %doc.version(),
        fields = doc.field_count(),
        "loaded form"
    );
    Ok(doc)
}

pub fn write_document(doc: &FormDocument, path: &Path) -> Result<()> {
    let content = codec::encode(doc, Format::from_path(path))?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub const CONTACT: &str = r#"{
        "title": "Contact",
        "description": "Get in touch",
        "fields": [
            { "id": "name", "type": "name", "label": "Name", "required": true },
            { "id": "home", "type": "address", "label": "Home", "required": false },
            { "id": "topic", "type": "dropdown", "label": "Topic", "required": true,
              "options": ["sales", "support"] }
        ]
    }"#;

    pub fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{write, CONTACT};
    use super::*;

    #[test]
    fn test_read_and_write_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(&dir, "contact.json", CONTACT);
        let doc = read_document(&input, SchemaVersion::V2).unwrap();
        assert_eq!(doc.version(), SchemaVersion::V1);

        let output = dir.path().join("contact.yaml");
        write_document(&doc, &output).unwrap();
        let raw = fs::read_to_string(&output).unwrap();
        assert!(raw.starts_with("version: 1"));
        assert_eq!(read_document(&output, SchemaVersion::V2).unwrap(), doc);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("nope.json"), SchemaVersion::V2).unwrap_err();
        assert!(err.to_string().starts_with("reading"));
    }

    #[test]
    fn test_rejected_file_keeps_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "bad.json",
            r#"{ "title": "t", "description": "d", "fields": [
                { "id": "s", "type": "slider", "label": "S", "required": true } ] }"#,
        );
        let err = read_document(&path, SchemaVersion::V2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<formkit_schema::SchemaError>(),
            Some(formkit_schema::SchemaError::UnknownFieldKind { .. })
        ));
    }
}
