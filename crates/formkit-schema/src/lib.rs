//! FormKit Schema
//!
//! The form schema model shared by anything that builds, renders or stores
//! forms: a [`Form`] is a title, a description and an ordered list of
//! [`Field`]s, and every field is tagged with a kind from a closed,
//! versioned enumeration.
//!
//! ## Contents
//! - Schema model: [`Field`], [`Form`] and the per-version aliases
//! - Field kinds: [`FieldKindV1`], [`FieldKindV2`], [`SchemaVersion`]
//! - Version-tagged documents: [`FormDocument`]
//! - JSON / YAML boundary: [`codec::decode`], [`codec::encode`]
//! - Version mapping: [`migrate::upgrade`], [`migrate::downgrade`]
//!
//! ```
//! use formkit_schema::{codec, Format, FormDocument, SchemaVersion};
//!
//! let input = r#"{
//!     "title": "Contact",
//!     "description": "",
//!     "fields": [
//!         { "id": "home", "type": "address", "label": "Home", "required": true }
//!     ]
//! }"#;
//! let doc = codec::decode(input, Format::Json, SchemaVersion::LATEST).unwrap();
//! assert!(matches!(doc, FormDocument::V1(_)));
//! ```

pub mod codec;
pub mod document;
pub mod domain;
pub mod error;
pub mod kind;
pub mod migrate;

pub use codec::Format;
pub use document::{FieldSummary, FormDocument};
pub use domain::{
    Field, FieldLookup, FieldV1, FieldV2, Form, FormV1, FormV2, MigrationEvent,
};
pub use error::{Result, SchemaError};
pub use kind::{FieldKind, FieldKindV1, FieldKindV2, SchemaVersion};
pub use migrate::Migration;
