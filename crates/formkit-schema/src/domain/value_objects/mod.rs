//! Form field value object
use serde::{Deserialize, Serialize};

use crate::kind::{FieldKindV1, FieldKindV2};

/// One question of a form
///
/// `K` is the kind enumeration of the schema version the field belongs to.
/// Absent optional attributes are never serialized, and an empty `options`
/// list stays distinct from an absent one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field<K> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: K,
    pub label: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

pub type FieldV1 = Field<FieldKindV1>;
pub type FieldV2 = Field<FieldKindV2>;
