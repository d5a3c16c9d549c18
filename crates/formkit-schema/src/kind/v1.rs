use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::{FieldKind, SchemaVersion};

/// Field kinds of schema version 1
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldKindV1 {
    ShortText,
    LongText,
    Email,
    Phone,
    Number,
    Date,
    Time,
    MultipleChoice,
    Checkbox,
    Dropdown,
    Address,
    File,
    Name,
    Price,
}

impl FieldKind for FieldKindV1 {
    const VERSION: SchemaVersion = SchemaVersion::V1;

    fn as_str(&self) -> &'static str {
        self.into()
    }

    fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    fn is_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Checkbox | Self::Dropdown)
    }
}
