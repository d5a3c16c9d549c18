use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::{FieldKind, SchemaVersion};

/// Field kinds of schema version 2
///
/// Same as version 1 except that `address` is split into
/// `region`, `city` and `street`.
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
pub enum FieldKindV2 {
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
    Region,
    City,
    Street,
    File,
    Name,
    Price,
}

impl FieldKindV2 {
    /// Parts of a postal address
    pub fn is_address_part(&self) -> bool {
        matches!(self, Self::Region | Self::City | Self::Street)
    }
}

impl FieldKind for FieldKindV2 {
    const VERSION: SchemaVersion = SchemaVersion::V2;

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
