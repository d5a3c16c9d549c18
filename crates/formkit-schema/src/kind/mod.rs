//! Field kinds and schema versions
//!
//! Two closed enumerations exist side by side:
//!
//! - [`FieldKindV1`] has a single composite `address` kind
//! - [`FieldKindV2`] replaces `address` with `region`, `city` and `street`
//!
//! Both serialize to the same camelCase tags (`shortText`, `multipleChoice`, ...).
//! Tags are case-sensitive.

mod v1;
mod v2;

pub use v1::FieldKindV1;
pub use v2::FieldKindV2;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::SchemaError;

/// Schema version of a form document
///
/// On the wire this is the integer `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SchemaVersion {
    /// Version A: composite `address`
    V1,
    /// Version B: `region`, `city`, `street`
    V2,
}

impl SchemaVersion {
    /// Most recent version
    pub const LATEST: SchemaVersion = SchemaVersion::V2;

    /// All versions, oldest first
    pub const ALL: [SchemaVersion; 2] = [SchemaVersion::V1, SchemaVersion::V2];

    /// Wire number
    pub const fn number(&self) -> u8 {
        match self {
            SchemaVersion::V1 => 1,
            SchemaVersion::V2 => 2,
        }
    }

    /// Kind tags of this version, in declaration order
    pub fn kind_names(&self) -> Vec<&'static str> {
        match self {
            SchemaVersion::V1 => FieldKindV1::all().iter().map(|k| k.as_str()).collect(),
            SchemaVersion::V2 => FieldKindV2::all().iter().map(|k| k.as_str()).collect(),
        }
    }

    /// Whether `tag` names a kind of this version
    pub fn accepts(&self, tag: &str) -> bool {
        match self {
            SchemaVersion::V1 => FieldKindV1::from_tag(tag).is_some(),
            SchemaVersion::V2 => FieldKindV2::from_tag(tag).is_some(),
        }
    }

    /// Whether `tag` is accepted by this version and by no other
    pub fn owns(&self, tag: &str) -> bool {
        self.accepts(tag)
            && Self::ALL
                .iter()
                .filter(|other| *other != self)
                .all(|other| !other.accepts(tag))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

impl TryFrom<u8> for SchemaVersion {
    type Error = SchemaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SchemaVersion::V1),
            2 => Ok(SchemaVersion::V2),
            other => Err(SchemaError::UnknownVersion(other.to_string())),
        }
    }
}

impl From<SchemaVersion> for u8 {
    fn from(version: SchemaVersion) -> Self {
        version.number()
    }
}

impl FromStr for SchemaVersion {
    type Err = SchemaError;

    /// Accepts `1`, `2`, `v1`, `v2`, `V1`, `V2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['v', 'V']).unwrap_or(s);
        digits
            .parse::<u8>()
            .ok()
            .and_then(|n| SchemaVersion::try_from(n).ok())
            .ok_or_else(|| SchemaError::UnknownVersion(s.to_string()))
    }
}

/// Common interface of the per-version kind enumerations
pub trait FieldKind:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Version this enumeration belongs to
    const VERSION: SchemaVersion;

    /// Wire tag
    fn as_str(&self) -> &'static str;

    /// Every kind, in declaration order
    fn all() -> Vec<Self>;

    /// Parse a wire tag; `None` for anything outside the enumeration
    fn from_tag(tag: &str) -> Option<Self>;

    /// Kinds for which `options` is meaningful
    fn is_choice(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_wire_number() {
        assert_eq!(serde_json::to_string(&SchemaVersion::V1).unwrap(), "1");
        assert_eq!(
            serde_json::from_str::<SchemaVersion>("2").unwrap(),
            SchemaVersion::V2
        );
        assert!(serde_json::from_str::<SchemaVersion>("3").is_err());
    }

    #[test]
    fn test_version_from_str() {
        assert_eq!("1".parse::<SchemaVersion>().unwrap(), SchemaVersion::V1);
        assert_eq!("v2".parse::<SchemaVersion>().unwrap(), SchemaVersion::V2);
        assert_eq!("V1".parse::<SchemaVersion>().unwrap(), SchemaVersion::V1);
        assert!(matches!(
            "v9".parse::<SchemaVersion>(),
            Err(SchemaError::UnknownVersion(v)) if v == "v9"
        ));
        assert!("two".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn test_version_kind_sets() {
        let v1 = SchemaVersion::V1.kind_names();
        let v2 = SchemaVersion::V2.kind_names();
        assert_eq!(v1.len(), 14);
        assert_eq!(v2.len(), 16);
        assert!(v1.contains(&"address"));
        assert!(!v2.contains(&"address"));
        for tag in ["region", "city", "street"] {
            assert!(v2.contains(&tag));
            assert!(!v1.contains(&tag));
        }
        let shared: Vec<_> = v1.iter().filter(|t| **t != "address").collect();
        assert!(shared.iter().all(|t| v2.contains(t)));
    }

    #[test]
    fn test_version_ownership() {
        assert!(SchemaVersion::V1.owns("address"));
        assert!(SchemaVersion::V2.owns("street"));
        assert!(!SchemaVersion::V1.owns("email"));
        assert!(!SchemaVersion::V2.owns("email"));
        assert!(!SchemaVersion::V2.owns("slider"));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!(SchemaVersion::V1.accepts("shortText"));
        assert!(!SchemaVersion::V1.accepts("ShortText"));
        assert!(!SchemaVersion::V1.accepts("shorttext"));
    }
}
