//! Migration events
use std::fmt;

use crate::kind::FieldKindV2;

/// One step taken while mapping a form between schema versions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MigrationEvent {
    /// An `address` field became `region`, `city` and `street`
    Split { id: String, parts: [String; 3] },
    /// A `region`, `city`, `street` triple became one `address` field
    Merged { id: String, parts: [String; 3] },
    /// A lone address part was mapped to a whole `address` (lossy)
    Widened { id: String, from: FieldKindV2 },
}

impl MigrationEvent {
    pub fn is_lossy(&self) -> bool {
        matches!(self, MigrationEvent::Widened { .. })
    }
}

impl fmt::Display for MigrationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationEvent::Split { id, parts } => {
                write!(f, "split `{id}` into {}", parts.join(", "))
            }
            MigrationEvent::Merged { id, parts } => {
                write!(f, "merged {} into `{id}`", parts.join(", "))
            }
            MigrationEvent::Widened { id, from } => {
                write!(f, "widened `{id}` from {from} to address")
            }
        }
    }
}
