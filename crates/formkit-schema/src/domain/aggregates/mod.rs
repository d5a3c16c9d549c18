//! Form Aggregate
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Field;
use crate::error::{Result, SchemaError};
use crate::kind::{FieldKindV1, FieldKindV2};

/// A titled, ordered list of fields
///
/// Field order is significant and preserved by every copy and transform.
/// Field ids are expected to be unique but nothing here enforces it;
/// use [`Form::lookup`] or [`Form::duplicate_ids`] to detect collisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form<K> {
    pub title: String,
    pub description: String,
    pub fields: Vec<Field<K>>,
}

pub type FormV1 = Form<FieldKindV1>;
pub type FormV2 = Form<FieldKindV2>;

/// Outcome of a lookup by field id
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldLookup<T> {
    Missing,
    Unique(T),
    /// Several fields share the id, in form order
    Ambiguous(Vec<T>),
}

impl<T> FieldLookup<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> FieldLookup<U> {
        match self {
            FieldLookup::Missing => FieldLookup::Missing,
            FieldLookup::Unique(t) => FieldLookup::Unique(f(t)),
            FieldLookup::Ambiguous(ts) => FieldLookup::Ambiguous(ts.into_iter().map(f).collect()),
        }
    }

    pub fn unique(self) -> Option<T> {
        match self {
            FieldLookup::Unique(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, FieldLookup::Ambiguous(_))
    }
}

impl<K> Form<K> {
    pub fn lookup(&self, id: &str) -> FieldLookup<&Field<K>> {
        let mut matches: Vec<&Field<K>> = self.fields.iter().filter(|f| f.id == id).collect();
        match matches.len() {
            0 => FieldLookup::Missing,
            1 => FieldLookup::Unique(matches.remove(0)),
            _ => FieldLookup::Ambiguous(matches),
        }
    }

    /// Colliding ids, each listed once, in order of first occurrence
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();
        for (i, field) in self.fields.iter().enumerate() {
            let id = field.id.as_str();
            if dups.contains(&id) {
                continue;
            }
            if self.fields[i + 1..].iter().any(|f| f.id == id) {
                dups.push(id);
            }
        }
        dups
    }

    pub fn ensure_unique_ids(&self) -> Result<()> {
        match self.duplicate_ids().first() {
            None => Ok(()),
            Some(id) => Err(SchemaError::DuplicateFieldId {
                id: id.to_string(),
                positions: self
                    .fields
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| f.id == *id)
                    .map(|(i, _)| i)
                    .collect(),
            }),
        }
    }
}
