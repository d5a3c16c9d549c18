//! Version-tagged form document

use serde::Serialize;

use crate::domain::{Field, FieldLookup, Form, FormV1, FormV2};
use crate::kind::{FieldKind, SchemaVersion};

/// A form of either schema version
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormDocument {
    V1(FormV1),
    V2(FormV2),
}

/// Version-neutral view of a field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    pub position: usize,
    pub id: String,
    pub kind: &'static str,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldSummary {
    fn of<K: FieldKind>(position: usize, field: &Field<K>) -> Self {
        Self {
            position,
            id: field.id.clone(),
            kind: field.kind.as_str(),
            label: field.label.clone(),
            required: field.required,
            options: field.options.clone(),
            description: field.description.clone(),
            placeholder: field.placeholder.clone(),
        }
    }
}

fn summaries<K: FieldKind>(form: &Form<K>) -> Vec<FieldSummary> {
    form.fields
        .iter()
        .enumerate()
        .map(|(i, f)| FieldSummary::of(i, f))
        .collect()
}

fn position_of<K>(form: &Form<K>, field: &Field<K>) -> usize {
    form.fields
        .iter()
        .position(|f| std::ptr::eq(f, field))
        .unwrap_or_default()
}

impl FormDocument {
    pub fn version(&self) -> SchemaVersion {
        match self {
            FormDocument::V1(_) => SchemaVersion::V1,
            FormDocument::V2(_) => SchemaVersion::V2,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FormDocument::V1(f) => &f.title,
            FormDocument::V2(f) => &f.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            FormDocument::V1(f) => &f.description,
            FormDocument::V2(f) => &f.description,
        }
    }

    pub fn field_count(&self) -> usize {
        match self {
            FormDocument::V1(f) => f.fields.len(),
            FormDocument::V2(f) => f.fields.len(),
        }
    }

    pub fn field_summaries(&self) -> Vec<FieldSummary> {
        match self {
            FormDocument::V1(f) => summaries(f),
            FormDocument::V2(f) => summaries(f),
        }
    }

    pub fn duplicate_ids(&self) -> Vec<String> {
        let ids = match self {
            FormDocument::V1(f) => f.duplicate_ids(),
            FormDocument::V2(f) => f.duplicate_ids(),
        };
        ids.into_iter().map(str::to_string).collect()
    }

    pub fn lookup(&self, id: &str) -> FieldLookup<FieldSummary> {
        match self {
            FormDocument::V1(form) => form
                .lookup(id)
                .map(|field| FieldSummary::of(position_of(form, field), field)),
            FormDocument::V2(form) => form
                .lookup(id)
                .map(|field| FieldSummary::of(position_of(form, field), field)),
        }
    }
}

impl From<FormV1> for FormDocument {
    fn from(form: FormV1) -> Self {
        FormDocument::V1(form)
    }
}

impl From<FormV2> for FormDocument {
    fn from(form: FormV2) -> Self {
        FormDocument::V2(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldV2;
    use crate::kind::FieldKindV2;

    fn field(id: &str, kind: FieldKindV2) -> FieldV2 {
        Field {
            id: id.into(),
            kind,
            label: id.to_uppercase(),
            required: true,
            options: None,
            description: None,
            placeholder: None,
        }
    }

    fn doc() -> FormDocument {
        FormDocument::from(FormV2 {
            title: "Shipping".into(),
            description: "Where should we send it?".into(),
            fields: vec![
                field("city", FieldKindV2::City),
                field("street", FieldKindV2::Street),
                field("city", FieldKindV2::City),
            ],
        })
    }

    #[test]
    fn test_accessors() {
        let doc = doc();
        assert_eq!(doc.version(), SchemaVersion::V2);
        assert_eq!(doc.title(), "Shipping");
        assert_eq!(doc.description(), "Where should we send it?");
        assert_eq!(doc.field_count(), 3);
    }

    #[test]
    fn test_summaries_keep_order_and_tags() {
        let summaries = doc().field_summaries();
        let view: Vec<_> = summaries
            .iter()
            .map(|s| (s.position, s.id.as_str(), s.kind))
            .collect();
        assert_eq!(
            view,
            vec![(0, "city", "city"), (1, "street", "street"), (2, "city", "city")]
        );
    }

    #[test]
    fn test_lookup_reports_positions_of_ambiguous_hits() {
        let doc = doc();
        assert_eq!(doc.duplicate_ids(), vec!["city".to_string()]);
        match doc.lookup("city") {
            FieldLookup::Ambiguous(hits) => {
                let positions: Vec<_> = hits.iter().map(|s| s.position).collect();
                assert_eq!(positions, vec![0, 2]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert_eq!(doc.lookup("street").unique().map(|s| s.position), Some(1));
        assert_eq!(doc.lookup("zip"), FieldLookup::Missing);
    }
}
