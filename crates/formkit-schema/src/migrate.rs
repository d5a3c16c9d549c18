//! Mapping between schema versions
//!
//! Upgrading splits every `address` field in place into three consecutive
//! parts whose ids are `{id}.region`, `{id}.city` and `{id}.street`. Only the
//! region part carries the original `description`, `placeholder` and
//! `options`; all three copy `required`.
//!
//! Downgrading reverses that: a `region`, `city`, `street` run with matching
//! `{base}.` ids merges back into one `address` field. Any other address part
//! is widened to a whole `address` on its own, which is reported as lossy.
//!
//! An upgrade followed by a downgrade returns the original form as long as the
//! generated part ids do not collide with existing ids.

use crate::document::FormDocument;
use crate::domain::{Field, FieldV1, FieldV2, FormV1, FormV2, MigrationEvent};
use crate::kind::{FieldKindV1, FieldKindV2, SchemaVersion};

const PARTS: [(FieldKindV2, &str, &str); 3] = [
    (FieldKindV2::Region, "region", "Region"),
    (FieldKindV2::City, "city", "City"),
    (FieldKindV2::Street, "street", "Street"),
];

/// Result of a migration plus what it did
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Migration<T> {
    pub form: T,
    pub events: Vec<MigrationEvent>,
}

impl<T> Migration<T> {
    pub fn is_lossless(&self) -> bool {
        !self.events.iter().any(MigrationEvent::is_lossy)
    }

    fn map<U>(self, f: impl FnOnce(T) -> U) -> Migration<U> {
        Migration {
            form: f(self.form),
            events: self.events,
        }
    }
}

fn shared_kind_up(kind: FieldKindV1) -> Option<FieldKindV2> {
    Some(match kind {
        FieldKindV1::ShortText => FieldKindV2::ShortText,
        FieldKindV1::LongText => FieldKindV2::LongText,
        FieldKindV1::Email => FieldKindV2::Email,
        FieldKindV1::Phone => FieldKindV2::Phone,
        FieldKindV1::Number => FieldKindV2::Number,
        FieldKindV1::Date => FieldKindV2::Date,
        FieldKindV1::Time => FieldKindV2::Time,
        FieldKindV1::MultipleChoice => FieldKindV2::MultipleChoice,
        FieldKindV1::Checkbox => FieldKindV2::Checkbox,
        FieldKindV1::Dropdown => FieldKindV2::Dropdown,
        FieldKindV1::File => FieldKindV2::File,
        FieldKindV1::Name => FieldKindV2::Name,
        FieldKindV1::Price => FieldKindV2::Price,
        FieldKindV1::Address => return None,
    })
}

fn shared_kind_down(kind: FieldKindV2) -> Option<FieldKindV1> {
    Some(match kind {
        FieldKindV2::ShortText => FieldKindV1::ShortText,
        FieldKindV2::LongText => FieldKindV1::LongText,
        FieldKindV2::Email => FieldKindV1::Email,
        FieldKindV2::Phone => FieldKindV1::Phone,
        FieldKindV2::Number => FieldKindV1::Number,
        FieldKindV2::Date => FieldKindV1::Date,
        FieldKindV2::Time => FieldKindV1::Time,
        FieldKindV2::MultipleChoice => FieldKindV1::MultipleChoice,
        FieldKindV2::Checkbox => FieldKindV1::Checkbox,
        FieldKindV2::Dropdown => FieldKindV1::Dropdown,
        FieldKindV2::File => FieldKindV1::File,
        FieldKindV2::Name => FieldKindV1::Name,
        FieldKindV2::Price => FieldKindV1::Price,
        FieldKindV2::Region | FieldKindV2::City | FieldKindV2::Street => return None,
    })
}

fn rekind<A, B>(field: Field<A>, kind: B) -> Field<B> {
    Field {
        id: field.id,
        kind,
        label: field.label,
        required: field.required,
        options: field.options,
        description: field.description,
        placeholder: field.placeholder,
    }
}

fn part_label(label: &str, part: &str) -> String {
    format!("{label} ({part})")
}

/// Map a version 1 form to version 2
pub fn upgrade(form: FormV1) -> Migration<FormV2> {
    let existing: Vec<String> = form.fields.iter().map(|f| f.id.clone()).collect();
    let mut fields = Vec::with_capacity(form.fields.len());
    let mut events = Vec::new();

    for field in form.fields {
        if let Some(kind) = shared_kind_up(field.kind) {
            fields.push(rekind(field, kind));
            continue;
        }

        let parts = PARTS.map(|(_, suffix, _)| format!("{}.{suffix}", field.id));
        for part in parts.iter().filter(|p| existing.contains(p)) {
            tracing::warn!(id = %part, "split address part collides with an existing field id");
        }

        let FieldV1 {
            id,
            label,
            required,
            mut options,
            mut description,
            mut placeholder,
            ..
        } = field;
        for ((kind, _, name), part_id) in PARTS.iter().zip(parts.iter()) {
            fields.push(FieldV2 {
                id: part_id.clone(),
                kind: *kind,
                label: part_label(&label, name),
                required,
                options: options.take(),
                description: description.take(),
                placeholder: placeholder.take(),
            });
        }
        tracing::debug!(%id, "split address field");
        events.push(MigrationEvent::Split { id, parts });
    }

    Migration {
        form: FormV2 {
            title: form.title,
            description: form.description,
            fields,
        },
        events,
    }
}

/// Base id when `fields` starts with a matching region, city, street run
fn address_run(fields: &[FieldV2]) -> Option<String> {
    let [region, city, street, ..] = fields else {
        return None;
    };
    let base = region.id.strip_suffix(".region")?;
    let matches = [region, city, street]
        .iter()
        .zip(PARTS.iter())
        .all(|(field, (kind, suffix, _))| {
            field.kind == *kind && field.id == format!("{base}.{suffix}")
        });
    matches.then(|| base.to_string())
}

/// Map a version 2 form to version 1
pub fn downgrade(form: FormV2) -> Migration<FormV1> {
    let mut fields = Vec::with_capacity(form.fields.len());
    let mut events = Vec::new();
    let mut rest = form.fields.as_slice();

    while let Some(field) = rest.first() {
        if let Some(kind) = shared_kind_down(field.kind) {
            fields.push(rekind(field.clone(), kind));
            rest = &rest[1..];
            continue;
        }

        if let Some(base) = address_run(rest) {
            let region = &rest[0];
            let label = region
                .label
                .strip_suffix(&format!(" ({})", PARTS[0].2))
                .unwrap_or(&region.label)
                .to_string();
            fields.push(FieldV1 {
                id: base.clone(),
                kind: FieldKindV1::Address,
                label,
                required: region.required,
                options: region.options.clone(),
                description: region.description.clone(),
                placeholder: region.placeholder.clone(),
            });
            tracing::debug!(id = %base, "merged address parts");
            events.push(MigrationEvent::Merged {
                id: base,
                parts: [rest[0].id.clone(), rest[1].id.clone(), rest[2].id.clone()],
            });
            rest = &rest[3..];
            continue;
        }

        tracing::warn!(id = %field.id, kind = %field.kind, "widening lone address part to address");
        events.push(MigrationEvent::Widened {
            id: field.id.clone(),
            from: field.kind,
        });
        fields.push(rekind(field.clone(), FieldKindV1::Address));
        rest = &rest[1..];
    }

    Migration {
        form: FormV1 {
            title: form.title,
            description: form.description,
            fields,
        },
        events,
    }
}

/// Bring a document to `target`; a document already there is returned as is
pub fn migrate_document(doc: FormDocument, target: SchemaVersion) -> Migration<FormDocument> {
    match (doc, target) {
        (FormDocument::V1(form), SchemaVersion::V2) => upgrade(form).map(FormDocument::V2),
        (FormDocument::V2(form), SchemaVersion::V1) => downgrade(form).map(FormDocument::V1),
        (doc, _) => Migration {
            form: doc,
            events: Vec::new(),
        },
    }
}
