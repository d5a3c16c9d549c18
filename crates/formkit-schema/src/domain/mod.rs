//! Form schema domain model

pub mod aggregates;
pub mod events;
pub mod value_objects;

pub use aggregates::{FieldLookup, Form, FormV1, FormV2};
pub use events::MigrationEvent;
pub use value_objects::{Field, FieldV1, FieldV2};
