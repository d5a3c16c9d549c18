//! Lookup command

use anyhow::{bail, Result};
use formkit_schema::{FieldLookup, FieldSummary};
use std::path::Path;

use super::{read_document, Context};

pub fn find(path: &Path, id: &str, ctx: &Context) -> Result<FieldLookup<FieldSummary>> {
    Ok(read_document(path, ctx.fallback)?.lookup(id))
}

pub fn handle(path: &Path, id: &str, ctx: &Context) -> Result<()> {
    match find(path, id, ctx)? {
        FieldLookup::Unique(field) => ctx.format.print_fields(std::slice::from_ref(&field)),
        FieldLookup::Missing => bail!("no field with id `{id}`"),
        FieldLookup::Ambiguous(fields) => {
            ctx.format.print_fields(&fields)?;
            let positions: Vec<String> = fields.iter().map(|f| f.position.to_string()).collect();
            bail!("id `{id}` is ambiguous: fields at positions {}", positions.join(", "))
        }
    }
}
