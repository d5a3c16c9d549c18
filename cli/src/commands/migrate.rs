//! Migrate command

use anyhow::Result;
use formkit_schema::{codec, migrate, Format, FormDocument, Migration, SchemaVersion};
use std::path::Path;

use super::{read_document, write_document, Context};
use crate::output::OutputFormat;

pub fn run(path: &Path, target: SchemaVersion, ctx: &Context) -> Result<Migration<FormDocument>> {
    let doc = read_document(path, ctx.fallback)?;
    let from = doc.version();
    let migration = migrate::migrate_document(doc, target);
    tracing::info!(%from, to = %target, steps = migration.events.len(), "migrated form");
    Ok(migration)
}

pub fn handle(
    path: &Path,
    target: SchemaVersion,
    output: Option<&Path>,
    ctx: &Context,
) -> Result<()> {
    let migration = run(path, target, ctx)?;
    for event in &migration.events {
        eprintln!("{event}");
    }
    if !migration.is_lossless() {
        tracing::warn!("migration to {target} was lossy");
    }
    match output {
        Some(out) => write_document(&migration.form, out)?,
        None => {
            let format = match ctx.format {
                OutputFormat::Yaml => Format::Yaml,
                _ => Format::Json,
            };
            println!("{}", codec::encode(&migration.form, format)?);
        }
    }
    Ok(())
}
