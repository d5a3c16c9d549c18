//! Show command

use anyhow::Result;
use std::path::Path;

use super::{read_document, Context};
use crate::output::OutputFormat;

pub fn handle(path: &Path, ctx: &Context) -> Result<()> {
    let doc = read_document(path, ctx.fallback)?;
    if ctx.format == OutputFormat::Table {
        println!("{} ({})", doc.title(), doc.version());
        if !doc.description().is_empty() {
            println!("{}", doc.description());
        }
    }
    ctx.format.print_fields(&doc.field_summaries())
}
