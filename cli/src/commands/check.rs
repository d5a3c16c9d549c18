//! Check command

use anyhow::{bail, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use super::{read_document, Context};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
pub struct Report {
    pub version: u8,
    pub title: String,
    pub fields: usize,
    pub duplicate_ids: Vec<String>,
}

pub fn report(path: &Path, ctx: &Context) -> Result<Report> {
    let doc = read_document(path, ctx.fallback)?;
    Ok(Report {
        version: doc.version().number(),
        title: doc.title().to_string(),
        fields: doc.field_count(),
        duplicate_ids: doc.duplicate_ids(),
    })
}

pub fn handle(path: &Path, ctx: &Context) -> Result<()> {
    let report = report(path, ctx)?;
    match ctx.format {
        OutputFormat::Table => {
            let status = if report.duplicate_ids.is_empty() {
                "OK".green()
            } else {
                "DUPLICATE IDS".yellow()
            };
            println!("{} {}", status.bold(), path.display());
            println!("  version: {}", report.version);
            println!("  title:   {}", report.title);
            println!("  fields:  {}", report.fields);
            for id in &report.duplicate_ids {
                println!("  {} `{}`", "duplicate id".yellow(), id);
            }
        }
        format => format.print(&report)?,
    }
    if !report.duplicate_ids.is_empty() {
        bail!("duplicate field ids: {}", report.duplicate_ids.join(", "));
    }
    Ok(())
}
