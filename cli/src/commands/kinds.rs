//! Kinds command

use anyhow::Result;
use formkit_schema::{FieldKind, FieldKindV1, FieldKindV2, SchemaVersion};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::output::OutputFormat;

#[derive(Debug, Serialize, Tabled)]
pub struct KindRow {
    pub version: u8,
    pub kind: &'static str,
    pub choice: bool,
}

fn rows_of<K: FieldKind>() -> Vec<KindRow> {
    K::all()
        .into_iter()
        .map(|kind| KindRow {
            version: K::VERSION.number(),
            kind: kind.as_str(),
            choice: kind.is_choice(),
        })
        .collect()
}

pub fn rows(version: Option<SchemaVersion>) -> Vec<KindRow> {
    let versions = match version {
        Some(v) => vec![v],
        None => SchemaVersion::ALL.to_vec(),
    };
    versions
        .into_iter()
        .flat_map(|v| match v {
            SchemaVersion::V1 => rows_of::<FieldKindV1>(),
            SchemaVersion::V2 => rows_of::<FieldKindV2>(),
        })
        .collect()
}

pub fn handle(version: Option<SchemaVersion>, ctx: &Context) -> Result<()> {
    let rows = rows(version);
    match ctx.format {
        OutputFormat::Table => println!("{}", Table::new(rows).with(Style::sharp())),
        format => format.print(&rows)?,
    }
    Ok(())
}
