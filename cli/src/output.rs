//! Output formatting

use anyhow::Result;
use clap::ValueEnum;
use formkit_schema::FieldSummary;
use serde::{Deserialize, Serialize};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String> {
        Ok(match self {
            OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(data)?,
            OutputFormat::Yaml => serde_yaml::to_string(data)?,
        })
    }

    pub fn print<T: Serialize>(&self, data: &T) -> Result<()> {
        println!("{}", self.render(data)?);
        Ok(())
    }

    /// Fields as a table, or as a serialized list for the other formats
    pub fn print_fields(&self, fields: &[FieldSummary]) -> Result<()> {
        match self {
            OutputFormat::Table => println!("{}", field_table(fields)),
            _ => self.print(&fields)?,
        }
        Ok(())
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "#")]
    position: usize,
    id: String,
    #[tabled(rename = "type")]
    kind: &'static str,
    label: String,
    required: &'static str,
    options: String,
}

impl From<&FieldSummary> for FieldRow {
    fn from(field: &FieldSummary) -> Self {
        Self {
            position: field.position,
            id: field.id.clone(),
            kind: field.kind,
            label: field.label.clone(),
            required: if field.required { "yes" } else { "no" },
            options: match &field.options {
                Some(options) => options.join(", "),
                None => "-".into(),
            },
        }
    }
}

pub fn field_table(fields: &[FieldSummary]) -> String {
    let rows: Vec<FieldRow> = fields.iter().map(FieldRow::from).collect();
    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, options: Option<Vec<String>>) -> FieldSummary {
        FieldSummary {
            position: 0,
            id: id.into(),
            kind: "dropdown",
            label: "Plan".into(),
            required: true,
            options,
            description: None,
            placeholder: None,
        }
    }

    #[test]
    fn test_table_lists_fields() {
        let table = field_table(&[summary("plan", Some(vec!["free".into(), "pro".into()]))]);
        assert!(table.contains("plan"));
        assert!(table.contains("dropdown"));
        assert!(table.contains("free, pro"));
        assert!(table.contains("yes"));
    }

    #[test]
    fn test_absent_options_rendered_as_dash() {
        let table = field_table(&[summary("plan", None)]);
        assert!(table.contains(" - "));
    }

    #[test]
    fn test_render_json_and_yaml() {
        let fields = vec![summary("plan", None)];
        let json = OutputFormat::Json.render(&fields).unwrap();
        assert!(json.contains("\"id\": \"plan\""));
        assert!(!json.contains("options"));
        let yaml = OutputFormat::Yaml.render(&fields).unwrap();
        assert!(yaml.contains("id: plan"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(
            OutputFormat::from_str("yaml", true).unwrap(),
            OutputFormat::Yaml
        );
        assert_eq!(
            serde_json::to_string(&OutputFormat::Table).unwrap(),
            "\"table\""
        );
    }
}
