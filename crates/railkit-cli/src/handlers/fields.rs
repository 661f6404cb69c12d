//! Fields command handler

use crate::cli::FieldsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use railkit_core::schema::FieldEntry;
use railkit_core::{OnFail, RailObjectKind};
use serde::Serialize;
use tracing::instrument;

/// One declared field, flattened for display
#[derive(Debug, Serialize)]
struct FieldRow<'a> {
    path: String,
    #[serde(rename = "type")]
    kind: &'static str,
    required: bool,
    on_fail: OnFail,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

impl<'a> From<FieldEntry<'a>> for FieldRow<'a> {
    fn from(entry: FieldEntry<'a>) -> Self {
        let field = entry.field;
        Self {
            path: entry.path,
            kind: field.kind.tag(),
            required: field.required,
            on_fail: field.on_fail,
            format: field.format.map(|f| f.as_str()),
            length: field.length.map(|l| l.to_string()),
            description: field.description,
        }
    }
}

/// Handle the fields command
#[instrument(skip(_config, output))]
pub fn handle_fields(args: FieldsArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let kind = RailObjectKind::from(args.rail_object);
    let fragment = kind.fragment();
    let rows: Vec<FieldRow<'_>> = fragment.entries().into_iter().map(FieldRow::from).collect();

    if !output.is_human() {
        return output.data(&rows);
    }

    output.section(kind.type_name())?;
    let table = rows
        .iter()
        .map(|row| {
            vec![
                row.path.clone(),
                row.kind.to_string(),
                row.required.to_string(),
                row.on_fail.to_string(),
                row.format.unwrap_or("-").to_string(),
                row.length.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    output.table(
        &["path", "type", "required", "on-fail", "format", "length"],
        table,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, RailType};
    use crate::output::testing::buffered;

    #[test]
    fn test_json_lists_nested_fields_depth_first() {
        let (mut output, buffer) = buffered(OutputFormat::Json, false);
        let args = FieldsArgs {
            rail_object: RailType::CommitPlan,
        };
        handle_fields(args, &Config::default(), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let paths: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["path"].as_str().unwrap())
            .collect();
        assert_eq!(
            paths,
            vec![
                "commit_message",
                "relevant_file_hunks",
                "relevant_file_hunks.filepath",
                "relevant_file_hunks.start_line",
                "relevant_file_hunks.end_line",
                "commit_changes_description",
            ]
        );
        assert_eq!(parsed[0]["length"], "1 100");
        assert_eq!(parsed[2]["on_fail"], "fix");
        assert_eq!(parsed[2]["format"], "filepath");
        assert_eq!(parsed[1]["type"], "list");
    }

    #[test]
    fn test_human_table() {
        let (mut output, buffer) = buffered(OutputFormat::Human, false);
        let args = FieldsArgs {
            rail_object: RailType::PullRequestDescription,
        };
        handle_fields(args, &Config::default(), &mut output).unwrap();

        let contents = buffer.contents();
        assert!(contents.starts_with("\n=== PullRequestDescription ===\npath"));
        let commits = contents
            .lines()
            .find(|line| line.starts_with("commits "))
            .unwrap();
        assert!(commits.contains("list"));
        assert!(commits.contains("reask"));
        assert!(contents.contains("commits.relevant_file_hunks.filepath"));
    }
}
