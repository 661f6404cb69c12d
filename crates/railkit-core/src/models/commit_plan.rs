//! One planned commit: message, files to look at, and what changes

use crate::models::file_hunk::FileHunk;
use crate::rail_object::RailObject;
use crate::schema::{Field, OnFail};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitPlan {
    pub commit_message: String,
    pub relevant_file_hunks: Vec<FileHunk>,
    pub commit_changes_description: String,
}

impl CommitPlan {
    pub fn new(
        commit_message: impl Into<String>,
        commit_changes_description: impl Into<String>,
    ) -> Self {
        Self {
            commit_message: commit_message.into(),
            relevant_file_hunks: Vec::new(),
            commit_changes_description: commit_changes_description.into(),
        }
    }

    pub fn with_hunk(mut self, hunk: FileHunk) -> Self {
        self.relevant_file_hunks.push(hunk);
        self
    }

    /// The file hunks rendered and joined with `", "`
    pub fn files_line(&self) -> String {
        self.relevant_file_hunks
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl RailObject for CommitPlan {
    const NAME: &'static str = "CommitPlan";

    fn fields() -> Vec<Field> {
        vec![
            Field::string("commit_message")
                .describe("The commit message, concisely describing the changes made.")
                .length(1, 100)
                .on_fail(OnFail::Noop),
            Field::list("relevant_file_hunks", FileHunk::fields())
                .describe(
                    "The files we should be looking at while writing this commit. \
                     Include files that whose contents will be called by the code in this commit, \
                     and files that will be changed by this commit.",
                ),
            Field::string("commit_changes_description")
                .describe(
                    "A description of the changes made in this commit, \
                     in the form of a list of bullet points.",
                )
                .length(1, 1000),
        ]
    }
}

impl fmt::Display for CommitPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.commit_message, self.commit_changes_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationRule;
    use crate::schema::Length;
    use serde_json::{json, Value};

    #[test]
    fn test_display() {
        let plan = CommitPlan::new("Fix bug", "- patched null check");
        assert_eq!(plan.to_string(), "Fix bug\n\n- patched null check");
    }

    #[test]
    fn test_files_line() {
        let plan = CommitPlan::new("m", "d")
            .with_hunk(FileHunk::new("a.py"))
            .with_hunk(FileHunk::new("b.py").with_lines(1, 4));
        assert_eq!(plan.files_line(), "a.py, b.py:L1-L4");
        assert_eq!(CommitPlan::new("m", "d").files_line(), "");
    }

    #[test]
    fn test_fragment_embeds_file_hunk_fragment() {
        let spec = CommitPlan::output_spec();
        assert!(spec.contains(&format!("<object>\n{}\n</object>", FileHunk::output_spec())));
    }

    #[test]
    fn test_declared_constraints() {
        let message = CommitPlan::field("commit_message").unwrap();
        assert_eq!(message.length, Some(Length::new(1, 100)));
        assert_eq!(message.on_fail, OnFail::Noop);

        let description = CommitPlan::field("commit_changes_description").unwrap();
        assert!(description.required);
        assert_eq!(description.length, Some(Length::new(1, 1000)));

        assert_eq!(
            CommitPlan::field("relevant_file_hunks.filepath").map(|f| f.on_fail),
            Some(OnFail::Fix)
        );
    }

    #[test]
    fn test_hunks_are_required_but_may_be_empty() {
        assert!(CommitPlan::field("relevant_file_hunks").unwrap().required);
        assert!(CommitPlan::output_spec().contains(
            "name=\"relevant_file_hunks\"\n    description=\"The files we should be looking at while writing this commit. \
             Include files that whose contents will be called by the code in this commit, \
             and files that will be changed by this commit.\"\n    required=\"true\"\n    on-fail=\"noop\""
        ));

        let plan = CommitPlan::from_value(json!({
            "commit_message": "Add docs",
            "relevant_file_hunks": [],
            "commit_changes_description": "- docs"
        }))
        .unwrap();
        assert!(plan.relevant_file_hunks.is_empty());

        for hunks in [None, Some(Value::Null)] {
            let mut tree = json!({"commit_message": "Add docs", "commit_changes_description": "- docs"});
            if let Some(hunks) = hunks {
                tree["relevant_file_hunks"] = hunks;
            }
            let err = CommitPlan::from_value(tree).unwrap_err();
            assert_eq!(err.violations().len(), 1);
            assert_eq!(err.violations()[0].path, "$.relevant_file_hunks");
            assert_eq!(err.violations()[0].rule, ViolationRule::Required);
        }
    }

    #[test]
    fn test_from_value_requires_description() {
        let err = CommitPlan::from_value(json!({"commit_message": "x", "relevant_file_hunks": []}))
            .unwrap_err();
        assert_eq!(err.violations()[0].path, "$.commit_changes_description");
    }
}
