//! The full pull request description: title, body and planned commits

use crate::models::commit_plan::CommitPlan;
use crate::rail_object::RailObject;
use crate::schema::{Field, OnFail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title, body and the ordered commits of a pull request
///
/// `commits` is declared with the `reask` policy: an empty or inert commit
/// list sends the validator back to the model. A tree that reaches this type
/// with no commits is still accepted and renders only the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestDescription {
    pub title: String,
    pub body: String,
    pub commits: Vec<CommitPlan>,
}

impl PullRequestDescription {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            commits: Vec::new(),
        }
    }

    pub fn with_commit(mut self, commit: CommitPlan) -> Self {
        self.commits.push(commit);
        self
    }
}

impl RailObject for PullRequestDescription {
    const NAME: &'static str = "PullRequestDescription";

    fn fields() -> Vec<Field> {
        vec![
            Field::string("title").describe("The title of the pull request."),
            Field::string("body").describe("The body of the pull request."),
            Field::list("commits", CommitPlan::fields())
                .describe(
                    "The commits that will be made in this pull request. \
                     Commits must change the code in the repository, and must not be empty.",
                )
                .on_fail(OnFail::Reask),
        ]
    }
}

impl fmt::Display for PullRequestDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}\n\n{}\n\n", self.title, self.body)?;

        for (i, commit) in self.commits.iter().enumerate() {
            let index = (i + 1).to_string();
            // Continuation lines align one column past "{index}. ".
            let prefix = " ".repeat(index.len() + 3);
            let changes_prefix = format!("\n{}  ", prefix);
            let changes = split_lines(&commit.commit_changes_description).join(&changes_prefix);

            write!(
                f,
                "{index}. Commit: {message}\n{prefix}Files: {files}\n{prefix}Changes:{changes_prefix}{changes}\n",
                index = index,
                message = commit.commit_message,
                prefix = prefix,
                files = commit.files_line(),
                changes_prefix = changes_prefix,
                changes = changes,
            )?;
        }

        Ok(())
    }
}

/// Characters that end a line in a commit description
///
/// Vertical tab, form feed, the ASCII file/group/record separators, NEL and
/// the Unicode line and paragraph separators break lines too, not only
/// `\n` and `\r`.
fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split into lines, counting `\r\n` as one break, without a trailing empty line
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(is_line_terminator) {
            Some(pos) => {
                lines.push(&rest[..pos]);
                let terminator = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    rest[pos..].chars().next().map_or(1, char::len_utf8)
                };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}
