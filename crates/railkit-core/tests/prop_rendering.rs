//! Property-based tests for fragments and rendering

use proptest::prelude::*;
use railkit_core::{CommitPlan, FileHunk, PullRequestDescription, RailObject};
use serde_json::{json, Value};

fn hunk_strategy() -> impl Strategy<Value = FileHunk> {
    (
        "[a-z][a-z0-9_/]{0,20}\\.rs",
        proptest::option::of(1i64..10_000),
        proptest::option::of(1i64..10_000),
    )
        .prop_map(|(filepath, start_line, end_line)| FileHunk {
            filepath,
            start_line,
            end_line,
        })
}

fn commit_strategy() -> impl Strategy<Value = CommitPlan> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,40}",
        proptest::collection::vec(hunk_strategy(), 0..4),
        proptest::collection::vec("- [a-z ]{1,30}", 0..5),
    )
        .prop_map(|(message, hunks, lines)| CommitPlan {
            commit_message: message,
            relevant_file_hunks: hunks,
            commit_changes_description: lines.join("\n"),
        })
}

fn pull_request_strategy() -> impl Strategy<Value = PullRequestDescription> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,40}",
        "[A-Za-z0-9 .]{0,80}",
        proptest::collection::vec(commit_strategy(), 0..14),
    )
        .prop_map(|(title, body, commits)| PullRequestDescription {
            title,
            body,
            commits,
        })
}

fn hunk_tree(hunk: &FileHunk) -> Value {
    let mut tree = json!({"filepath": hunk.filepath});
    if let Some(start) = hunk.start_line {
        tree["start_line"] = json!(start);
    }
    if let Some(end) = hunk.end_line {
        tree["end_line"] = json!(end);
    }
    tree
}

fn pull_request_tree(pr: &PullRequestDescription) -> Value {
    json!({
        "title": pr.title,
        "body": pr.body,
        "commits": pr.commits.iter().map(|c| json!({
            "commit_message": c.commit_message,
            "relevant_file_hunks": c.relevant_file_hunks.iter().map(hunk_tree).collect::<Vec<_>>(),
            "commit_changes_description": c.commit_changes_description,
        })).collect::<Vec<_>>(),
    })
}

#[test]
fn fragments_are_idempotent() {
    for _ in 0..3 {
        assert_eq!(FileHunk::output_spec(), FileHunk::output_spec());
        assert_eq!(CommitPlan::rail_spec(), CommitPlan::rail_spec());
        assert_eq!(PullRequestDescription::fragment(), PullRequestDescription::fragment());
    }
}

proptest! {
    #[test]
    fn value_tree_and_direct_instances_render_identically(pr in pull_request_strategy()) {
        let parsed = PullRequestDescription::from_value(pull_request_tree(&pr)).unwrap();
        prop_assert_eq!(&parsed, &pr);
        prop_assert_eq!(parsed.to_string(), pr.to_string());
    }

    #[test]
    fn commit_blocks_are_numbered_and_aligned(pr in pull_request_strategy()) {
        let text = pr.to_string();
        let header = format!("Title: {}\n\n{}\n\n", pr.title, pr.body);
        prop_assert!(text.starts_with(&header));

        for (i, commit) in pr.commits.iter().enumerate() {
            let index = (i + 1).to_string();
            let prefix = " ".repeat(index.len() + 3);
            let block = format!(
                "{}. Commit: {}\n{}Files: {}\n{}Changes:",
                index,
                commit.commit_message,
                prefix,
                commit.files_line(),
                prefix
            );
            prop_assert!(text.contains(&block));
        }
    }

    #[test]
    fn file_hunk_rendering_starts_with_path(hunk in hunk_strategy()) {
        let text = hunk.to_string();
        prop_assert!(text.starts_with(&hunk.filepath));
        prop_assert_eq!(text.contains(":L"), hunk.start_line.is_some());
        prop_assert_eq!(
            text.contains("-L"),
            hunk.start_line.is_some() && hunk.end_line.is_some()
        );
    }
}
