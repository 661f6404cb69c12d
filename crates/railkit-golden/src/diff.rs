//! Line diffs between expected and actual snapshot text

use colored::*;
use similar::{ChangeTag, TextDiff};

/// Options for diff comparison
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Whether to use colored output
    pub colored: bool,

    /// Context lines to show around changes
    pub context_lines: usize,

    /// Maximum diff lines to show (0 = unlimited)
    pub max_diff_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            colored: true,
            context_lines: 3,
            max_diff_lines: 100,
        }
    }
}

/// Result of a diff operation
#[derive(Debug)]
pub struct DiffResult {
    /// Whether the texts are byte-identical
    pub matches: bool,

    /// Human-readable diff output
    pub diff_output: String,

    /// Summary of changes
    pub summary: DiffSummary,
}

/// Summary of diff changes
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiffSummary {
    /// Number of added lines
    pub added: usize,

    /// Number of removed lines
    pub removed: usize,
}

/// Engine for comparing snapshot text
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Compare two texts; whitespace is significant
    pub fn compare(&self, expected: &str, actual: &str) -> DiffResult {
        if expected == actual {
            return DiffResult {
                matches: true,
                diff_output: String::new(),
                summary: DiffSummary::default(),
            };
        }

        let diff = TextDiff::from_lines(expected, actual);
        let mut summary = DiffSummary::default();
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => summary.added += 1,
                ChangeTag::Delete => summary.removed += 1,
                ChangeTag::Equal => {}
            }
        }

        DiffResult {
            matches: false,
            diff_output: self.format_diff(&diff),
            summary,
        }
    }

    fn format_diff(&self, diff: &TextDiff<'_, '_, '_, str>) -> String {
        let mut output = String::new();
        let mut lines = 0;

        for group in diff.grouped_ops(self.options.context_lines) {
            for op in group {
                for change in diff.iter_changes(&op) {
                    if self.options.max_diff_lines > 0 && lines >= self.options.max_diff_lines {
                        output.push_str("... (diff truncated)\n");
                        return output;
                    }

                    let (sign, line) = match change.tag() {
                        ChangeTag::Delete => ("-", format!("-{}", visible(change.value()))),
                        ChangeTag::Insert => ("+", format!("+{}", visible(change.value()))),
                        ChangeTag::Equal => (" ", format!(" {}", visible(change.value()))),
                    };

                    let line = if self.options.colored {
                        match sign {
                            "-" => line.red().to_string(),
                            "+" => line.green().to_string(),
                            _ => line.dimmed().to_string(),
                        }
                    } else {
                        line
                    };

                    output.push_str(&line);
                    output.push('\n');
                    lines += 1;
                }
            }
        }

        output
    }
}

/// Make trailing whitespace and missing final newlines visible in a diff line
fn visible(value: &str) -> String {
    match value.strip_suffix('\n') {
        Some(body) if body.ends_with(' ') => format!("{}⏎", body),
        Some(body) => body.to_string(),
        None => format!("{}␄", value),
    }
}
