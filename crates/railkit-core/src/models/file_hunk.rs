//! A reference to a file, optionally narrowed to a line range

use crate::rail_object::RailObject;
use crate::schema::{Field, Format, OnFail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A file path with an optional line range
///
/// Line numbers are kept signed: the validator accepts out-of-range values
/// as-is under the `noop` policy, and they must still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHunk {
    pub filepath: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
}

impl FileHunk {
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            start_line: None,
            end_line: None,
        }
    }

    pub fn with_start_line(mut self, line: i64) -> Self {
        self.start_line = Some(line);
        self
    }

    pub fn with_end_line(mut self, line: i64) -> Self {
        self.end_line = Some(line);
        self
    }

    pub fn with_lines(self, start: i64, end: i64) -> Self {
        self.with_start_line(start).with_end_line(end)
    }
}

impl RailObject for FileHunk {
    const NAME: &'static str = "FileHunk";

    fn fields() -> Vec<Field> {
        vec![
            Field::string("filepath")
                .describe("The path to the file we are looking at.")
                .format(Format::Filepath)
                .on_fail(OnFail::Fix),
            Field::integer("start_line")
                .describe("The line number of the first line of the hunk.")
                .format(Format::Positive)
                .optional()
                .on_fail(OnFail::Noop),
            Field::integer("end_line")
                .describe("The line number of the last line of the hunk.")
                .format(Format::Positive)
                .optional()
                .on_fail(OnFail::Noop),
        ]
    }
}

/// `path`, `path:L5` or `path:L5-L9`
///
/// An end line without a start line carries no usable range, so it renders
/// as the bare path.
impl fmt::Display for FileHunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filepath)?;
        if let Some(start) = self.start_line {
            write!(f, ":L{}", start)?;
            if let Some(end) = self.end_line {
                write!(f, "-L{}", end)?;
            }
        }
        Ok(())
    }
}
