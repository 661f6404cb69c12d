//! Field declarations: the inspectable registry behind every fragment
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy the external validator applies when a field fails its constraints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnFail {
    /// Attempt an automatic repair
    Fix,
    /// Accept the value as-is
    #[default]
    Noop,
    /// Ask the model again
    Reask,
    /// Reserved by the validator protocol
    Skip,
}

impl OnFail {
    /// Attribute value used in the rail template
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Noop => "noop",
            Self::Reask => "reask",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for OnFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named format validators understood by the external validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// A path to a file
    Filepath,
    /// A positive integer
    Positive,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filepath => "filepath",
            Self::Positive => "positive",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive length bounds for string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Length {
    pub min: usize,
    pub max: usize,
}

impl Length {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.min, self.max)
    }
}

/// Semantic type of a declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    /// A single nested object with its own fields
    Object(Vec<Field>),
    /// An open-ended list whose elements all share one object schema
    List(Vec<Field>),
}

impl FieldKind {
    /// Element name used in the rail template
    pub fn tag(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Object(_) => "object",
            Self::List(_) => "list",
        }
    }

    /// Child declarations for object and list kinds
    pub fn children(&self) -> Option<&[Field]> {
        match self {
            Self::Object(fields) | Self::List(fields) => Some(fields),
            Self::String | Self::Integer => None,
        }
    }
}

/// A single field declaration
///
/// Declarations are authored once per rail object and never change at
/// runtime. Every field carries exactly one [`OnFail`] policy; a field that
/// does not name one gets [`OnFail::Noop`].
///
/// ```rust
/// use railkit_core::schema::{Field, Format, OnFail};
///
/// let field = Field::integer("start_line")
///     .describe("The line number of the first line of the hunk.")
///     .format(Format::Positive)
///     .optional()
///     .on_fail(OnFail::Noop);
///
/// assert!(!field.required);
/// assert_eq!(field.kind.tag(), "integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: Option<&'static str>,
    pub format: Option<Format>,
    pub length: Option<Length>,
    pub required: bool,
    pub on_fail: OnFail,
}

impl Field {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            description: None,
            format: None,
            length: None,
            required: true,
            on_fail: OnFail::default(),
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// A nested object field whose schema is `fields`
    pub fn object(name: &'static str, fields: Vec<Field>) -> Self {
        Self::new(name, FieldKind::Object(fields))
    }

    /// A list field whose element schema is `element`
    pub fn list(name: &'static str, element: Vec<Field>) -> Self {
        Self::new(name, FieldKind::List(element))
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.length = Some(Length::new(min, max));
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn on_fail(mut self, policy: OnFail) -> Self {
        self.on_fail = policy;
        self
    }

    /// Child declarations for object and list fields
    pub fn children(&self) -> Option<&[Field]> {
        self.kind.children()
    }
}
