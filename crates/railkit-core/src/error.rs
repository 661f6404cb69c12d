//! Error types for the railkit core library
//!
//! Invalid model output is never an error here: recovery is declared per
//! field through its `on-fail` policy and carried out by the external
//! validator. What remains is a value tree that does not have the shape its
//! rail object declares, and failures reported by the rail service itself.
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for railkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// The value tree does not match the rail object's field declarations
    #[error("Cannot build {type_name} from value tree: {}", format_violations(.violations))]
    Deserialization {
        type_name: &'static str,
        violations: Vec<Violation>,
    },

    /// JSON conversion errors after the structural check passed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The external rail service failed to produce a value tree
    #[error("Rail service error: {message}")]
    Service {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// A rail object name that is not registered
    #[error("Unknown rail object: {name}")]
    UnknownRailObject { name: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Violations carried by a deserialization error, empty otherwise
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Deserialization { violations, .. } => violations,
            _ => &[],
        }
    }
}

/// A single structural mismatch between a value tree and a field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Location in the value tree, e.g. `$.commits[0].commit_message`
    pub path: String,
    /// The rule that was violated
    pub rule: ViolationRule,
    /// What the declaration expects
    pub expected: String,
    /// What the value tree holds
    pub actual: String,
}

/// Structural rules checked before deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationRule {
    /// A required field is absent or null
    Required,
    /// A value has the wrong JSON type for its declaration
    Type,
}

impl fmt::Display for ViolationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Type => write!(f, "type"),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: rule '{}' violated, expected {}, but found {}",
            self.path, self.rule, self.expected, self.actual
        )
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
