//! Domain rail objects for pull request generation
//!
//! A [`PullRequestDescription`] owns its [`CommitPlan`]s, and each plan owns
//! the [`FileHunk`]s it refers to. Fragments compose the same way: each
//! container embeds its child's declarations as the element schema of a list.

pub mod commit_plan;
pub mod file_hunk;
pub mod pull_request;

pub use commit_plan::CommitPlan;
pub use file_hunk::FileHunk;
pub use pull_request::PullRequestDescription;

use crate::error::{Error, Result};
use crate::rail_object::RailObject;
use crate::schema::{Field, Fragment};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The registered rail objects, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RailObjectKind {
    FileHunk,
    CommitPlan,
    PullRequestDescription,
}

impl RailObjectKind {
    pub const ALL: [RailObjectKind; 3] = [
        RailObjectKind::FileHunk,
        RailObjectKind::CommitPlan,
        RailObjectKind::PullRequestDescription,
    ];

    /// Snake-case name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileHunk => "file_hunk",
            Self::CommitPlan => "commit_plan",
            Self::PullRequestDescription => "pull_request_description",
        }
    }

    /// The Rust type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::FileHunk => FileHunk::NAME,
            Self::CommitPlan => CommitPlan::NAME,
            Self::PullRequestDescription => PullRequestDescription::NAME,
        }
    }

    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::FileHunk => FileHunk::fields(),
            Self::CommitPlan => CommitPlan::fields(),
            Self::PullRequestDescription => PullRequestDescription::fields(),
        }
    }

    pub fn fragment(&self) -> Fragment {
        Fragment::new(self.fields())
    }

    pub fn output_spec(&self) -> String {
        match self {
            Self::FileHunk => FileHunk::output_spec(),
            Self::CommitPlan => CommitPlan::output_spec(),
            Self::PullRequestDescription => PullRequestDescription::output_spec(),
        }
    }

    pub fn rail_spec(&self) -> String {
        match self {
            Self::FileHunk => FileHunk::rail_spec(),
            Self::CommitPlan => CommitPlan::rail_spec(),
            Self::PullRequestDescription => PullRequestDescription::rail_spec(),
        }
    }

    /// Deserialize a value tree into this kind
    pub fn parse(&self, value: Value) -> Result<AnyRailObject> {
        Ok(match self {
            Self::FileHunk => AnyRailObject::FileHunk(FileHunk::from_value(value)?),
            Self::CommitPlan => AnyRailObject::CommitPlan(CommitPlan::from_value(value)?),
            Self::PullRequestDescription => {
                AnyRailObject::PullRequestDescription(PullRequestDescription::from_value(value)?)
            }
        })
    }
}

impl fmt::Display for RailObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RailObjectKind {
    type Err = Error;

    /// Accepts the snake-case name or the type name
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.type_name() == s)
            .ok_or_else(|| Error::UnknownRailObject {
                name: s.to_string(),
            })
    }
}

/// An instance of any registered rail object
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum AnyRailObject {
    FileHunk(FileHunk),
    CommitPlan(CommitPlan),
    PullRequestDescription(PullRequestDescription),
}

impl AnyRailObject {
    pub fn kind(&self) -> RailObjectKind {
        match self {
            Self::FileHunk(_) => RailObjectKind::FileHunk,
            Self::CommitPlan(_) => RailObjectKind::CommitPlan,
            Self::PullRequestDescription(_) => RailObjectKind::PullRequestDescription,
        }
    }
}

impl fmt::Display for AnyRailObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileHunk(hunk) => fmt::Display::fmt(hunk, f),
            Self::CommitPlan(plan) => fmt::Display::fmt(plan, f),
            Self::PullRequestDescription(pr) => fmt::Display::fmt(pr, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in RailObjectKind::ALL {
            assert_eq!(kind.as_str().parse::<RailObjectKind>().unwrap(), kind);
            assert_eq!(kind.type_name().parse::<RailObjectKind>().unwrap(), kind);
        }
        assert!(matches!(
            "commit".parse::<RailObjectKind>(),
            Err(Error::UnknownRailObject { .. })
        ));
    }

    #[test]
    fn test_kind_dispatches_to_type() {
        assert_eq!(RailObjectKind::CommitPlan.output_spec(), CommitPlan::output_spec());
        assert_eq!(
            RailObjectKind::PullRequestDescription.rail_spec(),
            PullRequestDescription::rail_spec()
        );
        assert_eq!(RailObjectKind::FileHunk.fragment(), FileHunk::fragment());
    }

    #[test]
    fn test_parse_and_render_any() {
        let any = RailObjectKind::FileHunk
            .parse(json!({"filepath": "a.py", "start_line": 5, "end_line": 9}))
            .unwrap();
        assert_eq!(any.kind(), RailObjectKind::FileHunk);
        assert_eq!(any.to_string(), "a.py:L5-L9");
        assert_eq!(
            serde_json::to_value(&any).unwrap(),
            json!({"filepath": "a.py", "start_line": 5, "end_line": 9})
        );
    }
}
