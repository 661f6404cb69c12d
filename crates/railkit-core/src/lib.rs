//! Railkit Core - typed rail objects for structured LLM output
//!
//! A rail object is a Rust type that declares, next to its fields, the rail
//! output spec an external validator uses to parse, repair or re-request
//! model output for that shape.
//!
//! # Main Components
//!
//! - **Schema base**: [`schema::Field`] declarations with an `on-fail` policy
//!   each, composed into a [`schema::Fragment`] tree and wrapped by
//!   [`schema::build_rail_spec`]
//! - **Rail objects**: the [`RailObject`] trait and the pull request domain
//!   types [`FileHunk`], [`CommitPlan`] and [`PullRequestDescription`]
//! - **Rendering**: `Display` for every rail object, producing the
//!   human-readable summary of a populated value
//! - **Consumption**: [`RailObject::from_value`] with structural checks, and
//!   the [`RailService`] contract
//!
//! # Example
//!
//! ```rust
//! use railkit_core::{CommitPlan, FileHunk, OnFail, PullRequestDescription, RailObject};
//!
//! let template = PullRequestDescription::rail_spec();
//! assert!(template.contains(&CommitPlan::output_spec()));
//!
//! let policy = PullRequestDescription::field("commits").map(|f| f.on_fail);
//! assert_eq!(policy, Some(OnFail::Reask));
//!
//! let hunk = FileHunk::new("a.py").with_lines(5, 9);
//! assert_eq!(hunk.to_string(), "a.py:L5-L9");
//! ```

pub mod conformance;
pub mod error;
pub mod models;
pub mod rail_object;
pub mod schema;
pub mod service;

pub use error::{Error, Result, Violation, ViolationRule};
pub use models::{AnyRailObject, CommitPlan, FileHunk, PullRequestDescription, RailObjectKind};
pub use rail_object::RailObject;
pub use schema::{
    build_rail_spec, Field, FieldKind, Format, Fragment, Length, OnFail, COMPLETE_JSON_SUFFIX,
    RAIL_VERSION, RAW_DOCUMENT_PLACEHOLDER,
};
pub use service::{run_rail_object, RailService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
