//! Schema base: field registry, fragment tree and rail envelope
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

pub mod field;
pub mod fragment;
pub mod template;

pub use field::{Field, FieldKind, Format, Length, OnFail};
pub use fragment::{escape_attribute, FieldEntry, Fragment};
pub use template::{build_rail_spec, COMPLETE_JSON_SUFFIX, RAIL_VERSION, RAW_DOCUMENT_PLACEHOLDER};
