//! The rail envelope that turns a fragment into a complete template
//!
//! The envelope carries two protocol tokens shared with the external
//! validator: the placeholder it substitutes with the raw document, and the
//! trailing directive asking for well-formed JSON output.
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

use crate::schema::fragment::Fragment;

/// Version attribute of the `<rail>` root element
pub const RAIL_VERSION: &str = "0.1";

/// Placeholder the validator replaces with the raw input text
pub const RAW_DOCUMENT_PLACEHOLDER: &str = "{{raw_document}}";

/// Trailing directive telling the validator to produce structured output
pub const COMPLETE_JSON_SUFFIX: &str = "@complete_json_suffix_v2";

/// Wrap a fragment in the rail envelope
///
/// ```rust
/// use railkit_core::schema::{build_rail_spec, Field, Fragment, COMPLETE_JSON_SUFFIX};
///
/// let spec = build_rail_spec(&Fragment::new(vec![Field::string("title")]));
/// assert!(spec.contains("<output>\n<string\n    name=\"title\""));
/// assert!(spec.contains(COMPLETE_JSON_SUFFIX));
/// ```
pub fn build_rail_spec(fragment: &Fragment) -> String {
    format!(
        "\n<rail version=\"{version}\">\n<output>\n{fragment}\n</output>\n<prompt>\n```\n{placeholder}\n```\n\n{suffix}\n</prompt>\n</rail>\n",
        version = RAIL_VERSION,
        fragment = fragment.render(),
        placeholder = RAW_DOCUMENT_PLACEHOLDER,
        suffix = COMPLETE_JSON_SUFFIX,
    )
}
