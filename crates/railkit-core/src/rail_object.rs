//! The schema base contract every structured-output type implements
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

use crate::conformance;
use crate::error::{Error, Result};
use crate::schema::{build_rail_spec, Field, Fragment};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

/// A typed structure that also declares the rail output spec for its shape
///
/// Everything except [`RailObject::NAME`] and [`RailObject::fields`] is
/// derived. All of it is a property of the type: no instance is needed to
/// build a fragment or a template.
///
/// Implementors embed a child type by calling the child's `fields()` inside
/// their own declarations. Fragments are rebuilt from `fields()` on every
/// call, so a changed child declaration always reaches its ancestors.
pub trait RailObject: DeserializeOwned {
    /// Type name used in diagnostics and lookups
    const NAME: &'static str;

    /// Field declarations in declaration order
    fn fields() -> Vec<Field>;

    /// The declarations as a fragment tree
    fn fragment() -> Fragment {
        Fragment::new(Self::fields())
    }

    /// Serialized fragment, ready to be embedded or wrapped
    fn output_spec() -> String {
        Self::fragment().render()
    }

    /// Complete rail template for this type
    fn rail_spec() -> String {
        let spec = build_rail_spec(&Self::fragment());
        debug!(rail_object = Self::NAME, bytes = spec.len(), "Built rail spec");
        spec
    }

    /// Look up a declaration by dotted path, e.g. `commits.commit_message`
    fn field(path: &str) -> Option<Field> {
        Self::fragment().field(path).cloned()
    }

    /// Build an instance from a value tree returned by the rail service
    ///
    /// The tree is checked against the declarations first; any structural
    /// violation is fatal and reported in full.
    fn from_value(value: Value) -> Result<Self> {
        let violations = conformance::check(&Self::fields(), &value);
        if !violations.is_empty() {
            debug!(
                rail_object = Self::NAME,
                violations = violations.len(),
                "Value tree does not conform to declarations"
            );
            return Err(Error::Deserialization {
                type_name: Self::NAME,
                violations,
            });
        }

        trace!(rail_object = Self::NAME, "Deserializing conforming value tree");
        serde_json::from_value(value).map_err(|source| Error::Json {
            message: format!("failed to deserialize {}", Self::NAME),
            source,
        })
    }
}
