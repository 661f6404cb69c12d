//! Contract with the external rail service
//!
//! The service owns the prompt, the model call, parsing, and the `fix` /
//! `noop` / `reask` recovery declared in a template. This crate only hands it
//! a template and a raw document and turns whatever tree comes back into a
//! typed value.
//!
//! Copyright (c) 2025 Railkit Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::rail_object::RailObject;
use serde_json::Value;
use tracing::{debug, warn};

/// An external validator that runs a rail template over a raw document
pub trait RailService {
    /// Run `rail_spec` with its raw-document placeholder bound to `raw_document`
    ///
    /// Returns `Ok(None)` when the service gave up, for instance after
    /// exhausting its re-ask budget.
    fn run_rail(&self, rail_spec: &str, raw_document: &str) -> anyhow::Result<Option<Value>>;
}

impl<S: RailService + ?Sized> RailService for &S {
    fn run_rail(&self, rail_spec: &str, raw_document: &str) -> anyhow::Result<Option<Value>> {
        (**self).run_rail(rail_spec, raw_document)
    }
}

impl<S: RailService + ?Sized> RailService for Box<S> {
    fn run_rail(&self, rail_spec: &str, raw_document: &str) -> anyhow::Result<Option<Value>> {
        (**self).run_rail(rail_spec, raw_document)
    }
}

/// Run `T`'s template through `service` and deserialize the result
pub fn run_rail_object<T, S>(service: &S, raw_document: &str) -> Result<Option<T>>
where
    T: RailObject,
    S: RailService + ?Sized,
{
    let rail_spec = T::rail_spec();
    debug!(
        rail_object = T::NAME,
        document_bytes = raw_document.len(),
        "Running rail service"
    );

    let value = service
        .run_rail(&rail_spec, raw_document)
        .map_err(|source| Error::Service {
            message: format!("rail service failed for {}", T::NAME),
            source,
        })?;

    match value {
        Some(value) => T::from_value(value).map(Some),
        None => {
            warn!(rail_object = T::NAME, "Rail service returned no output");
            Ok(None)
        }
    }
}
