//! Check command handler

use super::utils::load_value_tree;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use railkit_core::{RailObjectKind, Violation};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    rail_object: &'a str,
    conforms: bool,
    violations: &'a [Violation],
}

/// Handle the check command
///
/// Reports every structural violation and fails with a dedicated exit code
/// when there is at least one.
#[instrument(skip(_config, output))]
pub fn handle_check(args: CheckArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let kind = RailObjectKind::from(args.rail_object);
    output.info(&format!(
        "Checking {} against {}",
        args.input.display(),
        kind.type_name()
    ))?;

    let value = load_value_tree(&args.input)?;
    let violations = match kind.parse(value) {
        Ok(_) => Vec::new(),
        Err(err @ railkit_core::Error::Deserialization { .. }) => err.violations().to_vec(),
        Err(err) => return Err(err.into()),
    };

    if output.is_human() {
        if violations.is_empty() {
            output.success(&format!("✓ Value tree conforms to {}", kind.type_name()))?;
        } else {
            output.violations(&violations)?;
        }
    } else {
        output.data(&CheckOutput {
            rail_object: kind.type_name(),
            conforms: violations.is_empty(),
            violations: &violations,
        })?;
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Nonconforming {
            rail_object: kind.type_name().to_string(),
            count: violations.len(),
        })
    }
}
