//! Render command handler

use super::utils::load_value_tree;
use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use railkit_core::{AnyRailObject, RailObjectKind};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct RenderOutput<'a> {
    rail_object: &'a str,
    value: &'a AnyRailObject,
    rendered: String,
}

/// Handle the render command
#[instrument(skip(_config, output))]
pub fn handle_render(args: RenderArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("render", &args.input.display().to_string());
    let kind = RailObjectKind::from(args.rail_object);

    let value = load_value_tree(&args.input)?;
    let object = kind.parse(value)?;
    let rendered = object.to_string();

    if output.is_human() {
        output.writeln(&rendered)
    } else {
        output.data(&RenderOutput {
            rail_object: kind.type_name(),
            value: &object,
            rendered,
        })
    }
}
