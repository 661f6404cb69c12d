//! Spec command handler

use crate::cli::SpecArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use railkit_core::RailObjectKind;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct SpecOutput<'a> {
    rail_object: &'a str,
    kind: &'a str,
    content: String,
}

/// Handle the spec command
///
/// Human output is the template text itself, byte for byte, so it can be
/// redirected straight into a file for the validator.
#[instrument(skip(_config, output))]
pub fn handle_spec(args: SpecArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("spec");
    let kind = RailObjectKind::from(args.rail_object);

    let (label, content) = if args.fragment {
        ("fragment", kind.output_spec())
    } else {
        ("rail_spec", kind.rail_spec())
    };
    tracing::debug!(rail_object = %kind, kind = label, bytes = content.len(), "Built template");

    if output.is_human() {
        if args.fragment {
            output.writeln(&content)
        } else {
            output.write(&content)
        }
    } else {
        output.data(&SpecOutput {
            rail_object: kind.type_name(),
            kind: label,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, RailType};
    use crate::output::testing::buffered;
    use railkit_core::{CommitPlan, FileHunk, RailObject};

    #[test]
    fn test_human_spec_is_the_template() {
        let (mut output, buffer) = buffered(OutputFormat::Human, false);
        let args = SpecArgs {
            rail_object: RailType::FileHunk,
            fragment: false,
        };
        handle_spec(args, &Config::default(), &mut output).unwrap();
        assert_eq!(buffer.contents(), FileHunk::rail_spec());
    }

    #[test]
    fn test_human_fragment_gets_trailing_newline() {
        let (mut output, buffer) = buffered(OutputFormat::Human, false);
        let args = SpecArgs {
            rail_object: RailType::CommitPlan,
            fragment: true,
        };
        handle_spec(args, &Config::default(), &mut output).unwrap();
        assert_eq!(buffer.contents(), format!("{}\n", CommitPlan::output_spec()));
    }

    #[test]
    fn test_json_spec_output() {
        let (mut output, buffer) = buffered(OutputFormat::Json, false);
        let args = SpecArgs {
            rail_object: RailType::PullRequestDescription,
            fragment: false,
        };
        handle_spec(args, &Config::default(), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(parsed["rail_object"], "PullRequestDescription");
        assert_eq!(parsed["kind"], "rail_spec");
        assert!(parsed["content"]
            .as_str()
            .unwrap()
            .contains(&CommitPlan::output_spec()));
    }
}
