//! Railkit CLI - command-line access to rail templates and renderings
//!
//! Prints the rail template for each registered rail object, lists declared
//! field policies, and checks or renders value trees produced by an external
//! validator.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Configuration feeds the logging setup, so it is loaded first
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli, &config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &error::Error) -> ! {
    eprintln!("{}", error::format_error(e, control::SHOULD_COLORIZE.should_colorize()));

    if e.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(e.exit_code());
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = resolve_output_format(cli.output, config);
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);
    let mut output = OutputWriter::new(format, use_color, cli.quiet, cli.verbosity_level());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        config_source = ?config.source,
        "Executing command"
    );

    match cli.command {
        Commands::Spec(args) => handlers::handle_spec(args, config, &mut output),
        Commands::Fields(args) => handlers::handle_fields(args, config, &mut output),
        Commands::Render(args) => handlers::handle_render(args, config, &mut output),
        Commands::Check(args) => handlers::handle_check(args, config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args, &mut output),
    }
}

/// The -o flag wins over the configured format; an unknown configured
/// format falls back to human output.
fn resolve_output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| match OutputFormat::from_name(&config.output.format) {
        Some(format) => format,
        None => {
            tracing::warn!(format = %config.output.format, "Unknown output format in configuration");
            OutputFormat::Human
        }
    })
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_settings(&config.logging, cli.verbosity_level());

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["railkit", "-vv", "spec", "file-hunk"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["railkit", "--quiet", "check", "commit_plan", "tree.json"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_output_format_resolution() {
        let mut config = Config::default();
        assert_eq!(resolve_output_format(None, &config), OutputFormat::Human);

        config.output.format = "yaml".to_string();
        assert_eq!(resolve_output_format(None, &config), OutputFormat::Yaml);
        assert_eq!(
            resolve_output_format(Some(OutputFormat::Json), &config),
            OutputFormat::Json
        );

        config.output.format = "xml".to_string();
        assert_eq!(resolve_output_format(None, &config), OutputFormat::Human);
    }
}
