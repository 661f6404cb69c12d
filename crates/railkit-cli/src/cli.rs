//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use railkit_core::RailObjectKind;
use std::path::PathBuf;

/// Railkit CLI - rail templates and renderings for structured LLM output
///
/// Prints the rail template a validator needs for each rail object, lists
/// declared field policies, and turns value trees returned by a validator
/// into typed objects and human-readable text.
#[derive(Parser, Debug)]
#[command(
    name = "railkit",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RAILKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full rail template (or just the fragment) for a rail object
    Spec(SpecArgs),

    /// List the declared fields of a rail object with their policies
    Fields(FieldsArgs),

    /// Build a rail object from a value tree and render it
    Render(RenderArgs),

    /// Check a value tree against a rail object's declarations
    Check(CheckArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the spec command
#[derive(Parser, Debug)]
pub struct SpecArgs {
    /// Rail object to print
    #[arg(value_enum)]
    pub rail_object: RailType,

    /// Print only the field fragment, without the rail envelope
    #[arg(long)]
    pub fragment: bool,
}

/// Arguments for the fields command
#[derive(Parser, Debug)]
pub struct FieldsArgs {
    /// Rail object to inspect
    #[arg(value_enum)]
    pub rail_object: RailType,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Rail object the value tree describes
    #[arg(value_enum)]
    pub rail_object: RailType,

    /// Path to the value tree (JSON or YAML)
    #[arg(value_name = "VALUE_TREE")]
    pub input: PathBuf,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Rail object the value tree describes
    #[arg(value_enum)]
    pub rail_object: RailType,

    /// Path to the value tree (JSON or YAML)
    #[arg(value_name = "VALUE_TREE")]
    pub input: PathBuf,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// Show the configuration file search path
    Paths,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Registered rail objects
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RailType {
    /// A file path with an optional line range
    #[value(aliases = ["file_hunk", "FileHunk"])]
    FileHunk,
    /// One planned commit
    #[value(aliases = ["commit_plan", "CommitPlan"])]
    CommitPlan,
    /// A pull request with its commits
    #[value(aliases = ["pull_request_description", "PullRequestDescription"])]
    PullRequestDescription,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<RailType> for RailObjectKind {
    fn from(rail_type: RailType) -> Self {
        match rail_type {
            RailType::FileHunk => RailObjectKind::FileHunk,
            RailType::CommitPlan => RailObjectKind::CommitPlan,
            RailType::PullRequestDescription => RailObjectKind::PullRequestDescription,
        }
    }
}

impl OutputFormat {
    /// Parse a configured format name
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
