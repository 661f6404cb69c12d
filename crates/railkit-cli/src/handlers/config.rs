//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Paths => handle_config_paths(config, output),
    }
}

/// Print the effective configuration
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)? + "\n",
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    if let Some(source) = &config.source {
        output.info(&format!("Loaded from {}", source.display()))?;
    }
    output.write(&content)
}

/// List the configuration search path, marking files that exist
fn handle_config_paths(config: &Config, output: &mut OutputWriter) -> Result<()> {
    let rows = Config::default_config_paths()
        .into_iter()
        .map(|path| {
            let status = if config.source.as_deref() == Some(path.as_path()) {
                "loaded"
            } else if path.exists() {
                "found"
            } else {
                "-"
            };
            vec![path.display().to_string(), status.to_string()]
        })
        .collect::<Vec<_>>();

    if output.is_human() {
        output.table(&["path", "status"], rows)
    } else {
        let paths: Vec<&String> = rows.iter().map(|row| &row[0]).collect();
        output.data(&paths)
    }
}
