//! Command handlers for CLI subcommands
//!
//! Each handler takes its parsed arguments, the loaded configuration and the
//! output writer, and writes everything it produces through the writer.

mod check;
mod completions;
mod config;
mod fields;
mod render;
mod spec;
mod utils;

pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config;
pub use fields::handle_fields;
pub use render::handle_render;
pub use spec::handle_spec;
