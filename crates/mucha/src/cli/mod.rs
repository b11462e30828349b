//! CLI command definitions and handlers.

mod commands;
mod run;

pub use commands::{Cli, Commands, ProfilesCommand};
pub use run::{handle_profiles_command, run_generate, run_preview, run_serve};
