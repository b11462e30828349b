//! Clap command structures.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mucha: AI-assisted social post studio.
#[derive(Parser, Debug)]
#[command(author, version, about = "Mucha social post studio", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the caption generation service
    Serve {
        /// Socket address to bind (overrides MUCHA_BIND_ADDR)
        #[arg(short, long)]
        bind: Option<String>,

        /// Model to generate with (overrides MUCHA_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Generate a one-shot caption suggestion
    Generate {
        /// Target platform: instagram or facebook
        #[arg(short, long)]
        platform: String,

        /// Draft text to transform
        #[arg(short, long)]
        text: Option<String>,

        /// Path to an image file to attach
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Manage saved profiles
    #[command(subcommand)]
    Profiles(ProfilesCommand),

    /// Render a post preview in the terminal
    Preview {
        /// Target platform: instagram or facebook
        #[arg(short, long)]
        platform: String,

        /// Draft text to preview
        #[arg(short, long)]
        text: Option<String>,

        /// Display name of the profile to preview as (defaults to the first)
        #[arg(long)]
        profile: Option<String>,

        /// Local URL of a video to show attached
        #[arg(long)]
        video: Option<String>,
    },
}

/// Profile management commands.
#[derive(Subcommand, Debug)]
pub enum ProfilesCommand {
    /// List saved profiles in insertion order
    List,

    /// Add a profile or update one with the same display name
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Avatar image URL
        #[arg(long, default_value = "")]
        avatar: String,

        /// Facebook page URL
        #[arg(long, default_value = "")]
        facebook: String,

        /// Instagram handle without the '@'
        #[arg(long, default_value = "")]
        instagram: String,

        /// Accent color tag
        #[arg(long, default_value = "#6b7280")]
        color: String,
    },
}
