//! Mucha CLI binary.
//!
//! Command-line access to the studio's functionality:
//! - Run the caption generation service
//! - Generate a one-shot caption suggestion
//! - Manage saved profiles
//! - Render a post preview in the terminal

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_profiles_command, run_generate, run_preview, run_serve};

    // Load .env if present (GEMINI_API_KEY and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The long-running service gets the OpenTelemetry layer; one-shot
    // commands use plain fmt logging.
    if matches!(&cli.command, Commands::Serve { .. }) {
        mucha_core::init_telemetry()?;
    } else {
        let log_level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .init();
    }

    match cli.command {
        Commands::Serve { bind, model } => {
            run_serve(bind, model).await?;
        }

        Commands::Generate {
            platform,
            text,
            image,
        } => {
            run_generate(&platform, text.unwrap_or_default(), image).await?;
        }

        Commands::Profiles(profiles_cmd) => {
            handle_profiles_command(profiles_cmd).await?;
        }

        Commands::Preview {
            platform,
            text,
            profile,
            video,
        } => {
            run_preview(&platform, text.unwrap_or_default(), profile, video).await?;
        }
    }

    Ok(())
}
