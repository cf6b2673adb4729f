//! Scriptwright CLI binary.
//!
//! This binary provides command-line access to Scriptwright's functionality:
//! - Analyze a competitor video and write a replacement script
//! - Continue an existing series from its bible and last scene
//! - Suggest SEO keywords
//! - Manage the saved-script library

use clap::Parser;
use scriptwright::{LoggingConfig, ScriptwrightConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_library_command, run_analyze, run_continue, run_keywords};

    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_logging(
        &LoggingConfig::default()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.json_logs),
    )?;

    let config = ScriptwrightConfig::load_with(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Analyze(args) => run_analyze(args, &config).await?,
        Commands::Continue(args) => run_continue(args, &config).await?,
        Commands::Keywords { video } => run_keywords(&video, &config).await?,
        Commands::Library(cmd) => handle_library_command(cmd, &config).await?,
    }

    Ok(())
}
