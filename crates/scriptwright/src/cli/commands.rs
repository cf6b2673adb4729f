//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scriptwright - competitive-analysis and series-continuation scripts for short-form video
#[derive(Parser, Debug)]
#[command(name = "scriptwright")]
#[command(about = "Generate production-ready short-form video scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, layered over the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a competitor video and write a superior script
    Analyze(AnalyzeArgs),

    /// Write the next episode of an existing series
    Continue(ContinueArgs),

    /// Suggest SEO keywords for a reference video
    Keywords {
        /// Reference video identifier or URL
        #[arg(long)]
        video: String,
    },

    /// Saved-script library commands
    #[command(subcommand)]
    Library(LibraryCommands),
}

/// Arguments shared by both generation modes
#[derive(Args, Debug, Clone)]
pub struct ProductionArgs {
    /// Target video length in minutes
    #[arg(long, default_value = "5")]
    pub minutes: u32,

    /// Genre label; a label containing "3d" selects 3D animation style
    #[arg(long)]
    pub genre: String,

    /// Language of all dialogue
    #[arg(long = "language")]
    pub dialogue_language: String,

    /// Narration voice description
    #[arg(long)]
    pub voice: String,

    /// Save the result to the library
    #[arg(long)]
    pub save: bool,

    /// Write the result JSON to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Fresh-analysis arguments
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Reference video identifier or URL
    #[arg(long)]
    pub video: String,

    /// Your own channel, used as a style reference
    #[arg(long)]
    pub channel: Option<String>,

    /// Style reference image (repeatable)
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,

    /// How the new script should beat the reference
    #[arg(long)]
    pub angle: String,

    /// Keyword the SEO block must target (repeatable)
    #[arg(long = "target-keyword")]
    pub target_keywords: Vec<String>,

    /// Keyword offered for reference only (repeatable)
    #[arg(long = "suggested-keyword")]
    pub suggested_keywords: Vec<String>,

    /// Production parameters
    #[command(flatten)]
    pub production: ProductionArgs,
}

/// Continuation arguments
#[derive(Args, Debug, Clone)]
pub struct ContinueArgs {
    /// Saved result whose bible and last scene seed the new episode
    #[arg(long, conflicts_with_all = ["bible", "last_scene"])]
    pub from: Option<String>,

    /// Series bible JSON file
    #[arg(long, required_unless_present = "from")]
    pub bible: Option<PathBuf>,

    /// File holding the last scene of the previous episode
    #[arg(long, required_unless_present = "from")]
    pub last_scene: Option<PathBuf>,

    /// Topic of the new episode
    #[arg(long)]
    pub topic: String,

    /// Production parameters
    #[command(flatten)]
    pub production: ProductionArgs,
}

/// Library subcommands
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// List saved results, most recent first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show a saved result
    Show {
        /// Result id
        id: String,
    },

    /// Delete a saved result
    Delete {
        /// Result id
        id: String,
    },

    /// Print the series bible of a saved result
    Bible {
        /// Result id
        id: String,
    },

    /// Print the last scene of a saved result
    LastScene {
        /// Result id
        id: String,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
    /// Ids only (for scripting)
    IdOnly,
}
