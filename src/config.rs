//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "agenda-timer")]
#[command(about = "A single-screen terminal timer for presenting a fixed daily agenda")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Path to a JSON agenda file (defaults to the built-in schedule)
    #[arg(short, long)]
    pub agenda: Option<PathBuf>,

    /// Start with the light theme
    #[arg(long)]
    pub light: bool,

    /// File the session log is written to
    #[arg(long, default_value = "agenda-timer.log")]
    pub log_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
