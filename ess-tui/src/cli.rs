use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ess-tui")]
#[command(about = "Terminal form for updating ESS date columns")]
pub struct Cli {
    /// Override the configured ESS base URL for this run
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Commands {
    /// Run against a real ESS service (default)
    Run,
    /// Run with a local in-memory backend
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
