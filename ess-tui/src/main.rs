mod api;
mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::Result;
use api::ApiClient;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::EssConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env.ess
    dotenvy::from_filename(".env.ess").ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    match command {
        Commands::ConfigPath => {
            let path = EssConfig::config_path()?;
            if !path.exists() {
                EssConfig::default().save()?;
                println!("Created default config at {}", path.display());
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run | Commands::Dev => {
            let mut cfg = EssConfig::load()?;
            if let Some(url) = cli.api_url {
                cfg.api_url = url;
            }
            logging::init_tracing(&EssConfig::log_path()?)?;

            let dev_mode = matches!(command, Commands::Dev);
            let client = if dev_mode {
                ApiClient::dev()?
            } else {
                ApiClient::new(&cfg.api_url)?
            };
            tracing::info!(api_url = %cfg.api_url, dev_mode, "starting ess-tui");

            let mut app = App::new(&cfg, dev_mode, time_utils::today_local());
            run_terminal(&mut app, &client).await
        }
    }
}

async fn run_terminal(app: &mut App, client: &ApiClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "ess-tui exited with an error");
    }
    res
}
