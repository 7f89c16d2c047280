mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod runtime;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use api::ApiClient;
use app::App;
use cli::{Cli, Commands};
use config::BlogTuiConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = BlogTuiConfig::load()?;
            let client = ApiClient::new(&config.api_url)?;
            run(client).await
        }
        Commands::Dev => run(ApiClient::dev()).await,
        Commands::ConfigPath => {
            let path = BlogTuiConfig::config_path()?;
            if !path.exists() {
                BlogTuiConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run(client: ApiClient) -> Result<()> {
    let mut app = App::new();

    // Runs before the alternate screen so taxonomy warnings stay visible.
    bootstrap::initialize_app_state(&mut app, &client).await;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime::run_app(&mut terminal, &mut app, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
