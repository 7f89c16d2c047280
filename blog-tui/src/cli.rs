use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "blog-tui")]
#[command(about = "Terminal search UI for the blog article scraper")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search against a real scraper backend
    Run,
    /// Run with local in-memory sample data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
