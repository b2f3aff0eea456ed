use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    AddCommand, ConfigCommand, DeleteCommand, EditCommand, ListCommand, ShellCommand,
};
use config::Config;
use todo_list::{HttpStore, ItemListSynchronizer};

#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "Manage todo items on a remote todo API", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Base address of the todo API (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all todo items
    List(ListCommand),

    /// Add a todo item
    Add(AddCommand),

    /// Edit a todo item
    Edit(EditCommand),

    /// Delete a todo item
    Delete(DeleteCommand),

    /// Interactive todo page (default)
    Shell(ShellCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_list=warn,todo=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for config show
    let cli_config_path = cli.config.clone();

    // Load configuration
    let config = Config::load(cli.config)?.with_api_url(cli.api_url);
    tracing::debug!("Using todo API at {}", config.api_url.value);

    if let Some(Commands::Config(cmd)) = &cli.command {
        return cmd.run(&config, cli_config_path);
    }

    let store = HttpStore::new(config.api_url.value.clone());
    let mut sync = ItemListSynchronizer::with_notice_ttl(store, config.notice_ttl());

    match cli.command {
        Some(Commands::List(cmd)) => cmd.run(&mut sync).await?,
        Some(Commands::Add(cmd)) => cmd.run(&mut sync).await?,
        Some(Commands::Edit(cmd)) => cmd.run(&mut sync).await?,
        Some(Commands::Delete(cmd)) => cmd.run(&mut sync).await?,
        Some(Commands::Shell(cmd)) => cmd.run(&mut sync).await?,
        Some(Commands::Config(_)) => {}
        None => ShellCommand::default().run(&mut sync).await?,
    }

    Ok(())
}
