//! Kiln command-line entry point.

mod cli;

use clap::Parser;
use cli::{
    Cli, Commands, handle_categories_command, handle_chat_command, handle_generate_command,
    handle_list_command,
};
use kiln::{KilnConfig, init_tracing};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration file");
            KilnConfig::from_file(path)?.with_overrides(|key| std::env::var(key).ok())?
        }
        None => KilnConfig::from_env()?,
    };
    debug!(
        base_url = %config.base_url(),
        model = %config.model(),
        root = %config.root().display(),
        "Configuration resolved"
    );

    match cli.command {
        Commands::Generate {
            description,
            category,
            name,
            url,
            image,
        } => {
            handle_generate_command(&config, description, category, name, url, image).await?;
        }
        Commands::List { category } => handle_list_command(&config, category).await?,
        Commands::Categories => handle_categories_command(),
        Commands::Chat => handle_chat_command(&config).await?,
    }

    Ok(())
}
