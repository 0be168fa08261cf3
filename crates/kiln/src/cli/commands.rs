//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use kiln_core::Category;
use std::path::PathBuf;

/// Generate creative React components with a local LLM.
#[derive(Parser, Debug)]
#[command(name = "kiln")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file; environment variables still take precedence
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one component from a description
    Generate {
        /// Natural-language component description
        description: String,

        /// Component category
        #[arg(short, long, default_value_t = Category::default().to_string())]
        category: String,

        /// Component name (PascalCase); inferred from the description if omitted
        #[arg(short, long)]
        name: Option<String>,

        /// Reference page to fetch and include in the prompt
        #[arg(short, long)]
        url: Option<String>,

        /// Reference image URL the component should use
        #[arg(short, long)]
        image: Option<String>,
    },

    /// List generated components from the manifest
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print the supported categories
    Categories,

    /// Chat with the model interactively (reads stdin until EOF)
    Chat,
}
