//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the kiln binary.

mod chat;
mod commands;
mod generate;
mod list;

pub use chat::handle_chat_command;
pub use commands::{Cli, Commands};
pub use generate::handle_generate_command;
pub use list::{handle_categories_command, handle_list_command};
