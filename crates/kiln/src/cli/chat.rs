//! Interactive chat loop.

use kiln::{ChatSession, KilnConfig, KilnResult, build_client};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

/// Reads lines from stdin and prints each model reply until EOF.
///
/// A failed turn is reported and the loop continues.
pub async fn handle_chat_command(config: &KilnConfig) -> KilnResult<()> {
    let mut session = ChatSession::new(build_client(config)?, config.generation_settings());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Kiln chat ({} @ {})", config.model(), config.base_url());
    println!("Type a message and press Enter. Ctrl-D to exit.\n");
    info!("Chat session started");

    loop {
        print!(">>> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "Failed to read input");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match session.send(&line).await {
            Ok(reply) => println!("{}\n", reply),
            Err(e) => {
                error!(error = %e, "Chat turn failed");
                eprintln!("Request failed: {}", e);
            }
        }
    }

    println!("\nExiting.");
    Ok(())
}
