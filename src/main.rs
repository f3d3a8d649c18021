use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use babaru_client::config::ApiConfig;
use babaru_client::services::chat_client::ChatClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ApiConfig::from_env();
    let client = ChatClient::new(config);

    // One-shot mode: message passed as argument.
    if let Some(message) = std::env::args().nth(1) {
        let reply = client.speak(&message).await;
        println!("Babaru: {reply}");
        return Ok(());
    }

    println!("--- Babaru Terminal Interface (exit to quit) ---");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = client.speak(input).await;
        println!("Babaru: {reply}");
    }

    println!("Babaru: Leaving so soon? Typical.");
    Ok(())
}
