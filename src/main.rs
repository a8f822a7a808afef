mod client;
mod clipboard;
mod config;
mod error;
mod models;
mod watcher;

use client::CompletionClient;
use clipboard::SystemClipboard;
use config::Config;
use tracing::{error, info};
use watcher::{POLL_INTERVAL, Watcher};

#[tokio::main]
async fn main() {

    tracing_subscriber::fmt::init();

    // the key may already be set by the hosting environment
    if dotenvy::dotenv().is_err() {
        info!("no .env file found, reading configuration from the process environment");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let clipboard = match SystemClipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            error!(error = %e, "clipboard unavailable");
            std::process::exit(1);
        }
    };

    // one shared HTTP client for every completion call
    let client = CompletionClient::new(reqwest::Client::new(), &config);

    let mut watcher = Watcher::new(clipboard, client);

    // only a clipboard read failure ends the loop
    if let Err(e) = watcher.run(POLL_INTERVAL).await {
        error!(error = %e, "clipboard read failed");
        std::process::exit(1);
    }

}
