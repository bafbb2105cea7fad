use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use taskdeck::api::{ApiClient, HttpProjectService, StoredTokenProvider};
use taskdeck::core::config;
use taskdeck::tui;

#[derive(Parser)]
#[command(name = "taskdeck", about = "Terminal client for the project service")]
struct Args {
    /// Route to open on startup (e.g. /projects)
    #[arg(short, long)]
    route: Option<String>,

    /// API base address, overriding config file and env vars
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to taskdeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("taskdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("taskdeck: {e}");
            return Ok(());
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.route.as_deref());

    log::info!(
        "Taskdeck starting up (route: {}, base address configured: {})",
        resolved.start_route,
        resolved.base_url.is_some()
    );

    let credentials = Arc::new(StoredTokenProvider::new(
        StoredTokenProvider::default_token_path(),
        resolved.dev_token.clone(),
    ));
    let client = ApiClient::new(resolved.base_url.clone(), credentials);
    let service = Arc::new(HttpProjectService::new(client));

    tui::run(resolved, service)
}
