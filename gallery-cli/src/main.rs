mod app;
mod args;
mod command;
mod paths;
mod render;

use std::fs;
use std::fs::File;
use std::time::Duration;

use clap::Parser;
use gallery_lib::ArticClient;
use log::LevelFilter;
use simplelog::Config;
use simplelog::WriteLogger;
use thiserror::Error;

use crate::app::App;
use crate::args::Args;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] gallery_lib::error::Error),
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Logs go to the cache directory so they never mix with the table output.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => eprintln!("Warning: cannot write log file {}: {}", path.display(), e),
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let client = ArticClient::builder()
        .base_url(&args.base_url)
        .timeout(Duration::from_secs(args.timeout))
        .connect_timeout(Duration::from_secs(args.timeout.min(10)))
        .build()?;

    log::info!(
        "Browsing {} with {} records per page",
        client.base_url(),
        args.page_size
    );

    App::run(client, args.page_size, args.start_page).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.log_level);

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
