mod config;
mod directory;
mod web;

use anyhow::Result;
use tracing::info;

use crate::config::HostConfig;
use crate::directory::CorporationDirectory;
use crate::web::WebState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = HostConfig::from_env();
    let directory = match &config.directory {
        Some(path) => CorporationDirectory::load(path)?,
        None => CorporationDirectory::builtin()?,
    };
    info!("{} corporations available for search", directory.len());
    web::start_web(WebState::new(directory), config).await
}
