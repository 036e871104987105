mod config;
mod model;
mod parser;
mod pipeline;
mod scraper;
mod storage;
mod utils;

use config::load_or_default;
use parser::ProjectCardParser;
use crate::scraper::ScraperImpl;
use std::process::ExitCode;
use storage::RunContext;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = RunContext::for_today(&config.store_root);
    if let Err(e) = ctx.ensure_dirs() {
        error!("Failed to prepare output directories: {}", e);
        return ExitCode::FAILURE;
    }
    info!("Storing run {} under {}", ctx.date(), ctx.today_dir().display());
    debug!("Markup goes to {}", ctx.html_dir().display());

    let scraper = match ScraperImpl::new() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize http client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let parser = match ProjectCardParser::new() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to initialize parser: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let categories = config.categories();
    let summary = pipeline::run(&ctx, &categories, &scraper, &parser);

    summary.log();

    ExitCode::SUCCESS
}
