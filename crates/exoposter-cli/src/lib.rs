//! CLI logic for the exoposter tool.
//!
//! This module contains the core CLI logic: configuration loading, command
//! dispatch and writing the results.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, RenderArgs, StatsArgs};

use std::fs;

use chrono::Local;
use log::info;

use exoposter::{ExopError, PosterBuilder, config::AppConfig};

/// Creation date shown on posters and reports, e.g. `Oct 2026`.
fn creation_date() -> String {
    Local::now().format("%b %Y").to_string()
}

fn with_catalog_root(config: AppConfig, catalog: Option<&String>) -> AppConfig {
    match catalog {
        Some(root) => {
            let catalog = config.catalog().clone().with_root(root);
            config.with_catalog(catalog)
        }
        None => config,
    }
}

/// Run the exoposter CLI application
///
/// # Errors
///
/// Returns `ExopError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Catalog loading errors
/// - Selection and rendering errors
pub fn run(args: &Args) -> Result<(), ExopError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Render(render) => run_render(render, app_config),
        Command::Stats(stats) => run_stats(stats, app_config),
    }
}

fn run_render(args: &RenderArgs, config: AppConfig) -> Result<(), ExopError> {
    let config = with_catalog_root(config, args.catalog.as_ref());
    let page_size = args.page_size.unwrap_or(config.poster().page_size());

    info!(
        poster:% = args.kind,
        page_size:% = page_size,
        catalog:? = config.catalog().root(),
        output_path = args.output;
        "Rendering poster"
    );

    let builder = PosterBuilder::new(config);
    let svg = builder.render_poster(args.kind, page_size, &creation_date())?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

fn run_stats(args: &StatsArgs, config: AppConfig) -> Result<(), ExopError> {
    let config = with_catalog_root(config, args.catalog.as_ref());
    info!(catalog:? = config.catalog().root(); "Summarizing catalog");

    let stats = PosterBuilder::new(config).catalog_statistics()?;
    let report = stats.to_markdown(&creation_date());

    match &args.output {
        Some(path) => {
            fs::write(path, report)?;
            info!(output_file = path; "Report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}
