//! Command-line argument definitions for the exoposter CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand picks the action; global flags select the
//! configuration file and logging verbosity.

use clap::{Parser, Subcommand};

use exoposter::{poster::PosterKind, scene::PageSize};

/// Command-line arguments for the exoposter tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a poster to an SVG file
    Render(RenderArgs),

    /// Print a Markdown summary of the catalog
    Stats(StatsArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Poster to render (earthlike-distance, planet-sizes, calibration)
    pub kind: PosterKind,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Page size (A0 to A5), overrides the configured one
    #[arg(short, long)]
    pub page_size: Option<PageSize>,

    /// Catalog root directory, overrides the configured one
    #[arg(long)]
    pub catalog: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Catalog root directory, overrides the configured one
    #[arg(long)]
    pub catalog: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let args = Args::try_parse_from([
            "exoposter",
            "render",
            "planet-sizes",
            "-o",
            "sizes.svg",
            "--page-size",
            "a3",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Render(render) => {
                assert_eq!(render.kind, PosterKind::PlanetSizes);
                assert_eq!(render.output, "sizes.svg");
                assert_eq!(render.page_size, Some(PageSize::A3));
                assert!(render.catalog.is_none());
            }
            Command::Stats(_) => panic!("Expected render"),
        }
    }

    #[test]
    fn test_parse_stats_with_global_config() {
        let args =
            Args::try_parse_from(["exoposter", "stats", "--catalog", "oec", "-c", "cfg.toml"]).unwrap();

        assert_eq!(args.config.as_deref(), Some("cfg.toml"));
        assert_eq!(args.log_level, "info");
        match args.command {
            Command::Stats(stats) => assert_eq!(stats.catalog.as_deref(), Some("oec")),
            Command::Render(_) => panic!("Expected stats"),
        }
    }

    #[test]
    fn test_unknown_poster_is_rejected() {
        assert!(Args::try_parse_from(["exoposter", "render", "galaxy"]).is_err());
    }
}
