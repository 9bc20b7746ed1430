//! seohead - page-level SEO and social-sharing head tags for static sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod pipeline;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    init_config(SiteConfig::load(&cli)?);
    let config = cfg();
    debug!("config"; "loaded {}", config.config_path.display());

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Render {
            page,
            inject: Some(file),
            ..
        } => cli::render::inject_page(&config, &page.to_input(), file),
        Commands::Render { page, format, .. } => {
            cli::render::render_page(&config, &page.to_input(), *format, &mut stdout)
        }
        Commands::Batch {
            manifest,
            output,
            format,
        } => cli::batch::run_batch(&config, manifest, output.as_deref(), *format, &mut stdout),
        Commands::Check => cli::check::run_check(&config, &mut stdout),
    }
}
