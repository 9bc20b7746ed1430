//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::seo::{MetaEntry, PageInput};

/// Resolve SEO and social-sharing head tags for static site pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seo.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "seo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the configured site URL
    #[arg(long, global = true)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve and print the head of a single page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        page: PageArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Inject the head into this HTML file in place instead of printing
        #[arg(long, value_hint = clap::ValueHint::FilePath, conflicts_with = "format")]
        inject: Option<PathBuf>,
    },

    /// Resolve heads for every page in a JSON manifest
    #[command(visible_alias = "b")]
    Batch {
        /// JSON array of page inputs
        #[arg(value_hint = clap::ValueHint::FilePath)]
        manifest: PathBuf,

        /// Write one file per page into this directory
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Validate the config and show the resolved site defaults
    #[command(visible_alias = "c")]
    Check,
}

/// Output format for resolved heads.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<title>` and `<meta>` markup
    #[default]
    Html,
    /// Resolved head as JSON
    Json,
}

impl OutputFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// Page overrides for the render command.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Page pathname (e.g. /blog/post)
    #[arg(short, long, default_value = "")]
    pub path: String,

    /// Page title, rendered as "<title> | <site title>"
    #[arg(short, long)]
    pub title: Option<String>,

    /// Page description (defaults to the site description)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Absolute https share image URL
    #[arg(short, long)]
    pub image: Option<String>,

    /// Extra meta tag as name=content (repeatable)
    #[arg(short, long, value_name = "NAME=CONTENT", value_parser = parse_meta)]
    pub meta: Vec<MetaEntry>,
}

impl PageArgs {
    pub fn to_input(&self) -> PageInput {
        PageInput {
            description: self.description.clone(),
            image: self.image.clone(),
            meta: self.meta.clone(),
            page_title: self.title.clone(),
            ..PageInput::at(self.path.as_str())
        }
    }
}

fn parse_meta(s: &str) -> Result<MetaEntry, String> {
    let (name, content) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=CONTENT, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("meta name is empty in `{s}`"));
    }
    Ok(MetaEntry {
        name: name.to_string(),
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "seohead",
            "render",
            "--path",
            "/blog/post",
            "--title",
            "Post",
            "-m",
            "robots=noindex",
            "--meta",
            "keywords=a=b",
        ])
        .unwrap();

        let Commands::Render { page, format, inject } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(format, OutputFormat::Html);
        assert!(inject.is_none());

        let input = page.to_input();
        assert_eq!(input.location.pathname, "/blog/post");
        assert_eq!(input.page_title.as_deref(), Some("Post"));
        assert_eq!(input.meta[0].name, "robots");
        assert_eq!(input.meta[1].content, "a=b");
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "seohead",
            "batch",
            "pages.json",
            "-o",
            "out",
            "-C",
            "site/seo.toml",
            "--site-url",
            "https://staging.example.com",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site/seo.toml"));
        assert_eq!(cli.site_url.as_deref(), Some("https://staging.example.com"));
        assert!(matches!(cli.command, Commands::Batch { output: Some(_), .. }));
    }

    #[test]
    fn test_invalid_meta_rejected() {
        assert!(Cli::try_parse_from(["seohead", "render", "--meta", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["seohead", "render", "--meta", "=x"]).is_err());
    }

    #[test]
    fn test_inject_conflicts_with_format() {
        let result = Cli::try_parse_from([
            "seohead", "render", "--inject", "a.html", "--format", "json",
        ]);
        assert!(result.is_err());
    }
}
