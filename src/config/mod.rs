//! Site configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── social     # [social]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! title = "Example"
//! description = "Default desc"
//!
//! [social]
//! default_image = "/skovhus.jpg"
//! twitter_site = "@kenneth_skovhus"
//! twitter_creator = "@kenneth_skovhus"
//! ```

pub mod section;
pub mod types;
mod util;

use util::{display_name, find_config_file};

pub use section::{DEFAULT_IMAGE_PATH, DEFAULT_TWITTER_HANDLE, SiteMetadata, SocialConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata. `None` when the `[site]` table is absent.
    #[serde(default)]
    pub site: Option<SiteMetadata>,

    /// Share image and Twitter defaults
    #[serde(default)]
    pub social: SocialConfig,
}

/// Field path of the `[site]` table itself.
const SITE_SECTION: FieldPath = FieldPath::new("site");

impl SiteConfig {
    /// Load configuration for the CLI.
    ///
    /// Searches upward from the working directory for the config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_at(&cwd, &cli.config, cli.site_url.as_deref())
    }

    /// Load, apply overrides, and validate starting the search at `start`.
    pub fn load_at(start: &Path, config_name: &Path, site_url: Option<&str>) -> Result<Self> {
        let config_path = find_config_file(start, config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;

        // Override site URL if provided via CLI
        if let Some(url) = site_url {
            config
                .site
                .get_or_insert_with(SiteMetadata::default)
                .site_url = url.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}, ignoring: {}", display_name(path), ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Collect diagnostics for every section.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        match &self.site {
            Some(site) => site.validate(&mut diag),
            None => diag.error_with_hint(
                SITE_SECTION,
                "site configuration missing",
                "add a [site] table with url, title and description",
            ),
        }
        self.social.validate(&mut diag);

        diag
    }

    /// Validate configuration, printing warnings and failing on errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// tests
// ============================================================================
