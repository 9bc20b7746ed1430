//! `[site]` configuration.
//!
//! Build-wide site metadata: the canonical URL plus the default title and
//! description every page falls back to.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata shared by every page of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site URL without trailing slash (e.g., "https://example.com").
    #[serde(rename = "url", alias = "siteUrl", alias = "site_url")]
    pub site_url: String,

    /// Site title, appended to every page title.
    pub title: String,

    /// Default description for pages without their own.
    pub description: String,
}

/// Field paths of `[site]`.
#[allow(non_camel_case_types)]
pub struct SiteMetadataFields {
    pub url: FieldPath,
    pub title: FieldPath,
    pub description: FieldPath,
}

impl SiteMetadata {
    /// Field paths for diagnostic messages.
    pub const FIELDS: SiteMetadataFields = SiteMetadataFields {
        url: FieldPath::new("site.url"),
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
    };

    pub fn new(
        site_url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            site_url: site_url.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `url` is set, parses, uses `https`, and has a host
    /// - `url` has no trailing slash (pathnames are appended verbatim)
    /// - `title` and `description` are non-empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.site_url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site URL is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        } else {
            match url::Url::parse(&self.site_url) {
                Ok(parsed) => {
                    // Default images are derived from this URL and must be https
                    if parsed.scheme() != "https" {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!("scheme '{}' not supported, must be https", parsed.scheme()),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }

            if self.site_url.ends_with('/') {
                diag.warn(
                    Self::FIELDS.url,
                    "trailing slash produces `//` in page URLs",
                );
            }
        }

        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }
        if self.description.is_empty() {
            diag.error(Self::FIELDS.description, "site description must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(site: &SiteMetadata) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_site() {
        let site = SiteMetadata::new("https://example.com", "Example", "Default desc");
        let diag = validate(&site);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_http_url_rejected() {
        let site = SiteMetadata::new("http://example.com", "Example", "Default desc");
        let diag = validate(&site);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field, SiteMetadata::FIELDS.url);
    }

    #[test]
    fn test_unparsable_url_rejected() {
        let site = SiteMetadata::new("example.com", "Example", "Default desc");
        assert!(validate(&site).has_errors());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let diag = validate(&SiteMetadata::default());
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                SiteMetadata::FIELDS.url,
                SiteMetadata::FIELDS.title,
                SiteMetadata::FIELDS.description
            ]
        );
    }

    #[test]
    fn test_trailing_slash_warns() {
        let site = SiteMetadata::new("https://example.com/", "Example", "Default desc");
        let diag = validate(&site);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_site_url_alias() {
        let site: SiteMetadata = toml::from_str(
            r#"
siteUrl = "https://example.com"
title = "Example"
"#,
        )
        .unwrap();
        assert_eq!(site.site_url, "https://example.com");
        assert!(site.description.is_empty());
    }
}
