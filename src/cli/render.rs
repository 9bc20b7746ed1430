//! `render` command: resolve one page.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};

use super::OutputFormat;
use crate::config::SiteConfig;
use crate::pipeline::{HeadInjector, render_head};
use crate::seo::{HeadResolver, PageInput, ResolvedHead, SocialDefaults};
use crate::{debug, log};

/// Resolve `page` against `config`'s `[site]` and `[social]` tables.
pub fn resolve_page(config: &SiteConfig, page: &PageInput) -> Result<ResolvedHead> {
    let head = HeadResolver::new(config)
        .with_defaults(SocialDefaults::from_config(&config.social))
        .resolve(page)
        .with_context(|| format!("failed to resolve head for `{}`", page.pathname()))?;

    debug!("render"; "{} -> {} tags", head.url, head.tags.len());
    Ok(head)
}

/// Print the resolved head to `out`.
pub fn render_page(
    config: &SiteConfig,
    page: &PageInput,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let head = resolve_page(config, page)?;
    match format {
        OutputFormat::Html => out.write_all(render_head(&head).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &head)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Inject the resolved head into `file` in place.
pub fn inject_page(config: &SiteConfig, page: &PageInput, file: &Path) -> Result<()> {
    let head = resolve_page(config, page)?;

    let html = fs::read_to_string(file)
        .with_context(|| format!("failed to read `{}`", file.display()))?;
    let html = HeadInjector::new(&head).inject(&html);
    fs::write(file, html).with_context(|| format!("failed to write `{}`", file.display()))?;

    log!("render"; "injected {} tags into {}", head.tags.len(), file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::published;
    use crate::config::SiteMetadata;
    use crate::seo::SeoError;

    #[test]
    fn test_render_html_and_json() {
        let config = published();
        let page = PageInput::at("/blog/post");

        let mut html = Vec::new();
        render_page(&config, &page, OutputFormat::Html, &mut html).unwrap();
        let html = String::from_utf8(html).unwrap();
        assert!(html.starts_with("<title>Example</title>\n"));

        let mut json = Vec::new();
        render_page(&config, &page, OutputFormat::Json, &mut json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["url"], "https://example.com/blog/post");
        assert_eq!(value["lang"], "en");
        assert_eq!(value["tags"][2]["property"], "og:url");
    }

    #[test]
    fn test_resolves_against_given_config() {
        published();
        let mut other = SiteConfig {
            site: Some(SiteMetadata::new("https://other.org", "Other", "Other desc")),
            ..SiteConfig::default()
        };
        other.social.twitter_site = "@other".to_string();

        let head = resolve_page(&other, &PageInput::at("/x")).unwrap();
        assert_eq!(head.url, "https://other.org/x");
        assert_eq!(head.title, "Other");
        assert_eq!(head.description, "Other desc");
        assert_eq!(head.image, "https://other.org/skovhus.jpg");
        assert_eq!(head.get("twitter:site"), Some("@other"));
    }

    #[test]
    fn test_insecure_image_is_error() {
        let config = published();
        let page = PageInput::at("/").with_image("http://insecure.com/a.jpg");

        let mut out = Vec::new();
        let err = render_page(&config, &page, OutputFormat::Html, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SeoError>(),
            Some(SeoError::InsecureImage(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_inject_page_in_place() {
        let config = published();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        fs::write(&file, "<html><head></head><body></body></html>").unwrap();

        inject_page(&config, &PageInput::at("/"), &file).unwrap();

        let html = fs::read_to_string(&file).unwrap();
        assert!(html.starts_with(r#"<html lang="en"><head>"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://example.com/">"#));
    }
}
