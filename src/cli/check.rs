//! `check` command: validate config and show the defaults every page inherits.

use std::io::Write;

use anyhow::Result;

use super::render::resolve_page;
use crate::config::SiteConfig;
use crate::log;
use crate::seo::PageInput;

/// Print the site defaults as resolved for the root page.
///
/// Config validation already ran while loading, so this only has to prove
/// the default share image resolves to an https URL.
pub fn run_check(config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    let head = resolve_page(config, &PageInput::at("/"))?;
    let social = &config.social;

    let rows = [
        ("url", head.url.as_str()),
        ("title", head.title.as_str()),
        ("description", head.description.as_str()),
        ("default image", head.image.as_str()),
        ("twitter:site", social.twitter_site.as_str()),
        ("twitter:creator", social.twitter_creator.as_str()),
    ];
    for (label, value) in rows {
        writeln!(out, "{label:>16} {value}")?;
    }

    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::published;

    #[test]
    fn test_check_prints_defaults() {
        let config = published();

        let mut out = Vec::new();
        run_check(&config, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("url https://example.com/"));
        assert!(out.contains("default image https://example.com/skovhus.jpg"));
        assert!(out.contains("twitter:site @kenneth_skovhus"));
    }
}
