//! Page head resolution.
//!
//! Merges a page's overrides with the site metadata:
//!
//! | Value         | Page override      | Fallback                         |
//! |---------------|--------------------|----------------------------------|
//! | `description` | `description`      | site description                 |
//! | `image`       | `image`            | site URL + default image path    |
//! | `url`         | `location.pathname`| site URL + `/`                   |
//! | `title`       | `pageTitle`        | site title                       |
//!
//! A page title is rendered as `"{page} | {site}"`.

use std::borrow::Cow;

use super::{HTML_LANG, HeadTag, PageInput, ResolvedHead, SeoError, SocialDefaults};
use crate::config::{SiteConfig, SiteMetadata};

/// Supplier of the build-wide site metadata.
///
/// Returning `None` means the build has no site metadata at all, which fails
/// every render with [`SeoError::SiteMetadataMissing`].
pub trait SiteMetadataSource {
    fn site_metadata(&self) -> Option<Cow<'_, SiteMetadata>>;
}

impl SiteMetadataSource for SiteMetadata {
    fn site_metadata(&self) -> Option<Cow<'_, SiteMetadata>> {
        Some(Cow::Borrowed(self))
    }
}

impl SiteMetadataSource for SiteConfig {
    fn site_metadata(&self) -> Option<Cow<'_, SiteMetadata>> {
        self.site.as_ref().map(Cow::Borrowed)
    }
}

impl<F> SiteMetadataSource for F
where
    F: Fn() -> Option<SiteMetadata>,
{
    fn site_metadata(&self) -> Option<Cow<'_, SiteMetadata>> {
        self().map(Cow::Owned)
    }
}

/// Resolves page inputs against one metadata source.
pub struct HeadResolver<'a, S: ?Sized> {
    source: &'a S,
    defaults: SocialDefaults<'a>,
}

impl<'a, S> HeadResolver<'a, S>
where
    S: SiteMetadataSource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            defaults: SocialDefaults::default(),
        }
    }

    /// Replace the built-in social defaults (e.g. from `[social]`).
    pub fn with_defaults(mut self, defaults: SocialDefaults<'a>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resolve the head for one page.
    ///
    /// Fails before computing anything when the source has no site metadata,
    /// and when the resulting image URL does not start with `https`.
    pub fn resolve(&self, page: &PageInput) -> Result<ResolvedHead, SeoError> {
        let site = self
            .source
            .site_metadata()
            .ok_or(SeoError::SiteMetadataMissing)?;

        let description = page.description().unwrap_or(&site.description).to_owned();
        let image = match page.image() {
            Some(image) => image.to_owned(),
            None => format!("{}{}", site.site_url, self.defaults.default_image),
        };
        let url = format!("{}{}", site.site_url, page.pathname());

        if !image.starts_with("https") {
            return Err(SeoError::InsecureImage(image));
        }

        let title = match page.page_title() {
            Some(page_title) => format!("{page_title} | {}", site.title),
            None => site.title.clone(),
        };

        let fixed = [
            HeadTag::name("description", &description),
            HeadTag::name("image", &image),
            HeadTag::property("og:url", &url),
            HeadTag::property("og:title", &title),
            HeadTag::property("og:description", &description),
            HeadTag::property("og:type", self.defaults.og_type),
            HeadTag::property("og:image", &image),
            HeadTag::name("twitter:card", self.defaults.twitter_card),
            HeadTag::name("twitter:site", self.defaults.twitter_site),
            HeadTag::name("twitter:creator", self.defaults.twitter_creator),
            HeadTag::name("twitter:title", &title),
            HeadTag::name("twitter:description", &description),
            HeadTag::name("twitter:image", &image),
        ];
        let mut tags = Vec::from(fixed);
        tags.extend(
            page.meta
                .iter()
                .map(|entry| HeadTag::name(&entry.name, &entry.content)),
        );

        Ok(ResolvedHead {
            lang: HTML_LANG,
            title,
            description,
            image,
            url,
            tags,
        })
    }
}

/// Resolve with the built-in social defaults.
pub fn resolve<S>(source: &S, page: &PageInput) -> Result<ResolvedHead, SeoError>
where
    S: SiteMetadataSource + ?Sized,
{
    HeadResolver::new(source).resolve(page)
}
