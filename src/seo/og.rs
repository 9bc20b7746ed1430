//! Open Graph and Twitter Card defaults.
//!
//! Pure data: the resolver reads these, rendering lives in `pipeline::head`.

use crate::config::{DEFAULT_IMAGE_PATH, DEFAULT_TWITTER_HANDLE, SocialConfig};

/// Document language emitted on `<html lang>`.
pub const HTML_LANG: &str = "en";

const OG_TYPE: &str = "website";
const TWITTER_CARD: &str = "summary";

/// Site-level social tag values that no page overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialDefaults<'a> {
    pub og_type: &'static str,
    pub twitter_card: &'static str,
    pub twitter_site: &'a str,
    pub twitter_creator: &'a str,
    /// Path appended to the site URL when the page has no image.
    pub default_image: &'a str,
}

impl Default for SocialDefaults<'static> {
    fn default() -> Self {
        Self {
            og_type: OG_TYPE,
            twitter_card: TWITTER_CARD,
            twitter_site: DEFAULT_TWITTER_HANDLE,
            twitter_creator: DEFAULT_TWITTER_HANDLE,
            default_image: DEFAULT_IMAGE_PATH,
        }
    }
}

impl<'a> SocialDefaults<'a> {
    /// Create defaults from the `[social]` config section.
    pub fn from_config(social: &'a SocialConfig) -> Self {
        Self {
            og_type: OG_TYPE,
            twitter_card: TWITTER_CARD,
            twitter_site: &social.twitter_site,
            twitter_creator: &social.twitter_creator,
            default_image: &social.default_image,
        }
    }
}
