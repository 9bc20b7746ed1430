//! `[social]` configuration (default share image, Twitter handles).

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Default share image, served from the site root.
pub const DEFAULT_IMAGE_PATH: &str = "/skovhus.jpg";

/// Default handle for `twitter:site` and `twitter:creator`.
pub const DEFAULT_TWITTER_HANDLE: &str = "@kenneth_skovhus";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Image path appended to the site URL when a page has no image.
    pub default_image: String,
    pub twitter_site: String,
    pub twitter_creator: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_IMAGE_PATH.into(),
            twitter_site: DEFAULT_TWITTER_HANDLE.into(),
            twitter_creator: DEFAULT_TWITTER_HANDLE.into(),
        }
    }
}

/// Field paths of `[social]`.
#[allow(non_camel_case_types)]
pub struct SocialConfigFields {
    pub default_image: FieldPath,
    pub twitter_site: FieldPath,
    pub twitter_creator: FieldPath,
}

impl SocialConfig {
    /// Field paths for diagnostic messages.
    pub const FIELDS: SocialConfigFields = SocialConfigFields {
        default_image: FieldPath::new("social.default_image"),
        twitter_site: FieldPath::new("social.twitter_site"),
        twitter_creator: FieldPath::new("social.twitter_creator"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.default_image.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.default_image,
                format!("`{}` is not a root-relative path", self.default_image),
                format!("use a path under the site root, e.g.: \"{DEFAULT_IMAGE_PATH}\""),
            );
        }

        for (field, handle) in [
            (Self::FIELDS.twitter_site, &self.twitter_site),
            (Self::FIELDS.twitter_creator, &self.twitter_creator),
        ] {
            if handle.is_empty() {
                diag.warn(field, "empty handle, tag content will be blank");
            } else if !handle.starts_with('@') {
                diag.error_with_hint(
                    field,
                    format!("`{handle}` is not a Twitter handle"),
                    format!("prefix it with @, e.g.: \"@{handle}\""),
                );
            }
        }
    }
}
