//! Resolved head tags.

use serde::{Deserialize, Serialize};

/// Attribute that names a `<meta>` tag.
///
/// Open Graph tags use `property`, everything else uses `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKey {
    Name(String),
    Property(String),
}

impl TagKey {
    /// HTML attribute carrying the key.
    pub const fn attr(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Property(_) => "property",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Name(v) | Self::Property(v) => v,
        }
    }
}

/// One `<meta>` tag. Serializes as `{"name": .., "content": ..}` or
/// `{"property": .., "content": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    #[serde(flatten)]
    pub key: TagKey,
    pub content: String,
}

impl HeadTag {
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: TagKey::Name(name.into()),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: TagKey::Property(property.into()),
            content: content.into(),
        }
    }
}

/// Everything a page needs in its document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHead {
    /// `<html lang>` value.
    pub lang: &'static str,
    pub title: String,
    pub description: String,
    /// Share image URL, always https.
    pub image: String,
    /// Canonical page URL.
    pub url: String,
    pub tags: Vec<HeadTag>,
}

impl ResolvedHead {
    /// Content of the first tag keyed `key` (name or property).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key.value() == key)
            .map(|tag| tag.content.as_str())
    }
}
