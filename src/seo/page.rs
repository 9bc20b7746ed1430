//! Per-page head input.
//!
//! Field names follow the page-props shape used by page manifests:
//!
//! ```json
//! {
//!   "pageTitle": "Hello",
//!   "description": "A post",
//!   "image": "https://cdn.example.com/hello.png",
//!   "location": { "pathname": "/blog/hello" },
//!   "meta": [{ "name": "robots", "content": "noindex" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Current page location, as resolved by the router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub pathname: String,
}

/// Extra `<meta name=.. content=..>` entry supplied by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub name: String,
    pub content: String,
}

/// Page overrides merged over the site metadata.
///
/// Empty strings count as "not provided" for `description`, `image` and
/// `page_title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    #[serde(default)]
    pub description: Option<String>,

    /// Absolute share image URL.
    #[serde(default)]
    pub image: Option<String>,

    pub location: Location,

    /// Appended after the generated tags, in order.
    #[serde(default)]
    pub meta: Vec<MetaEntry>,

    #[serde(default)]
    pub page_title: Option<String>,
}

impl PageInput {
    /// Input for the page at `pathname` with no overrides.
    pub fn at(pathname: impl Into<String>) -> Self {
        Self {
            location: Location {
                pathname: pathname.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.meta.push(MetaEntry {
            name: name.into(),
            content: content.into(),
        });
        self
    }

    pub(crate) fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    pub(crate) fn image(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }

    pub(crate) fn page_title(&self) -> Option<&str> {
        non_empty(self.page_title.as_deref())
    }

    /// Pathname, `/` when the router gave none.
    pub(crate) fn pathname(&self) -> &str {
        match self.location.pathname.as_str() {
            "" => "/",
            path => path,
        }
    }
}

#[inline]
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
