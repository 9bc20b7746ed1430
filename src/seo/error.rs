//! Head resolution errors.

use thiserror::Error;

/// Fatal errors while resolving a page head.
///
/// Both are configuration bugs: the page render aborts and the caller reports
/// a build failure instead of emitting degraded tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeoError {
    #[error("site configuration missing: no site metadata available")]
    SiteMetadataMissing,

    #[error("invalid secure-image URL `{0}`: share images must use https")]
    InsecureImage(String),
}
