//! Configuration section definitions.
//!
//! | Section    | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `[site]`   | Site URL, default title and description      |
//! | `[social]` | Default share image, Twitter handles         |

mod site;
mod social;

pub use site::SiteMetadata;
pub use social::{DEFAULT_IMAGE_PATH, DEFAULT_TWITTER_HANDLE, SocialConfig};
