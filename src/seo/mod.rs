//! Page-level SEO metadata.
//!
//! | Module    | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `page`    | Per-page input (title, description, image)     |
//! | `og`      | Open Graph / Twitter Card defaults             |
//! | `resolve` | Merge page input with site metadata            |
//! | `tag`     | Resolved `<meta>` tags                         |
//! | `error`   | Fatal resolution errors                        |

mod error;
mod og;
mod page;
mod resolve;
mod tag;

pub use error::SeoError;
pub use og::{HTML_LANG, SocialDefaults};
pub use page::{MetaEntry, PageInput};
pub use resolve::{HeadResolver, resolve};
pub use tag::{HeadTag, ResolvedHead};
