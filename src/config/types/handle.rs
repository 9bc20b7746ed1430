//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads of the config loaded at startup.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish a loaded config for the rest of the process.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::published;

    #[test]
    fn test_cfg_returns_published_config() {
        let config = published();
        let current = cfg();
        assert_eq!(current.site, config.site);
    }
}
