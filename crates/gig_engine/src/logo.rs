use std::sync::Arc;

use bytes::Bytes;
use gig_logging::gig_debug;

use crate::{ImageCache, JobSource, Logo, LogoOrigin};

/// Placeholder shown when a posting has no logo or the logo cannot be loaded.
pub const FALLBACK_LOGO: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32"><rect width="32" height="32" rx="8" fill="#dedede"/><circle cx="16" cy="13" r="5" fill="#9e9e9e"/><rect x="8" y="21" width="16" height="4" rx="2" fill="#9e9e9e"/></svg>"##;

pub fn fallback_logo() -> Logo {
    Logo {
        bytes: Bytes::from_static(FALLBACK_LOGO),
        origin: LogoOrigin::Fallback,
    }
}

/// Resolves logos through the cache, falling back to the bundled image.
#[derive(Clone)]
pub struct LogoLoader {
    source: Arc<dyn JobSource>,
    cache: Arc<dyn ImageCache>,
}

impl LogoLoader {
    pub fn new(source: Arc<dyn JobSource>, cache: Arc<dyn ImageCache>) -> Self {
        Self { source, cache }
    }

    /// Always yields an image. The fallback is cached too, so a dead URL is
    /// only tried once per process.
    pub async fn load(&self, url: &str) -> Logo {
        if let Some(cached) = self.cache.get(url) {
            gig_debug!("Logo cache hit for {}", url);
            return cached;
        }

        let logo = match self.source.fetch_image(url).await {
            Some(bytes) => Logo {
                bytes,
                origin: LogoOrigin::Remote,
            },
            None => fallback_logo(),
        };
        self.cache.put(url, logo.clone());
        logo
    }
}
