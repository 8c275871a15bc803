use std::collections::HashMap;
use std::sync::Mutex;

use crate::Logo;

/// Key-scoped image store for the lifetime of the process.
pub trait ImageCache: Send + Sync {
    fn get(&self, key: &str) -> Option<Logo>;
    fn put(&self, key: &str, logo: Logo);
}

/// Unbounded map; nothing is evicted and nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryImageCache {
    entries: Mutex<HashMap<String, Logo>>,
}

impl MemoryImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ImageCache for MemoryImageCache {
    fn get(&self, key: &str) -> Option<Logo> {
        self.entries
            .lock()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    fn put(&self, key: &str, logo: Logo) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.insert(key.to_string(), logo);
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::{ImageCache, MemoryImageCache};
    use crate::{Logo, LogoOrigin};

    #[test]
    fn put_then_get_by_key() {
        let cache = MemoryImageCache::new();
        assert!(cache.get("https://a.example/logo.png").is_none());

        let logo = Logo {
            bytes: Bytes::from_static(b"\x89PNG"),
            origin: LogoOrigin::Remote,
        };
        cache.put("https://a.example/logo.png", logo.clone());

        assert_eq!(cache.get("https://a.example/logo.png"), Some(logo));
        assert!(cache.get("https://b.example/logo.png").is_none());
        assert_eq!(cache.len(), 1);
    }
}
