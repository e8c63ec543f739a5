use dashmap::DashMap;

/// Rendered listing pages keyed by logical route path. Mutations invalidate
/// the affected path so the next visitor triggers a fresh read; non-listing
/// pages never enter the cache.
pub struct ListingCache {
    pages: DashMap<String, String>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self {
            pages: DashMap::new(),
        }
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.pages.get(path).map(|entry| entry.clone())
    }

    pub fn put(&self, path: &str, html: String) {
        self.pages.insert(path.to_string(), html);
    }

    /// Drop any cached rendering of `path`. Fire-and-forget: callers do not
    /// consume a return value.
    pub fn invalidate(&self, path: &str) {
        if self.pages.remove(path).is_some() {
            tracing::debug!("invalidated cached listing {path}");
        }
    }
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::new()
    }
}
