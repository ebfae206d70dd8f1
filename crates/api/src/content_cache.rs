use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;

/// Read-through cache for assembled `section -> key -> value` page maps.
///
/// Public page reads hit this before the database. Every content write
/// clears the whole map rather than tracking which pages changed; the
/// page set is small.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
#[derive(Debug, Default)]
pub struct ContentCache {
    pages: RwLock<HashMap<String, Value>>,
}

impl ContentCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached map for a page, if present.
    pub async fn get(&self, page_id: &str) -> Option<Value> {
        self.pages.read().await.get(page_id).cloned()
    }

    /// Store the assembled map for a page.
    pub async fn insert(&self, page_id: &str, value: Value) {
        self.pages.write().await.insert(page_id.to_string(), value);
    }

    /// Drop every cached page. Called after any content write.
    pub async fn clear(&self) {
        self.pages.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = ContentCache::new();
        assert!(cache.get("home").await.is_none());

        cache.insert("home", json!({"hero": {"title": "X"}})).await;
        assert_eq!(
            cache.get("home").await,
            Some(json!({"hero": {"title": "X"}}))
        );
    }

    #[tokio::test]
    async fn test_clear_empties_every_page() {
        let cache = ContentCache::new();
        cache.insert("home", json!({})).await;
        cache.insert("about", json!({})).await;

        cache.clear().await;

        assert!(cache.get("home").await.is_none());
        assert!(cache.get("about").await.is_none());
    }
}
