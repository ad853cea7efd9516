// src/storage/memory.rs

//! In-memory storage backend for tests and local development.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::NewsItem;
use crate::storage::NewsStore;

/// News store holding everything in process memory.
///
/// Matches the Postgres backend's observable behavior: appends preserve
/// insertion order and the watermark query compares the fixed-format
/// timestamp strings, which orders them chronologically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Vec<NewsItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Whether the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl NewsStore for MemoryStore {
    async fn insert_many(&self, items: &[NewsItem]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.items.lock().unwrap().extend_from_slice(items);
        Ok(())
    }

    async fn find_latest(&self) -> Result<Option<NewsItem>> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .max_by(|a, b| a.last_update_date.cmp(&b.last_update_date))
            .cloned())
    }

    async fn find_by_id(&self, news_article_id: i32) -> Result<Option<NewsItem>> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .find(|item| item.news_article_id == news_article_id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<NewsItem>> {
        Ok(self.items.lock().unwrap().clone())
    }
}
