//! Storage abstractions for news persistence.
//!
//! The sync cycle and the read API reach persistence exclusively through
//! [`NewsStore`]: a bulk insert plus three queries. Any backend satisfying
//! those four operations is substitutable; [`PgStore`] is the production
//! backend and [`MemoryStore`] backs tests and local development.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::NewsItem;

// Re-export for convenience
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Trait for news storage backends.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Insert all items in one batched operation.
    ///
    /// A no-op when `items` is empty. A rejected batch yields a single
    /// aggregate error with nothing written.
    async fn insert_many(&self, items: &[NewsItem]) -> Result<()>;

    /// The stored item with the maximum last-update timestamp, or `None`
    /// when the store holds nothing.
    ///
    /// `Ok(None)` is the expected empty-store state and is distinct from a
    /// query failure.
    async fn find_latest(&self) -> Result<Option<NewsItem>>;

    /// Look up a single item by its feed-assigned identifier.
    async fn find_by_id(&self, news_article_id: i32) -> Result<Option<NewsItem>>;

    /// The full stored collection.
    async fn find_all(&self) -> Result<Vec<NewsItem>>;
}
