// src/storage/postgres.rs

//! Postgres storage backend.

use async_trait::async_trait;
use deadpool_postgres::{Config as PgConfig, Pool, Runtime};
use tokio_postgres::{NoTls, Row};

use crate::error::{AppError, Result};
use crate::models::NewsItem;
use crate::storage::NewsStore;

/// Postgres-backed news store.
///
/// `news_article_id` carries no UNIQUE constraint; duplicate suppression
/// happens upstream in the novelty filter.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    /// Create a pool against the given connection string and bootstrap the
    /// schema. Fails fast when the store is unreachable.
    pub async fn connect(url: &str) -> Result<Self> {
        let mut cfg = PgConfig::new();
        cfg.url = Some(url.to_string());

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| AppError::store(format!("pool init failed: {e}")))?;

        let store = Self { pool };
        store.ensure_table().await?;
        Ok(store)
    }

    /// Create the table and indexes. Safe to run on every boot.
    async fn ensure_table(&self) -> Result<()> {
        const SQL: &str = r#"
        CREATE TABLE IF NOT EXISTS news (
          id                  bigserial PRIMARY KEY,
          news_article_id     integer NOT NULL,
          title               text NOT NULL DEFAULT '',
          article_url         text NOT NULL DEFAULT '',
          thumbnail_image_url text NOT NULL DEFAULT '',
          teaser_text         text NOT NULL DEFAULT '',
          taxonomies          text NOT NULL DEFAULT '',
          publish_date        text NOT NULL DEFAULT '',
          last_update_date    text NOT NULL DEFAULT '',
          opta_match_id       text NOT NULL DEFAULT '',
          is_published        text NOT NULL DEFAULT '',
          created_at          timestamptz NOT NULL DEFAULT now()
        );
        CREATE INDEX IF NOT EXISTS idx_news_article_id ON news (news_article_id);
        CREATE INDEX IF NOT EXISTS idx_news_last_update ON news (last_update_date DESC);
        "#;

        let conn = self.pool.get().await?;
        conn.batch_execute(SQL).await?;
        Ok(())
    }
}

const INSERT_SQL: &str = r#"
INSERT INTO news
  (news_article_id, title, article_url, thumbnail_image_url, teaser_text,
   taxonomies, publish_date, last_update_date, opta_match_id, is_published)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
"#;

const SELECT_COLUMNS: &str = r#"
SELECT news_article_id, title, article_url, thumbnail_image_url, teaser_text,
       taxonomies, publish_date, last_update_date, opta_match_id, is_published
FROM news
"#;

fn row_to_item(row: &Row) -> NewsItem {
    NewsItem {
        news_article_id: row.get("news_article_id"),
        title: row.get("title"),
        article_url: row.get("article_url"),
        thumbnail_image_url: row.get("thumbnail_image_url"),
        teaser_text: row.get("teaser_text"),
        taxonomies: row.get("taxonomies"),
        publish_date: row.get("publish_date"),
        last_update_date: row.get("last_update_date"),
        opta_match_id: row.get("opta_match_id"),
        is_published: row.get("is_published"),
    }
}

#[async_trait]
impl NewsStore for PgStore {
    async fn insert_many(&self, items: &[NewsItem]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        // One transaction per batch: a rejected member rolls back the whole
        // batch, and the next cycle re-selects the same items.
        let mut conn = self.pool.get().await?;
        let tx = conn.transaction().await?;
        let stmt = tx.prepare(INSERT_SQL).await?;

        for item in items {
            tx.execute(
                &stmt,
                &[
                    &item.news_article_id,
                    &item.title,
                    &item.article_url,
                    &item.thumbnail_image_url,
                    &item.teaser_text,
                    &item.taxonomies,
                    &item.publish_date,
                    &item.last_update_date,
                    &item.opta_match_id,
                    &item.is_published,
                ],
            )
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_latest(&self) -> Result<Option<NewsItem>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY last_update_date DESC LIMIT 1");
        let conn = self.pool.get().await?;
        let row = conn.query_opt(sql.as_str(), &[]).await?;
        Ok(row.as_ref().map(row_to_item))
    }

    async fn find_by_id(&self, news_article_id: i32) -> Result<Option<NewsItem>> {
        let sql = format!("{SELECT_COLUMNS} WHERE news_article_id = $1 LIMIT 1");
        let conn = self.pool.get().await?;
        let row = conn.query_opt(sql.as_str(), &[&news_article_id]).await?;
        Ok(row.as_ref().map(row_to_item))
    }

    async fn find_all(&self) -> Result<Vec<NewsItem>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id");
        let conn = self.pool.get().await?;
        let rows = conn.query(sql.as_str(), &[]).await?;
        Ok(rows.iter().map(row_to_item).collect())
    }
}
