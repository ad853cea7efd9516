// src/sync/scheduler.rs

//! Fixed-interval background sync task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::Result;
use crate::feed::{FeedSource, parse_feed};
use crate::storage::NewsStore;
use crate::sync::filter::select_new;

/// Drives the fetch → parse → classify → insert cycle on a fixed cadence.
///
/// Exactly one cycle is in flight at any time: the task awaits each cycle to
/// completion, then idles for the full interval before starting the next, so
/// the interval is "at least this long between cycle starts". A failure in
/// any step abandons that cycle without a partial write; the next tick
/// retries from scratch.
pub struct SyncScheduler {
    feed: Arc<dyn FeedSource>,
    store: Arc<dyn NewsStore>,
    interval: Duration,
    fetch_count: u32,
}

impl SyncScheduler {
    pub fn new(
        feed: Arc<dyn FeedSource>,
        store: Arc<dyn NewsStore>,
        interval: Duration,
        fetch_count: u32,
    ) -> Self {
        Self {
            feed,
            store,
            interval,
            fetch_count,
        }
    }

    /// Run until the shutdown signal flips.
    ///
    /// The signal is checked at the top of each cycle and interrupts the
    /// idle sleep; an in-flight cycle is never interrupted mid-step.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        log::info!(
            "sync scheduler started (interval {}s, fetch count {})",
            self.interval.as_secs(),
            self.fetch_count
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.run_cycle().await {
                Ok(0) => log::debug!("sync cycle complete, no new items"),
                Ok(n) => log::info!("sync cycle complete, stored {n} new item(s)"),
                Err(e) => log::error!("sync cycle failed: {e}"),
            }

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        log::info!("sync scheduler stopped");
    }

    /// One complete cycle. Returns the number of items inserted.
    async fn run_cycle(&self) -> Result<usize> {
        let raw = self.feed.fetch(self.fetch_count).await?;
        let envelope = parse_feed(&raw)?;
        log::debug!(
            "fetched {} candidate item(s) from {}",
            envelope.len(),
            envelope.club_name
        );

        let watermark = self.store.find_latest().await?;
        let fresh = select_new(envelope.into_items(), watermark.as_ref());
        if fresh.is_empty() {
            return Ok(0);
        }

        self.store.insert_many(&fresh).await?;
        Ok(fresh.len())
    }
}
