// src/sync/filter.rs

//! Novelty classification against the storage watermark.

use chrono::NaiveDateTime;

use crate::models::NewsItem;

/// Fixed format of the feed's last-update timestamps.
pub const UPDATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a last-update timestamp, `None` when it does not match the format.
fn parse_update_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, UPDATE_DATE_FORMAT).ok()
}

/// Select the subset of `batch` that postdates the watermark.
///
/// - No watermark (empty store): the whole batch is new, timestamps are not
///   even inspected.
/// - With a watermark: a candidate is new iff its timestamp is strictly
///   later than the watermark's. Equal timestamps are not new, so a window
///   resent unchanged on the next poll selects nothing.
/// - Candidates whose timestamp does not parse are skipped silently.
/// - A watermark whose own timestamp does not parse selects nothing rather
///   than being treated as an empty store.
pub fn select_new(batch: Vec<NewsItem>, watermark: Option<&NewsItem>) -> Vec<NewsItem> {
    let Some(watermark) = watermark else {
        return batch;
    };

    let Some(mark) = parse_update_date(&watermark.last_update_date) else {
        log::warn!(
            "stored watermark {} has unparseable last_update_date {:?}; selecting nothing",
            watermark.news_article_id,
            watermark.last_update_date
        );
        return Vec::new();
    };

    batch
        .into_iter()
        .filter(|item| match parse_update_date(&item.last_update_date) {
            Some(ts) => ts > mark,
            None => {
                log::debug!(
                    "skipping item {} with unparseable last_update_date {:?}",
                    item.news_article_id,
                    item.last_update_date
                );
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, last_update: &str) -> NewsItem {
        NewsItem {
            news_article_id: id,
            title: format!("Item {id}"),
            article_url: format!("https://example.com/news/{id}"),
            thumbnail_image_url: String::new(),
            teaser_text: String::new(),
            taxonomies: String::new(),
            publish_date: String::new(),
            last_update_date: last_update.to_string(),
            opta_match_id: String::new(),
            is_published: "True".to_string(),
        }
    }

    #[test]
    fn test_no_watermark_selects_everything() {
        let batch = vec![
            item(1, "2024-01-01 10:00:00"),
            item(2, "not a timestamp"),
            item(3, "1999-06-01 00:00:00"),
        ];

        let selected = select_new(batch.clone(), None);
        assert_eq!(selected, batch);
    }

    #[test]
    fn test_strictly_later_is_new() {
        let mark = item(0, "2024-01-01 10:00:00");
        let selected = select_new(vec![item(1, "2024-01-01 10:00:01")], Some(&mark));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].news_article_id, 1);
    }

    #[test]
    fn test_equal_timestamp_is_not_new() {
        let mark = item(0, "2024-01-01 10:00:00");
        let selected = select_new(vec![item(1, "2024-01-01 10:00:00")], Some(&mark));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_older_timestamp_is_not_new() {
        let mark = item(0, "2024-01-01 10:00:00");
        let selected = select_new(vec![item(1, "2023-12-31 09:00:00")], Some(&mark));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_unparseable_candidate_is_skipped_without_aborting() {
        let mark = item(0, "2024-01-01 10:00:00");
        let batch = vec![
            item(1, "01/05/2024 10:00"),
            item(2, "2024-01-05 10:00:00"),
        ];

        let selected = select_new(batch, Some(&mark));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].news_article_id, 2);
    }

    #[test]
    fn test_unparseable_watermark_selects_nothing() {
        let mark = item(0, "garbage");
        let selected = select_new(vec![item(1, "2024-01-05 10:00:00")], Some(&mark));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_mixed_window_around_watermark() {
        // Watermark 2024-01-01 10:00:00; only the strictly-later item is new.
        let mark = item(0, "2024-01-01 10:00:00");
        let batch = vec![
            item(1, "2024-01-01 10:00:00"),
            item(2, "2024-01-01 10:00:01"),
            item(3, "2023-12-31 09:00:00"),
        ];

        let selected = select_new(batch, Some(&mark));
        let ids: Vec<i32> = selected.iter().map(|i| i.news_article_id).collect();
        assert_eq!(ids, vec![2]);
    }
}
