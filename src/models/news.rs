//! News item and feed envelope data structures.

use serde::{Deserialize, Serialize};

/// A single news item from the club feed.
///
/// Deserializes from the upstream XML element names (PascalCase) and
/// serializes to snake_case for the read API. All descriptive fields are
/// carried through exactly as the feed sends them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    /// Feed-assigned identifier, unique per upstream feed
    #[serde(
        rename(deserialize = "NewsArticleID", serialize = "news_article_id"),
        default
    )]
    pub news_article_id: i32,

    /// Article title
    #[serde(rename(deserialize = "Title", serialize = "title"), default)]
    pub title: String,

    /// Full URL to the article
    #[serde(
        rename(deserialize = "ArticleURL", serialize = "article_url"),
        default
    )]
    pub article_url: String,

    /// Thumbnail image URL
    #[serde(
        rename(deserialize = "ThumbnailImageURL", serialize = "thumbnail_image_url"),
        default
    )]
    pub thumbnail_image_url: String,

    /// Teaser text shown in listings
    #[serde(
        rename(deserialize = "TeaserText", serialize = "teaser_text"),
        default
    )]
    pub teaser_text: String,

    /// Comma-separated taxonomy tags
    #[serde(
        rename(deserialize = "Taxonomies", serialize = "taxonomies"),
        default
    )]
    pub taxonomies: String,

    /// Publish timestamp as sent by the feed
    #[serde(
        rename(deserialize = "PublishDate", serialize = "publish_date"),
        default
    )]
    pub publish_date: String,

    /// Last-update timestamp, `YYYY-MM-DD HH:MM:SS`; the ordering key for
    /// novelty classification
    #[serde(
        rename(deserialize = "LastUpdateDate", serialize = "last_update_date"),
        default
    )]
    pub last_update_date: String,

    /// Opta match identifier, empty when the item is not match-related
    #[serde(
        rename(deserialize = "OptaMatchId", serialize = "opta_match_id"),
        default
    )]
    pub opta_match_id: String,

    /// Published flag as sent by the feed
    #[serde(
        rename(deserialize = "IsPublished", serialize = "is_published"),
        default
    )]
    pub is_published: String,
}

/// The feed envelope: club metadata plus the ordered item records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "NewListInformation")]
pub struct FeedEnvelope {
    /// Club display name
    #[serde(rename = "ClubName", default)]
    pub club_name: String,

    /// Club website URL
    #[serde(rename = "ClubWebsiteURL", default)]
    pub club_website_url: String,

    /// The repeated item records, in upstream order
    #[serde(rename = "NewsletterNewsItems", default)]
    pub items: NewsItemList,
}

/// Wrapper for the repeated `NewsletterNewsItem` elements.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsItemList {
    #[serde(rename = "NewsletterNewsItem", default)]
    pub items: Vec<NewsItem>,
}

impl FeedEnvelope {
    /// Number of item records in the envelope.
    pub fn len(&self) -> usize {
        self.items.items.len()
    }

    /// Whether the envelope carries no item records.
    pub fn is_empty(&self) -> bool {
        self.items.items.is_empty()
    }

    /// Consume the envelope, yielding the item batch in upstream order.
    pub fn into_items(self) -> Vec<NewsItem> {
        self.items.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> NewsItem {
        NewsItem {
            news_article_id: 101,
            title: "Match Report".to_string(),
            article_url: "https://example.com/news/101".to_string(),
            thumbnail_image_url: "https://example.com/thumb/101.jpg".to_string(),
            teaser_text: "A hard-fought draw.".to_string(),
            taxonomies: "First Team".to_string(),
            publish_date: "2024-01-01 09:00:00".to_string(),
            last_update_date: "2024-01-01 10:00:00".to_string(),
            opta_match_id: "g123".to_string(),
            is_published: "True".to_string(),
        }
    }

    #[test]
    fn test_serializes_snake_case_for_api() {
        let json = serde_json::to_value(sample_item()).unwrap();
        assert_eq!(json["news_article_id"], 101);
        assert_eq!(json["last_update_date"], "2024-01-01 10:00:00");
        assert!(json.get("NewsArticleID").is_none());
    }
}
