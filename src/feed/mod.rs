//! Upstream feed access: HTTP fetch and envelope decoding.

pub mod client;
pub mod parser;

pub use client::{FeedSource, HttpFeedClient};
pub use parser::parse_feed;
