// src/feed/parser.rs

//! Feed envelope decoding.

use crate::error::Result;
use crate::models::FeedEnvelope;

/// Decode a raw feed document into its envelope.
///
/// Item order is preserved as sent by the upstream. Malformed input yields
/// an error without partial results.
pub fn parse_feed(raw: &[u8]) -> Result<FeedEnvelope> {
    Ok(quick_xml::de::from_reader(raw)?)
}
