//! Message text segmentation
//!
//! Gateways accept a bounded number of characters per message; longer text
//! has to be split into individually deliverable segments.

/// Maximum characters a single SMS segment may carry
pub const DEFAULT_SEGMENT_LIMIT: usize = 160;

/// Split `text` into maximal consecutive segments of at most `limit`
/// characters, in order, covering the whole input with no gaps or
/// overlaps. Operates on characters, newlines included. Empty input
/// (or a zero limit) yields no segments.
pub fn chunk(text: &str, limit: usize) -> Vec<String> {
    if limit == 0 || text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(limit)
        .map(|segment| segment.iter().collect())
        .collect()
}
