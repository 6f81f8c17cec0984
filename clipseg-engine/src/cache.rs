//! Insertion-ordered segmentation result cache

use crate::error::Result;
use crate::options::SegmentationOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of leading characters that feed the text hash
pub const HASH_PREFIX_CHARS: usize = 1000;

/// 32-bit rolling hash over the first [`HASH_PREFIX_CHARS`] characters
///
/// Computes `h = h * 31 + code` with two's-complement wraparound, starting
/// from zero.
pub fn rolling_hash(text: &str) -> i32 {
    text.chars()
        .take(HASH_PREFIX_CHARS)
        .fold(0i32, |h, ch| h.wrapping_mul(31).wrapping_add(ch as i32))
}

/// Cache key for a text and option set: `"{hash}_{options json}"`
///
/// Distinct texts can share a key, either through a hash collision or by
/// agreeing on their first thousand characters. Entries therefore remember
/// the full text they were computed from.
pub fn cache_key(text: &str, options: &SegmentationOptions) -> Result<String> {
    Ok(format!("{}_{}", rolling_hash(text), options.fingerprint()?))
}

/// Cache counters reported by [`SegmentationCache::stats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently stored
    pub entries: usize,
    /// Capacity applied by the most recent insertion
    pub capacity: usize,
    /// Lookups that returned a stored result
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
}

#[derive(Debug)]
struct CacheEntry {
    text: String,
    segments: Vec<String>,
}

/// Bounded map from cache keys to post-processed segment lists
///
/// Eviction removes the earliest-inserted entries. Lookups do not refresh an
/// entry; re-inserting the same text under an existing key moves it to the
/// newest position and keeps its original value. A different text under an
/// existing key never hits and replaces the stored entry on insertion.
#[derive(Debug, Default)]
pub struct SegmentationCache {
    entries: IndexMap<String, CacheEntry>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl SegmentationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the stored result for `text` under `options`
    pub fn get(&mut self, text: &str, options: &SegmentationOptions) -> Option<Vec<String>> {
        let key = match cache_key(text, options) {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "cache key unavailable, skipping lookup");
                return None;
            }
        };

        match self.entries.get(&key) {
            Some(entry) if entry.text == text => {
                self.hits += 1;
                Some(entry.segments.clone())
            }
            Some(_) => {
                debug!(key = %key, "cache key shared by a different text");
                self.misses += 1;
                None
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store `segments` for `text` under `options`
    pub fn put(&mut self, text: &str, options: &SegmentationOptions, segments: Vec<String>) {
        let key = match cache_key(text, options) {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "cache key unavailable, result not stored");
                return;
            }
        };
        self.insert(key, text, segments, options.max_cache_entries);
    }

    fn insert(&mut self, key: String, text: &str, segments: Vec<String>, capacity: usize) {
        self.capacity = capacity;

        let entry = match self.entries.shift_remove(&key) {
            Some(existing) if existing.text == text => existing,
            _ => CacheEntry {
                text: text.to_string(),
                segments,
            },
        };
        self.entries.insert(key, entry);

        while self.entries.len() > capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                debug!(key = %evicted, "evicted cache entry");
            }
        }
    }

    /// Drop every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
        }
    }
}
