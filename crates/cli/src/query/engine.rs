// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Memoizing query parser.
//!
//! Parsed queries are cached per engine, keyed by the query exactly as
//! typed. Entries are never evicted.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use super::component::QueryComponent;
use super::parser::parse_query_uncached;

/// Parsed query shared between the cache and its callers.
pub type ParsedQuery = Arc<Vec<QueryComponent>>;

/// Query parser with a thread-safe memoization cache.
#[derive(Debug, Default)]
pub struct SearchEngine {
    /// Concurrent map of original query string to parsed components.
    cache: DashMap<String, ParsedQuery>,
    /// Cache hit count.
    hits: AtomicUsize,
    /// Cache miss count.
    misses: AtomicUsize,
}

/// Cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses (queries actually parsed).
    pub misses: usize,
    /// Number of entries in cache.
    pub entries: usize,
}

impl SearchEngine {
    /// Create an engine with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a query into [`QueryComponent`]s, in input order.
    ///
    /// Lower-casing happens during the parse, so `"Foo"` and `"foo"` occupy two
    /// cache entries with equal values. Concurrent callers racing on the same
    /// new query parse it once; the rest wait on the entry and share it.
    pub fn parse_query(&self, query: &str) -> ParsedQuery {
        if let Some(entry) = self.cache.get(query) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("query cache hit: {:?}", query);
            return Arc::clone(entry.value());
        }

        let mut parsed_here = false;
        let parsed = Arc::clone(
            self.cache
                .entry(query.to_string())
                .or_insert_with(|| {
                    parsed_here = true;
                    Arc::new(parse_query_uncached(query))
                })
                .value(),
        );

        if parsed_here {
            self.misses.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("parsed query {:?} into {} components", query, parsed.len());
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        parsed
    }

    /// Drop every cached query. Statistics are kept.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.len(),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
