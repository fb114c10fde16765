//! Sharded score accumulator for parallel query evaluation.
//!
//! During a parallel search many workers add partial relevance values for
//! the same set of documents. Guarding one big map with one lock would
//! serialize them, so the accumulator partitions document ids over a
//! fixed number of shards, each with its own mutex. Workers touching
//! different shards proceed without contention; the final
//! [`into_ordered_map`](ShardedScoreMap::into_ordered_map) merge is the
//! only step that visits every shard.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use ahash::AHashMap;
use parking_lot::{Mutex, MutexGuard};

use crate::document::DocumentId;

/// Number of shards used by parallel query evaluation.
pub const SCORE_MAP_SHARDS: usize = 8;

/// A map from document id to accumulated score, partitioned into shards
/// by `id mod shard_count`.
#[derive(Debug)]
pub struct ShardedScoreMap {
    shards: Vec<Mutex<AHashMap<DocumentId, f64>>>,
}

/// Scoped access to one entry of a [`ShardedScoreMap`].
///
/// Holds the shard lock for its whole lifetime; the entry is created with
/// value `0.0` on first access. The lock is released when the guard is
/// dropped, on every exit path.
pub struct ScoreGuard<'a> {
    shard: MutexGuard<'a, AHashMap<DocumentId, f64>>,
    key: DocumentId,
}

impl Deref for ScoreGuard<'_> {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.shard[&self.key]
    }
}

impl DerefMut for ScoreGuard<'_> {
    fn deref_mut(&mut self) -> &mut f64 {
        self.shard
            .get_mut(&self.key)
            .expect("entry is inserted when the guard is created")
    }
}

impl ShardedScoreMap {
    /// Create an accumulator with `shard_count` shards.
    ///
    /// `shard_count` must be positive.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "shard count must be positive");
        let shards = (0..shard_count)
            .map(|_| Mutex::new(AHashMap::new()))
            .collect();
        ShardedScoreMap { shards }
    }

    /// Lock the shard owning `key` and return a guard dereferencing to
    /// the entry's value, inserting `0.0` on miss.
    pub fn access(&self, key: DocumentId) -> ScoreGuard<'_> {
        let index = key as u64 as usize % self.shards.len();
        let mut shard = self.shards[index].lock();
        shard.entry(key).or_insert(0.0);
        ScoreGuard { shard, key }
    }

    /// Merge all shards into a single map ordered by document id.
    ///
    /// Takes the accumulator by value: a query's accumulator does not
    /// outlive the query.
    pub fn into_ordered_map(self) -> BTreeMap<DocumentId, f64> {
        let mut merged = BTreeMap::new();
        for shard in self.shards {
            merged.extend(shard.into_inner());
        }
        merged
    }
}

impl Default for ShardedScoreMap {
    fn default() -> Self {
        Self::new(SCORE_MAP_SHARDS)
    }
}
