//! Batch query execution.
//!
//! Runs many independent queries against one engine on the rayon thread
//! pool. Output order always matches input order regardless of how the
//! queries were scheduled.

use rayon::prelude::*;

use crate::document::SearchHit;
use crate::engine::SearchEngine;
use crate::error::Result;

/// Run every query in parallel, returning one result vector per query in
/// input order.
///
/// Queries search `Actual` documents. The first invalid query fails the
/// whole batch.
pub fn process_queries(
    engine: &SearchEngine,
    queries: &[String],
) -> Result<Vec<Vec<SearchHit>>> {
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query))
        .collect()
}

/// Run every query in parallel and flatten the results, preserving both
/// the query order and each query's internal ranking.
pub fn process_queries_joined(engine: &SearchEngine, queries: &[String]) -> Result<Vec<SearchHit>> {
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}
