//! Execution policy tags for operations with sequential and parallel paths.

/// Selects the execution strategy for query, match and removal operations.
///
/// Both strategies produce identical results; `Parallel` fans work out
/// over the rayon thread pool and accumulates per-query state in a
/// sharded map instead of a single ordered map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionPolicy {
    /// Single-threaded execution.
    #[default]
    Sequential,
    /// Data-parallel execution on the rayon thread pool.
    Parallel,
}
