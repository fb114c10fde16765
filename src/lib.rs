//! # Lancea
//!
//! An in-memory full-text search library.
//!
//! ## Features
//!
//! - Inverted + forward index with TF-IDF ranking
//! - Minus-words excluding documents from results
//! - Stop-word filtering of documents and queries
//! - Status and predicate filtering of candidates
//! - Sequential and rayon-parallel execution of search, match and removal
//! - Duplicate document detection and removal
//! - Sliding-window request statistics
//!
//! ## Example
//!
//! ```
//! use lancea::{DocumentStatus, SearchEngine};
//!
//! let mut engine = SearchEngine::from_stop_words_text("and in the").unwrap();
//! engine
//!     .add_document(1, "curly cat", DocumentStatus::Actual, &[5, 4])
//!     .unwrap();
//! engine
//!     .add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[3])
//!     .unwrap();
//!
//! let hits = engine.find_top_documents("curly -cat").unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].document_id, 2);
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod concurrent;
pub mod dedup;
pub mod document;
pub mod engine;
pub mod error;
pub mod monitor;
pub mod policy;
pub mod query;
pub mod util;

pub use batch::{process_queries, process_queries_joined};
pub use concurrent::ShardedScoreMap;
pub use dedup::remove_duplicates;
pub use document::{DocumentId, DocumentStatus, SearchHit, Term, TermFrequencies};
pub use engine::{ACCURACY_THRESHOLD, MAX_RESULT_DOCUMENT_COUNT, SearchEngine};
pub use error::{LanceaError, Result};
pub use monitor::{REQUEST_WINDOW, RequestRateMonitor};
pub use policy::ExecutionPolicy;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
