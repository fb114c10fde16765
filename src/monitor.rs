//! Request statistics over a sliding window.
//!
//! [`RequestRateMonitor`] wraps an engine and counts, over the most
//! recent [`REQUEST_WINDOW`] submitted queries, how many returned no
//! results. Time is a logical clock: every submitted request is one tick.

use std::collections::VecDeque;

use log::debug;

use crate::document::{DocumentStatus, SearchHit};
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::query::predicate::{DocumentPredicate, StatusPredicate};

/// Window length in ticks: one day of one-minute intervals.
pub const REQUEST_WINDOW: u64 = 1440;

/// Outcome of one recorded request.
#[derive(Debug, Clone, Copy)]
struct RequestRecord {
    result_count: usize,
    request_time: u64,
}

/// Sliding-window statistics over the queries sent through it.
///
/// The monitor borrows the engine; queries submitted directly to the
/// engine are not recorded.
///
/// # Examples
///
/// ```
/// use lancea::{RequestRateMonitor, SearchEngine};
///
/// let engine = SearchEngine::from_stop_words_text("").unwrap();
/// let mut monitor = RequestRateMonitor::new(&engine);
/// monitor.add_find_request("cat").unwrap();
/// assert_eq!(monitor.no_result_requests(), 1);
/// ```
#[derive(Debug)]
pub struct RequestRateMonitor<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<RequestRecord>,
    no_result_count: usize,
    current_time: u64,
}

impl<'a> RequestRateMonitor<'a> {
    /// Create a monitor over the given engine.
    pub fn new(engine: &'a SearchEngine) -> Self {
        RequestRateMonitor {
            engine,
            requests: VecDeque::new(),
            no_result_count: 0,
            current_time: 0,
        }
    }

    /// Run a query for `Actual` documents and record its outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<SearchHit>> {
        self.add_find_request_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Run a status-filtered query and record its outcome.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        self.add_find_request_by(raw_query, StatusPredicate::new(status))
    }

    /// Run a predicate-filtered query and record its outcome.
    pub fn add_find_request_by<P: DocumentPredicate>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<SearchHit>> {
        self.current_time += 1;
        let results = self.engine.find_top_documents_by(raw_query, predicate)?;

        while let Some(front) = self.requests.front() {
            if self.current_time - front.request_time < REQUEST_WINDOW {
                break;
            }
            if front.result_count == 0 {
                self.no_result_count -= 1;
            }
            self.requests.pop_front();
            debug!("evicted request older than the window");
        }

        if results.is_empty() {
            self.no_result_count += 1;
        }
        self.requests.push_back(RequestRecord {
            result_count: results.len(),
            request_time: self.current_time,
        });
        Ok(results)
    }

    /// Number of zero-result requests currently inside the window.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    #[test]
    fn test_zero_result_requests_age_out() {
        let mut engine = SearchEngine::from_stop_words_text("").unwrap();
        engine
            .add_document(1, "curly dog", DocumentStatus::Actual, &[1])
            .unwrap();

        let mut monitor = RequestRateMonitor::new(&engine);
        for _ in 0..1439 {
            monitor.add_find_request("empty request").unwrap();
        }
        assert_eq!(monitor.no_result_requests(), 1439);

        // Tick 1440: nothing old enough to evict yet.
        let results = monitor.add_find_request("curly dog").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(monitor.no_result_requests(), 1439);

        // Each further request evicts exactly one of the early misses.
        monitor.add_find_request("curly dog").unwrap();
        assert_eq!(monitor.no_result_requests(), 1438);
        monitor.add_find_request("sparrow").unwrap();
        assert_eq!(monitor.no_result_requests(), 1438);
    }

    #[test]
    fn test_window_holds_at_most_window_entries() {
        let engine = SearchEngine::from_stop_words_text("").unwrap();
        let mut monitor = RequestRateMonitor::new(&engine);
        for _ in 0..2000 {
            monitor.add_find_request("anything").unwrap();
        }
        assert_eq!(monitor.requests.len(), REQUEST_WINDOW as usize);
        assert_eq!(monitor.no_result_requests(), REQUEST_WINDOW as usize);
    }

    #[test]
    fn test_invalid_query_propagates() {
        let engine = SearchEngine::from_stop_words_text("").unwrap();
        let mut monitor = RequestRateMonitor::new(&engine);
        assert!(monitor.add_find_request("--broken").is_err());
    }
}
