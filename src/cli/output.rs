//! Printing helpers wrapping the engine's fallible operations.
//!
//! These are the convenience functions for driver programs: they catch
//! invalid-argument failures, report them on standard output and keep
//! going, so one malformed document or query does not abort a session.

use crate::document::{DocumentId, DocumentStatus, SearchHit, Term};
use crate::engine::SearchEngine;

/// Print one search hit.
pub fn print_hit(hit: &SearchHit) {
    println!(
        "{{ document_id = {}, relevance = {}, rating = {} }}",
        hit.document_id, hit.relevance, hit.rating
    );
}

/// Print one document's match result.
pub fn print_match_result(document_id: DocumentId, terms: &[Term], status: DocumentStatus) {
    let words: Vec<&str> = terms.iter().map(|term| &**term).collect();
    println!(
        "{{ document_id = {}, status = {}, words = {} }}",
        document_id,
        status,
        words.join(" ")
    );
}

/// Add a document, reporting failures on standard output instead of
/// returning them.
pub fn add_document(
    engine: &mut SearchEngine,
    document_id: DocumentId,
    text: &str,
    status: DocumentStatus,
    ratings: &[i32],
) {
    if let Err(error) = engine.add_document(document_id, text, status, ratings) {
        println!("Error adding document {document_id}: {error}");
    }
}

/// Run a query and print its top results.
pub fn find_top_documents(engine: &SearchEngine, raw_query: &str) {
    println!("Search results for query: {raw_query}");
    match engine.find_top_documents(raw_query) {
        Ok(hits) => {
            for hit in &hits {
                print_hit(hit);
            }
        }
        Err(error) => println!("Search error: {error}"),
    }
}

/// Match a query against every live document and print each result.
pub fn match_documents(engine: &SearchEngine, raw_query: &str) {
    println!("Matching documents for query: {raw_query}");
    let ids: Vec<DocumentId> = engine.document_ids().collect();
    for document_id in ids {
        match engine.match_document(raw_query, document_id) {
            Ok((terms, status)) => print_match_result(document_id, &terms, status),
            Err(error) => {
                println!("Error matching documents for query {raw_query}: {error}");
                return;
            }
        }
    }
}
