//! Command implementations for the Lancea CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::cli::args::{Command, DedupArgs, LanceaArgs, MatchArgs, SearchArgs};
use crate::cli::output;
use crate::dedup::remove_duplicates;
use crate::document::{DocumentStatus, DocumentId};
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::policy::ExecutionPolicy;
use crate::util::Timer;

/// One document record in the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub text: String,
    #[serde(default = "default_status")]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

fn default_status() -> DocumentStatus {
    DocumentStatus::Actual
}

/// Execute a CLI command.
pub fn execute_command(args: LanceaArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Match(match_args) => match_all(match_args.clone(), &args),
        Command::Dedup(dedup_args) => dedup(dedup_args.clone(), &args),
    }
}

/// Load a document file and build an engine over it.
fn load_engine(stop_words: &str, docs_file: &Path) -> Result<SearchEngine> {
    let records: Vec<DocumentRecord> =
        serde_json::from_reader(BufReader::new(File::open(docs_file)?))?;
    let mut engine = SearchEngine::from_stop_words_text(stop_words)?;
    for record in &records {
        output::add_document(
            &mut engine,
            record.id,
            &record.text,
            record.status,
            &record.ratings,
        );
    }
    Ok(engine)
}

/// Run one query and print the ranked results.
fn search(args: SearchArgs, cli_args: &LanceaArgs) -> Result<()> {
    let engine = load_engine(&cli_args.stop_words, &args.docs_file)?;
    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} documents from {}",
            engine.document_count(),
            args.docs_file.display()
        );
    }

    let policy = if args.parallel {
        ExecutionPolicy::Parallel
    } else {
        ExecutionPolicy::Sequential
    };
    let timer = Timer::start();
    let hits = engine.find_top_documents_with_policy(policy, &args.query)?;
    let elapsed = timer.elapsed();

    println!("Search results for query: {}", args.query);
    for hit in &hits {
        output::print_hit(hit);
    }
    if cli_args.verbosity() > 1 {
        println!("Query took {elapsed:.3?}");
    }
    Ok(())
}

/// Match the query against every document and print each result.
fn match_all(args: MatchArgs, cli_args: &LanceaArgs) -> Result<()> {
    let engine = load_engine(&cli_args.stop_words, &args.docs_file)?;
    output::match_documents(&engine, &args.query);
    Ok(())
}

/// Report duplicates and print the surviving document count.
fn dedup(args: DedupArgs, cli_args: &LanceaArgs) -> Result<()> {
    let mut engine = load_engine(&cli_args.stop_words, &args.docs_file)?;
    let removed = remove_duplicates(&mut engine);
    if cli_args.verbosity() > 0 {
        println!(
            "Removed {} duplicates, {} documents remain",
            removed.len(),
            engine.document_count()
        );
    }
    Ok(())
}
