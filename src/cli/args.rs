//! Command line argument parsing for the Lancea CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lancea - an in-memory full-text search engine
#[derive(Parser, Debug, Clone)]
#[command(name = "lancea")]
#[command(about = "An in-memory full-text search engine with TF-IDF ranking")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LanceaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Space-separated stop words filtered from documents and queries
    #[arg(short, long, default_value = "")]
    pub stop_words: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LanceaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a document file and print the top results
    Search(SearchArgs),

    /// Match a query against every document in a file
    Match(MatchArgs),

    /// Report and drop duplicate documents in a file
    Dedup(DedupArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the JSON document file
    #[arg(value_name = "DOCS_FILE")]
    pub docs_file: PathBuf,

    /// Query string; prefix a term with '-' to exclude documents
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Evaluate the query on the rayon thread pool
    #[arg(short, long)]
    pub parallel: bool,
}

/// Arguments for the match command
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Path to the JSON document file
    #[arg(value_name = "DOCS_FILE")]
    pub docs_file: PathBuf,

    /// Query string to match against each document
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for the dedup command
#[derive(Parser, Debug, Clone)]
pub struct DedupArgs {
    /// Path to the JSON document file
    #[arg(value_name = "DOCS_FILE")]
    pub docs_file: PathBuf,
}
