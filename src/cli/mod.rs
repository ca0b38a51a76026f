// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `index` to build `search-index.json` from a docs
//! directory, `search` to query a built index, and `inspect` to summarize
//! and validate one.

pub mod display;

use clap::{Parser, Subcommand};

use docsift::build::DEFAULT_OUTPUT;
use docsift::search::MAX_RESULTS;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Search index builder and query engine for documentation sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build search-index.json from a directory of .mdx documents
    Index {
        /// Docs directory containing .mdx files (and optionally manifest.json)
        #[arg(short, long)]
        input: String,

        /// Path of the generated index
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: String,

        /// Pretty-print the JSON instead of writing it compact
        #[arg(long)]
        pretty: bool,
    },

    /// Search a built index and display results
    Search {
        /// Path to search-index.json
        file: String,

        /// Search query (under two characters returns nothing)
        query: String,

        /// Maximum number of results to return (at most 12)
        #[arg(short, long, default_value_t = MAX_RESULTS)]
        limit: usize,

        /// Print results as JSON, one array, hrefs included
        #[arg(long)]
        json: bool,
    },

    /// Summarize and validate a built index
    Inspect {
        /// Path to search-index.json
        file: String,
    },
}
