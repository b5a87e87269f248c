//! Advocate Search - search-matching and highlighting for an advocate directory.
//!
//! A multi-word query matches an advocate when every word appears, as a
//! case-insensitive substring, in at least one searchable field. The same rule
//! runs over an in-memory list or is compiled to SQL for the store, and a
//! highlighter marks which parts of each displayed field matched.
//!
//! # Architecture
//!
//! - **search**: Tokenizer, field projector, match predicate and highlighter
//! - **query**: Compiles token lists to SQL filters (SQLite, Postgres)
//! - **models**: The advocate record
//! - **repositories**: In-memory and SQLite data access
//! - **services**: Search orchestration and highlighting of results
//! - **server**: MCP protocol server
//! - **config**, **error**, **observability**: Configuration, error types, metrics

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod query;
pub mod repositories;
pub mod search;
pub mod seed;
pub mod server;
pub mod services;

pub use config::{Config, SearchBackend};
pub use error::{ConfigError, StoreError};
pub use models::{Advocate, Scalar};
pub use observability::SearchMetrics;
pub use query::{CompiledFilter, Dialect, QueryCompiler};
pub use search::{highlight, matches, tokenize, Segment, Token};
pub use server::AdvocateSearchServer;
pub use services::{SearchResponse, SearchService, SearchServiceImpl};
