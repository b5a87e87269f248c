//! Query compilation for the persisted store.
//!
//! This module turns a token list into a SQL filter that selects exactly the
//! rows the in-memory predicate would accept.

pub mod compiler;
pub mod dialect;

pub use compiler::{column_for, CompiledFilter, QueryCompiler};
pub use dialect::Dialect;
