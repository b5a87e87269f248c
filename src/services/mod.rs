//! Application service layer.
//!
//! Services sit between the MCP handlers and the repositories: they tokenize
//! queries, pick the evaluation backend and attach highlights.

mod search_service;

pub use search_service::{
    AdvocateHighlights, AdvocateMatch, SearchResponse, SearchService, SearchServiceImpl,
};
