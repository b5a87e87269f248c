//! The search core: tokenizing, field projection, matching and highlighting.
//!
//! Everything here is a pure function of its inputs. The same rule is
//! compiled for the persisted store by [`crate::query`].

pub mod fields;
pub mod highlight;
pub mod predicate;
pub mod tokenizer;

pub use fields::{project, SearchField};
pub use highlight::{highlight, join_segments, Segment};
pub use predicate::{filter_advocates, matches};
pub use tokenizer::{fold_case, tokenize, Token};
