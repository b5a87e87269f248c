//! Data models for the advocate directory.
//!
//! Records are owned by the store; the search core only reads them.

pub mod advocate;

pub use advocate::{Advocate, Scalar};
