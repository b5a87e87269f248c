//! Data access for the advocate directory.
//!
//! Two interchangeable repositories: one evaluates the match predicate in
//! memory, the other compiles it to SQL for SQLite.

mod memory_advocate_repository;
mod sqlite_advocate_repository;
mod traits;

pub use memory_advocate_repository::InMemoryAdvocateRepository;
pub use sqlite_advocate_repository::SqliteAdvocateRepository;
pub use traits::AdvocateRepository;
