//! Shared fixtures for integration tests.

#![allow(dead_code)]

use advocate_search::models::Advocate;
use advocate_search::repositories::{
    AdvocateRepository, InMemoryAdvocateRepository, SqliteAdvocateRepository,
};
use std::sync::Arc;

/// The record used by the documented search scenarios.
pub fn john_doe() -> Advocate {
    Advocate {
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        city: Some("Boston".to_string()),
        specialties: vec!["RN".to_string()],
        ..Default::default()
    }
}

/// A small directory with overlapping names, cities and specialties.
pub fn sample_directory() -> Vec<Advocate> {
    vec![
        john_doe(),
        Advocate::new("Alice", "Johnson", "Chicago", "MSW")
            .with_specialties(["Family Medicine", "RN"])
            .with_years_of_experience(5)
            .with_phone_number(5554567890),
        Advocate::new("Jane", "Smith", "Boston", "PhD")
            .with_specialties(["Trauma & PTSD"])
            .with_years_of_experience("12")
            .with_phone_number("555-987-6543"),
        Advocate::new("Omar", "Said", "San Jose", "MD")
            .with_specialties(["100% remote", "under_18"])
            .with_years_of_experience(3),
    ]
}

/// SQLite store (in memory) holding `advocates`.
pub async fn sqlite_repo(advocates: &[Advocate]) -> Arc<SqliteAdvocateRepository> {
    let repo = SqliteAdvocateRepository::open_in_memory().expect("open in-memory store");
    repo.insert_many(advocates).await.expect("insert advocates");
    Arc::new(repo)
}

/// In-memory repository holding `advocates` with the same ids SQLite assigns.
pub async fn memory_repo(advocates: &[Advocate]) -> Arc<InMemoryAdvocateRepository> {
    let repo = InMemoryAdvocateRepository::new();
    repo.insert_many(advocates).await.expect("insert advocates");
    Arc::new(repo)
}

/// Ids of `advocates`, in order.
pub fn ids(advocates: &[Advocate]) -> Vec<i64> {
    advocates.iter().map(|a| a.id).collect()
}
