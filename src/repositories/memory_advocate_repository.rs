use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::Advocate;
use crate::repositories::traits::AdvocateRepository;
use crate::search::{filter_advocates, Token};

/// Advocate repository held entirely in memory.
///
/// Searches run the match predicate over the stored list.
pub struct InMemoryAdvocateRepository {
    advocates: RwLock<Vec<Advocate>>,
}

impl InMemoryAdvocateRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            advocates: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository holding `advocates` as-is, in the given order.
    pub fn with_advocates(advocates: Vec<Advocate>) -> Self {
        Self {
            advocates: RwLock::new(advocates),
        }
    }
}

impl Default for InMemoryAdvocateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdvocateRepository for InMemoryAdvocateRepository {
    async fn get(&self, id: i64) -> StoreResult<Advocate> {
        let advocates = self.advocates.read().await;
        advocates
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("advocate {}", id)))
    }

    async fn list(&self) -> StoreResult<Vec<Advocate>> {
        Ok(self.advocates.read().await.clone())
    }

    async fn search(&self, tokens: &[Token]) -> StoreResult<Vec<Advocate>> {
        let advocates = self.advocates.read().await;
        Ok(filter_advocates(advocates.iter(), tokens).cloned().collect())
    }

    async fn insert_many(&self, new_advocates: &[Advocate]) -> StoreResult<Vec<Advocate>> {
        let mut advocates = self.advocates.write().await;
        let mut next_id = advocates.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let now = Utc::now().to_rfc3339();

        let inserted: Vec<Advocate> = new_advocates
            .iter()
            .map(|advocate| {
                let mut stored = advocate.clone();
                stored.id = next_id;
                stored.created_at = Some(now.clone());
                next_id += 1;
                stored
            })
            .collect();

        advocates.extend(inserted.iter().cloned());
        tracing::debug!("Inserted {} advocates in memory", inserted.len());
        Ok(inserted)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.advocates.read().await.len())
    }
}
