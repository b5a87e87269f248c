use crate::error::StoreResult;
use crate::models::Advocate;
use crate::search::Token;
use async_trait::async_trait;

/// Repository for the advocate directory.
///
/// Implementations differ in where the search rule runs, but `search` must
/// return the same advocates, in the same order, for any token list.
#[async_trait]
pub trait AdvocateRepository: Send + Sync {
    /// Retrieve a single advocate by ID.
    async fn get(&self, id: i64) -> StoreResult<Advocate>;

    /// Retrieve every advocate in natural (insertion) order.
    async fn list(&self) -> StoreResult<Vec<Advocate>>;

    /// Retrieve the advocates matching `tokens`, in natural order.
    async fn search(&self, tokens: &[Token]) -> StoreResult<Vec<Advocate>>;

    /// Store new advocates, returning them with IDs and timestamps assigned.
    async fn insert_many(&self, advocates: &[Advocate]) -> StoreResult<Vec<Advocate>>;

    /// Number of stored advocates.
    async fn count(&self) -> StoreResult<usize>;
}
