use async_trait::async_trait;
use advocate_search::error::{StoreError, StoreResult};
use advocate_search::models::Advocate;
use advocate_search::repositories::AdvocateRepository;
use advocate_search::search::Token;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock advocate repository for testing.
///
/// Holds advocates in insertion order, tracks method calls for verification,
/// and can be switched into a failing mode to exercise error paths.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAdvocateRepository {
    advocates: Arc<Mutex<Vec<Advocate>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockAdvocateRepository {
    /// Create a new empty MockAdvocateRepository.
    pub fn new() -> Self {
        Self {
            advocates: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Add advocates, assigning ids in order starting at 1.
    pub fn add_advocates(&self, list: Vec<Advocate>) {
        let mut advocates = self.advocates.lock().unwrap();
        for mut advocate in list {
            advocate.id = advocates.len() as i64 + 1;
            advocates.push(advocate);
        }
    }

    /// Make every subsequent call fail with a store error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if *self.failing.lock().unwrap() {
            return Err(StoreError::InvalidRow(format!("mock failure in {}", method)));
        }
        Ok(())
    }
}

impl Default for MockAdvocateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdvocateRepository for MockAdvocateRepository {
    async fn get(&self, id: i64) -> StoreResult<Advocate> {
        self.track_call("get")?;

        let advocates = self.advocates.lock().unwrap();
        advocates
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("advocate {}", id)))
    }

    async fn list(&self) -> StoreResult<Vec<Advocate>> {
        self.track_call("list")?;
        Ok(self.advocates.lock().unwrap().clone())
    }

    async fn search(&self, tokens: &[Token]) -> StoreResult<Vec<Advocate>> {
        self.track_call("search")?;

        let advocates = self.advocates.lock().unwrap();
        Ok(advocates
            .iter()
            .filter(|a| advocate_search::search::matches(a, tokens))
            .cloned()
            .collect())
    }

    async fn insert_many(&self, advocates: &[Advocate]) -> StoreResult<Vec<Advocate>> {
        self.track_call("insert_many")?;

        let start = self.advocates.lock().unwrap().len();
        self.add_advocates(advocates.to_vec());
        Ok(self.advocates.lock().unwrap()[start..].to_vec())
    }

    async fn count(&self) -> StoreResult<usize> {
        self.track_call("count")?;
        Ok(self.advocates.lock().unwrap().len())
    }
}
