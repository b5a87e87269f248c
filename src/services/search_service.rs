//! Search service layer.
//!
//! Turns a raw query into highlighted results, using whichever backend the
//! server was configured with.

use crate::config::SearchBackend;
use crate::error::StoreResult;
use crate::models::Advocate;
use crate::observability::{SearchMetrics, Timer};
use crate::repositories::AdvocateRepository;
use crate::search::{filter_advocates, highlight, tokenize, Segment, Token};
use crate::seed::advocate_seed_data;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Highlighted display fields of one advocate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateHighlights {
    /// `"{first} {last}"`
    pub name: Vec<Segment>,
    /// City of practice
    pub city: Vec<Segment>,
    /// Degree or credential
    pub degree: Vec<Segment>,
    /// Years of experience as decimal text
    pub years_of_experience: Vec<Segment>,
    /// Phone number as stored
    pub phone_number: Vec<Segment>,
    /// One segment list per specialty, in order
    pub specialties: Vec<Vec<Segment>>,
}

impl AdvocateHighlights {
    /// Highlight every displayed field of `advocate`.
    pub fn new(advocate: &Advocate, tokens: &[Token]) -> Self {
        let text = |v: &Option<String>| highlight(v.as_deref().unwrap_or(""), tokens);
        let scalar = |v: &Option<crate::models::Scalar>| {
            highlight(&v.as_ref().map(|s| s.to_string()).unwrap_or_default(), tokens)
        };

        Self {
            name: highlight(&advocate.full_name(), tokens),
            city: text(&advocate.city),
            degree: text(&advocate.degree),
            years_of_experience: scalar(&advocate.years_of_experience),
            phone_number: scalar(&advocate.phone_number),
            specialties: advocate
                .specialties
                .iter()
                .map(|s| highlight(s, tokens))
                .collect(),
        }
    }
}

/// An advocate that matched a query, with its highlights.
#[derive(Debug, Clone, Serialize)]
pub struct AdvocateMatch {
    pub advocate: Advocate,
    pub highlights: AdvocateHighlights,
}

/// Response from a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Query exactly as received
    pub query: String,

    /// Tokens the query was split into
    pub tokens: Vec<Token>,

    /// Backend that evaluated the query
    pub backend: String,

    /// Matching advocates in natural order
    pub results: Vec<AdvocateMatch>,
}

/// Search service trait for directory operations.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Search the directory. A blank query returns every advocate.
    async fn search(&self, query: &str) -> StoreResult<SearchResponse>;

    /// Get one advocate, highlighted against `query`.
    async fn get_advocate(&self, id: i64, query: &str) -> StoreResult<AdvocateMatch>;

    /// Insert the seed directory, returning the stored records.
    async fn seed(&self) -> StoreResult<Vec<Advocate>>;

    /// Insert the seed directory only when the store is empty.
    ///
    /// Returns the number of advocates inserted.
    async fn seed_if_empty(&self) -> StoreResult<usize>;
}

/// Default implementation of SearchService.
pub struct SearchServiceImpl {
    repository: Arc<dyn AdvocateRepository>,
    backend: SearchBackend,
    metrics: SearchMetrics,
}

impl SearchServiceImpl {
    /// Create a new search service.
    pub fn new(
        repository: Arc<dyn AdvocateRepository>,
        backend: SearchBackend,
        metrics: SearchMetrics,
    ) -> Self {
        Self {
            repository,
            backend,
            metrics,
        }
    }

    /// Backend this service evaluates queries with.
    pub fn backend(&self) -> SearchBackend {
        self.backend
    }

    async fn find(&self, tokens: &[Token]) -> StoreResult<Vec<Advocate>> {
        match self.backend {
            SearchBackend::Store => self.repository.search(tokens).await,
            SearchBackend::InMemory => {
                let all = self.repository.list().await?;
                Ok(filter_advocates(all, tokens).collect())
            }
        }
    }
}

#[async_trait]
impl SearchService for SearchServiceImpl {
    async fn search(&self, query: &str) -> StoreResult<SearchResponse> {
        let timer = Timer::new("search");
        let tokens = tokenize(query);

        let advocates = self.find(&tokens).await.map_err(|e| {
            self.metrics.track_store_error("search");
            e
        })?;

        let results: Vec<AdvocateMatch> = advocates
            .into_iter()
            .map(|advocate| {
                let highlights = AdvocateHighlights::new(&advocate, &tokens);
                AdvocateMatch {
                    advocate,
                    highlights,
                }
            })
            .collect();

        let backend = self.backend.to_string();
        self.metrics
            .track_search(&backend, tokens.len(), timer.finish(), results.len());

        Ok(SearchResponse {
            query: query.to_string(),
            tokens,
            backend,
            results,
        })
    }

    async fn get_advocate(&self, id: i64, query: &str) -> StoreResult<AdvocateMatch> {
        let advocate = self.repository.get(id).await?;
        let highlights = AdvocateHighlights::new(&advocate, &tokenize(query));
        Ok(AdvocateMatch {
            advocate,
            highlights,
        })
    }

    async fn seed(&self) -> StoreResult<Vec<Advocate>> {
        let inserted = self
            .repository
            .insert_many(&advocate_seed_data())
            .await
            .map_err(|e| {
                self.metrics.track_store_error("seed");
                e
            })?;
        tracing::info!("Seeded {} advocates", inserted.len());
        Ok(inserted)
    }

    async fn seed_if_empty(&self) -> StoreResult<usize> {
        if self.repository.count().await? > 0 {
            tracing::debug!("Store already populated, skipping seed");
            return Ok(0);
        }
        Ok(self.seed().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryAdvocateRepository, SqliteAdvocateRepository};

    fn service(repo: Arc<dyn AdvocateRepository>, backend: SearchBackend) -> SearchServiceImpl {
        SearchServiceImpl::new(repo, backend, SearchMetrics::new())
    }

    #[test]
    fn test_highlights_cover_display_fields() {
        let advocate = Advocate::new("John", "Doe", "Boston", "MD")
            .with_specialties(["Family Medicine", "RN"])
            .with_years_of_experience(10);
        let highlights = AdvocateHighlights::new(&advocate, &tokenize("john rn"));

        assert_eq!(
            highlights.name,
            vec![Segment::matched("John"), Segment::plain(" Doe")]
        );
        assert_eq!(highlights.city, vec![Segment::plain("Boston")]);
        assert_eq!(highlights.years_of_experience, vec![Segment::plain("10")]);
        assert!(highlights.phone_number.is_empty());
        assert_eq!(highlights.specialties[1], vec![Segment::matched("RN")]);
    }

    #[tokio::test]
    async fn test_search_blank_query_returns_everything() {
        let svc = service(
            Arc::new(InMemoryAdvocateRepository::new()),
            SearchBackend::Store,
        );
        svc.seed().await.unwrap();

        let response = svc.search("   ").await.unwrap();
        assert!(response.tokens.is_empty());
        assert_eq!(response.results.len(), advocate_seed_data().len());
        assert!(response.results[0].highlights.name.iter().all(|s| !s.is_match));
    }

    #[tokio::test]
    async fn test_search_backends_agree() {
        let repo: Arc<dyn AdvocateRepository> =
            Arc::new(SqliteAdvocateRepository::open_in_memory().unwrap());
        let store = service(repo.clone(), SearchBackend::Store);
        let memory = service(repo, SearchBackend::InMemory);
        store.seed().await.unwrap();

        for query in ["", "md", "san phd", "adhd", "555", "family medicine", "zzz"] {
            let a = store.search(query).await.unwrap();
            let b = memory.search(query).await.unwrap();
            let ids_a: Vec<i64> = a.results.iter().map(|r| r.advocate.id).collect();
            let ids_b: Vec<i64> = b.results.iter().map(|r| r.advocate.id).collect();
            assert_eq!(ids_a, ids_b, "backends disagree on {:?}", query);
        }
    }

    #[tokio::test]
    async fn test_search_records_metrics() {
        let metrics = SearchMetrics::new();
        let svc = SearchServiceImpl::new(
            Arc::new(InMemoryAdvocateRepository::new()),
            SearchBackend::InMemory,
            metrics.clone(),
        );
        svc.seed().await.unwrap();

        let response = svc.search("houston").await.unwrap();
        assert_eq!(response.backend, "memory");
        assert_eq!(response.results.len(), 1);
        assert_eq!(metrics.searches_total(), 1);
        assert_eq!(metrics.results_total(), 1);
    }

    #[tokio::test]
    async fn test_seed_if_empty_runs_once() {
        let svc = service(
            Arc::new(InMemoryAdvocateRepository::new()),
            SearchBackend::Store,
        );
        let first = svc.seed_if_empty().await.unwrap();
        let second = svc.seed_if_empty().await.unwrap();
        assert_eq!(first, advocate_seed_data().len());
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn test_get_advocate_highlighted() {
        let svc = service(
            Arc::new(InMemoryAdvocateRepository::new()),
            SearchBackend::Store,
        );
        svc.seed().await.unwrap();

        let found = svc.get_advocate(1, "york").await.unwrap();
        assert_eq!(found.advocate.first_name.as_deref(), Some("John"));
        assert_eq!(
            found.highlights.city,
            vec![Segment::plain("New "), Segment::matched("York")]
        );
        assert!(svc.get_advocate(999, "").await.is_err());
    }
}
