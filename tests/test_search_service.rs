//! Search service tests: documented scenarios, backend selection and error
//! reporting.

mod common;
mod mocks;

use advocate_search::config::SearchBackend;
use advocate_search::observability::SearchMetrics;
use advocate_search::repositories::AdvocateRepository;
use advocate_search::search::{highlight, matches, tokenize, Segment};
use advocate_search::seed::advocate_seed_data;
use advocate_search::services::{SearchService, SearchServiceImpl};
use mocks::MockAdvocateRepository;
use std::sync::Arc;

fn service_over(repo: Arc<dyn AdvocateRepository>, backend: SearchBackend) -> SearchServiceImpl {
    SearchServiceImpl::new(repo, backend, SearchMetrics::new())
}

#[test]
fn test_scenario_john_boston() {
    let record = common::john_doe();
    let tokens = tokenize("john boston");

    assert!(matches(&record, &tokens));
    assert_eq!(
        highlight("John Doe", &tokens),
        vec![Segment::matched("John"), Segment::plain(" Doe")]
    );
}

#[test]
fn test_scenario_no_match() {
    let record = common::john_doe();
    assert!(!matches(&record, &tokenize("xyz")));
}

#[test]
fn test_scenario_longest_match_priority() {
    let segments = highlight("Johnson", &tokenize("john johnson"));
    assert_eq!(segments, vec![Segment::matched("Johnson")]);
}

#[tokio::test]
async fn test_scenario_empty_query_returns_full_set() {
    for backend in [SearchBackend::Store, SearchBackend::InMemory] {
        let repo = common::sqlite_repo(&common::sample_directory()).await;
        let svc = service_over(repo, backend);

        let response = svc.search("").await.unwrap();
        assert!(response.tokens.is_empty());
        assert_eq!(
            response.results.len(),
            common::sample_directory().len(),
            "backend {}",
            backend
        );
    }
}

#[tokio::test]
async fn test_scenario_list_element_match() {
    let repo = common::sqlite_repo(&common::sample_directory()).await;
    let svc = service_over(repo, SearchBackend::Store);

    let response = svc.search("rn").await.unwrap();
    let names: Vec<String> = response
        .results
        .iter()
        .map(|r| r.advocate.full_name())
        .collect();
    assert_eq!(names, vec!["John Doe", "Alice Johnson"]);

    let alice = &response.results[1].highlights;
    assert_eq!(alice.specialties[0], vec![Segment::plain("Family Medicine")]);
    assert_eq!(alice.specialties[1], vec![Segment::matched("RN")]);
}

#[tokio::test]
async fn test_seed_directory_queries() {
    let repo = common::sqlite_repo(&advocate_seed_data()).await;
    let svc = service_over(repo, SearchBackend::Store);

    let response = svc.search("San MD").await.unwrap();
    let cities: Vec<Option<String>> = response
        .results
        .iter()
        .map(|r| r.advocate.city.clone())
        .collect();
    assert_eq!(
        cities,
        vec![
            Some("San Antonio".to_string()),
            Some("San Jose".to_string()),
            Some("San Francisco".to_string()),
        ]
    );

    // Phone numbers are searched through their decimal text.
    let response = svc.search("5551234567").await.unwrap();
    assert_eq!(response.results.len(), 1);
    assert_eq!(
        response.results[0].highlights.phone_number,
        vec![Segment::matched("5551234567")]
    );
}

#[tokio::test]
async fn test_store_backend_pushes_filter_to_repository() {
    let mock = MockAdvocateRepository::new();
    mock.add_advocates(common::sample_directory());
    let svc = service_over(Arc::new(mock.clone()), SearchBackend::Store);

    svc.search("boston").await.unwrap();
    assert_eq!(mock.get_call_count("search"), 1);
    assert_eq!(mock.get_call_count("list"), 0);
}

#[tokio::test]
async fn test_memory_backend_filters_listed_records() {
    let mock = MockAdvocateRepository::new();
    mock.add_advocates(common::sample_directory());
    let svc = service_over(Arc::new(mock.clone()), SearchBackend::InMemory);

    let response = svc.search("boston").await.unwrap();
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.backend, "memory");
    assert_eq!(mock.get_call_count("list"), 1);
    assert_eq!(mock.get_call_count("search"), 0);
}

#[tokio::test]
async fn test_store_failure_is_counted() {
    let mock = MockAdvocateRepository::new();
    mock.set_failing(true);
    let metrics = SearchMetrics::new();
    let svc = SearchServiceImpl::new(Arc::new(mock), SearchBackend::Store, metrics.clone());

    assert!(svc.search("anything").await.is_err());
    assert!(svc.seed().await.is_err());
    assert_eq!(metrics.store_errors_total(), 2);
    assert_eq!(metrics.searches_total(), 0);
}

#[tokio::test]
async fn test_seed_if_empty_skips_populated_store() {
    let repo = common::sqlite_repo(&common::sample_directory()).await;
    let svc = service_over(repo.clone(), SearchBackend::Store);

    assert_eq!(svc.seed_if_empty().await.unwrap(), 0);
    assert_eq!(repo.count().await.unwrap(), common::sample_directory().len());
}
